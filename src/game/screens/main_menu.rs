use eframe::Frame;
use egui::{vec2, FontId, RichText};

use super::{AppInterface, ScreenType, ScreenWidget};
use crate::game::theme::{FONT_SIZE_MD, FONT_SIZE_SM, MARGIN_XL};
use crate::sprintln;

/// Main menu screen
#[derive(Default)]
pub struct MainMenu {}

impl MainMenu {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScreenWidget for MainMenu {
    fn ui(&mut self, app_interface: &mut AppInterface, ui: &mut egui::Ui, _frame: &mut Frame) {
        ui.vertical_centered(|ui| {
            ui.add_space(MARGIN_XL * 2.0);

            ui.label(
                RichText::new("🎲 Odd & Even")
                    .font(FontId::proportional(FONT_SIZE_MD))
                    .strong(),
            );
            ui.label("Fast-paced number guessing game");
            ui.add_space(MARGIN_XL);

            let button_size = vec2(180.0, 80.0);
            let play = egui::Button::new(RichText::new("▶ Play").font(FontId::proportional(FONT_SIZE_SM)));
            if ui.add_sized(button_size, play).clicked() {
                sprintln!("game opened");
                app_interface.queue_event(crate::game::AppEvent::ChangeScreen(ScreenType::Game));
            }

            ui.add_space(MARGIN_XL);
            ui.weak("Guess whether the next number is odd or even.");
        });
    }
}
