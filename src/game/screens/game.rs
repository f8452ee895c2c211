use eframe::Frame;
use egui::{FontId, RichText, Ui};

use super::{AppInterface, ScreenWidget};
use crate::game::state::{Parity, RoundStatePublic, Stage};
use crate::game::theme::{
    CHOICE_BUTTON_SIZE, COLOR_CORRECT, COLOR_INCORRECT, FONT_SIZE_LG, FONT_SIZE_MD, FONT_SIZE_SM,
    FONT_SIZE_XS, MARGIN_LG, MARGIN_MD, MARGIN_SM, MARGIN_XL,
};
use crate::game::AppEvent;

/// The odd/even round screen. Pure presentation: it renders the session
/// snapshot and queues user intents back to the app.
#[derive(Default)]
pub struct GameScreen {}

impl GameScreen {
    pub fn new() -> Self {
        Self {}
    }

    fn stat_card(ui: &mut Ui, label: &str, value: String) {
        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.set_min_width(90.0);
                ui.label(RichText::new(label).font(FontId::proportional(FONT_SIZE_XS)).weak());
                ui.label(
                    RichText::new(value)
                        .font(FontId::proportional(FONT_SIZE_MD))
                        .strong(),
                );
            });
        });
    }

    fn stats_row(ui: &mut Ui, round: &RoundStatePublic) {
        ui.horizontal(|ui| {
            // Center the three cards by padding half the leftover width.
            let cards_width = 3.0 * 110.0;
            let pad = ((ui.available_width() - cards_width) / 2.0).max(0.0);
            ui.add_space(pad);
            Self::stat_card(ui, "Score", round.score.to_string());
            Self::stat_card(ui, "Current Streak", round.streak.to_string());
            Self::stat_card(ui, "Best Streak", round.best_streak.to_string());
        });
    }

    fn choice_section(app_interface: &mut AppInterface, ui: &mut Ui) {
        ui.label(
            RichText::new("Pick Your Choice")
                .font(FontId::proportional(FONT_SIZE_MD))
                .strong(),
        );
        ui.label("Fast and casual - just pick Odd or Even!");
        ui.add_space(MARGIN_LG);
        ui.horizontal(|ui| {
            let pad = ((ui.available_width() - 2.0 * CHOICE_BUTTON_SIZE.x - MARGIN_MD) / 2.0).max(0.0);
            ui.add_space(pad);
            for (label, parity) in [("Odd", Parity::Odd), ("Even", Parity::Even)] {
                let button =
                    egui::Button::new(RichText::new(label).font(FontId::proportional(FONT_SIZE_MD)));
                if ui.add_sized(CHOICE_BUTTON_SIZE, button).clicked() {
                    app_interface.queue_event(AppEvent::Choose(parity));
                }
                ui.add_space(MARGIN_MD);
            }
        });
    }

    fn countdown_section(ui: &mut Ui, round: &RoundStatePublic) {
        if let Some(n) = round.countdown {
            ui.label(
                RichText::new(n.to_string())
                    .font(FontId::proportional(FONT_SIZE_LG))
                    .strong(),
            );
        }
        ui.label("Get ready...");
    }

    fn waiting_section(ui: &mut Ui) {
        ui.add(egui::Spinner::new().size(FONT_SIZE_LG));
        ui.add_space(MARGIN_SM);
        ui.label("Generating number...");
    }

    fn result_section(app_interface: &mut AppInterface, ui: &mut Ui, round: &RoundStatePublic) {
        let (Some(number), Some(choice), Some(correct)) = (round.number, round.choice, round.correct)
        else {
            return;
        };

        let (title, color) = if correct {
            ("Correct!", COLOR_CORRECT)
        } else {
            ("Try Again!", COLOR_INCORRECT)
        };
        ui.label(
            RichText::new(title)
                .font(FontId::proportional(FONT_SIZE_MD))
                .color(color)
                .strong(),
        );
        ui.add_space(MARGIN_SM);
        ui.label(
            RichText::new(number.to_string())
                .font(FontId::proportional(FONT_SIZE_LG))
                .strong(),
        );
        ui.label(format!(
            "{} is {} • You chose {}",
            number,
            Parity::of(number),
            choice
        ));
        ui.add_space(MARGIN_SM);
        if correct {
            ui.label("+1 point! Keep the streak going!");
        } else {
            ui.label(format!("The number was {}", Parity::of(number)));
        }
        ui.add_space(MARGIN_LG);
        ui.horizontal(|ui| {
            let pad = ((ui.available_width() - 220.0) / 2.0).max(0.0);
            ui.add_space(pad);
            if ui.button(RichText::new("Play Again").font(FontId::proportional(FONT_SIZE_SM))).clicked() {
                app_interface.queue_event(AppEvent::NextRound);
            }
            ui.add_space(MARGIN_SM);
            if ui.button("Reset Game").clicked() {
                app_interface.queue_event(AppEvent::ResetGame);
            }
        });
    }

    fn instructions(ui: &mut Ui) {
        ui.weak("How to play: pick Odd or Even • a number from 1 to 100 is drawn");
        ui.weak("Correct guess = +1 point • build streaks for bragging rights");
    }
}

impl ScreenWidget for GameScreen {
    fn ui(&mut self, app_interface: &mut AppInterface, ui: &mut egui::Ui, _frame: &mut Frame) {
        let round = app_interface.round().clone();
        ui.vertical_centered(|ui| {
            ui.add_space(MARGIN_MD);
            Self::stats_row(ui, &round);
            ui.add_space(MARGIN_XL);

            match round.stage {
                Stage::Idle => Self::choice_section(app_interface, ui),
                Stage::Countdown => Self::countdown_section(ui, &round),
                Stage::Waiting => Self::waiting_section(ui),
                Stage::Result => Self::result_section(app_interface, ui, &round),
            }

            ui.add_space(MARGIN_XL);
            Self::instructions(ui);
        });
    }
}
