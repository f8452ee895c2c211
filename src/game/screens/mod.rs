use eframe::Frame;

pub mod game;
pub mod main_menu;

pub use game::GameScreen;
pub use main_menu::MainMenu;

use crate::game::state::RoundStatePublic;

/// Interface for screens to interact with the app: queue intents, read the
/// session snapshot. Screens never mutate game state directly.
pub struct AppInterface<'a> {
    pub events: &'a mut Vec<crate::game::AppEvent>,
    pub round: &'a RoundStatePublic,
}

impl<'a> AppInterface<'a> {
    pub fn queue_event(&mut self, event: crate::game::AppEvent) {
        self.events.push(event);
    }

    pub fn round(&self) -> &RoundStatePublic {
        self.round
    }
}

/// Object-safe runtime trait for drawing a screen
pub trait ScreenWidget {
    fn ui(&mut self, app_interface: &mut AppInterface, ui: &mut egui::Ui, frame: &mut Frame);
}

/// Enum representing all available screen types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenType {
    Main,
    Game,
}
