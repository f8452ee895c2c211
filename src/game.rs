use egui::Context;

pub mod engine;
pub mod flow;
pub mod screens;
pub mod state;
pub mod theme;

use screens::{AppInterface, GameScreen, MainMenu, ScreenType, ScreenWidget};
use state::Parity;
use theme::{MARGIN_SM, NAVBAR_ROW_HEIGHT_EXTRA, NAVBAR_WIDTH_LEFT, NAVBAR_WIDTH_RIGHT};

/// Events that can be sent between screens
#[derive(Debug, Clone)]
pub enum AppEvent {
    ChangeScreen(ScreenType),
    Choose(Parity),
    NextRound,
    ResetGame,
}

/// Global settings for the application
#[derive(Clone)]
pub struct Settings {
    pub dpi: f32,
    pub applied_dpi: f32,
    pub dark_mode: bool,
}

/// Application state that owns the session and all screen data
pub struct App {
    // Screen management
    current_screen: ScreenType,
    main_menu: MainMenu,
    game_screen: GameScreen,

    // The round state machine; screens only ever see its public snapshot.
    game: engine::Game,

    // Global settings UI state
    settings_open: bool,
    pending_settings: Settings,

    // Event queue for handling screen intents
    pending_events: Vec<AppEvent>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let dpi = crate::calculate_dpi_scale();
        Self {
            current_screen: ScreenType::Main,
            main_menu: MainMenu::new(),
            game_screen: GameScreen::new(),
            game: engine::Game::new(),
            settings_open: false,
            pending_settings: Settings {
                dpi,
                applied_dpi: dpi,
                dark_mode: true,
            },
            pending_events: Vec::new(),
        }
    }

    /// Queue an event to be processed
    pub fn queue_event(&mut self, event: AppEvent) {
        self.pending_events.push(event);
    }

    /// Process all pending events against the session at time `now`.
    fn process_events(&mut self, now: f64) {
        let events = std::mem::take(&mut self.pending_events);
        for event in events {
            match event {
                AppEvent::ChangeScreen(screen_type) => {
                    self.current_screen = screen_type;
                }
                AppEvent::Choose(parity) => {
                    self.game.choose(parity, now);
                }
                AppEvent::NextRound => {
                    self.game.next_round();
                }
                AppEvent::ResetGame => {
                    self.game.reset();
                }
            }
        }
    }

    /// Get the current screen type
    pub fn current_screen(&self) -> ScreenType {
        self.current_screen
    }

    fn render_top_bar(&mut self, ctx: &Context, events: &mut Vec<AppEvent>) {
        egui::TopBottomPanel::top("global_top_bar")
            .show_separator_line(false)
            .frame(
                egui::Frame::default()
                    .fill(ctx.style().visuals.window_fill())
                    .inner_margin(egui::Margin::symmetric(0, 8)),
            )
            .show(ctx, |ui| {
                egui::MenuBar::new().ui(ui, |ui| {
                    let avail = ui.available_width();
                    let center_w = (avail - NAVBAR_WIDTH_LEFT - NAVBAR_WIDTH_RIGHT).max(0.0);
                    let row_h = ui.spacing().interact_size.y + NAVBAR_ROW_HEIGHT_EXTRA;

                    ui.allocate_ui_with_layout(
                        egui::vec2(NAVBAR_WIDTH_LEFT, row_h),
                        egui::Layout::left_to_right(egui::Align::Min),
                        |ui| {
                            ui.add_space(MARGIN_SM);
                            if ui.button("⬅ Back").on_hover_text("Back to menu").clicked() {
                                events.push(AppEvent::ChangeScreen(ScreenType::Main));
                            }
                        },
                    );

                    ui.allocate_ui_with_layout(
                        egui::vec2(center_w, row_h),
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.strong("Odd & Even");
                        },
                    );

                    ui.allocate_ui_with_layout(
                        egui::vec2(NAVBAR_WIDTH_RIGHT, row_h),
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.add_space(MARGIN_SM);
                            if ui
                                .button("⚙ Settings")
                                .on_hover_text("Open global settings")
                                .clicked()
                            {
                                self.settings_open = true;
                            }
                        },
                    );
                });
            });

        if self.settings_open {
            let mut open = true;
            egui::Window::new("Settings")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(format!("Version: {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(MARGIN_SM);
                    ui.add(
                        egui::Slider::new(&mut self.pending_settings.dpi, 0.75..=2.0)
                            .text("UI scale (DPI)"),
                    );
                    if ui.button("Reset to default").clicked() {
                        self.pending_settings.dpi = crate::calculate_dpi_scale();
                    }
                    ui.checkbox(&mut self.pending_settings.dark_mode, "Dark mode");
                    ui.add_space(MARGIN_SM);
                    ui.horizontal(|ui| {
                        if ui.button("Apply").clicked() {
                            self.pending_settings.applied_dpi = self.pending_settings.dpi;
                        }
                        if ui.button("OK").clicked() {
                            self.pending_settings.applied_dpi = self.pending_settings.dpi;
                            self.settings_open = false;
                        }
                        if ui.button("Cancel").clicked() {
                            self.pending_settings.dpi = self.pending_settings.applied_dpi;
                            self.settings_open = false;
                        }
                    });
                });
            if !open {
                self.pending_settings.dpi = self.pending_settings.applied_dpi;
                self.settings_open = false;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.pending_settings.applied_dpi);
        if self.pending_settings.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // All timer firings happen here, on the frame clock.
        let now = ctx.input(|i| i.time);
        self.game.tick(now);

        let mut events = Vec::new();

        if self.current_screen != ScreenType::Main {
            self.render_top_bar(ctx, &mut events);
        }

        let snapshot = self.game.public();
        let mut app_interface = AppInterface {
            events: &mut events,
            round: &snapshot,
        };

        egui::CentralPanel::default().show(ctx, |ui| match self.current_screen {
            ScreenType::Main => self.main_menu.ui(&mut app_interface, ui, frame),
            ScreenType::Game => self.game_screen.ui(&mut app_interface, ui, frame),
        });

        let events = std::mem::take(app_interface.events);
        for event in events {
            self.queue_event(event);
        }
        self.process_events(now);

        // Keep repainting while a timer chain is running so countdown steps
        // land without user input.
        if self.game.is_running() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::state::Stage;

    #[test]
    fn test_app_initialization() {
        let app = App::new();
        assert_eq!(app.current_screen(), ScreenType::Main);
        assert_eq!(app.game.stage(), Stage::Idle);
    }

    #[test]
    fn test_event_processing() {
        let mut app = App::new();

        app.queue_event(AppEvent::ChangeScreen(ScreenType::Game));
        app.process_events(0.0);
        assert_eq!(app.current_screen(), ScreenType::Game);

        app.queue_event(AppEvent::Choose(Parity::Odd));
        app.process_events(0.0);
        assert_eq!(app.game.stage(), Stage::Countdown);

        // A reset intent drops the round and the counters.
        app.queue_event(AppEvent::ResetGame);
        app.process_events(1.0);
        assert_eq!(app.game.stage(), Stage::Idle);
        assert_eq!(app.game.public().score, 0);
    }

    #[test]
    fn test_full_round_through_events() {
        let mut app = App::new();
        app.queue_event(AppEvent::Choose(Parity::Even));
        app.process_events(0.0);
        app.game.tick(10.0);
        assert_eq!(app.game.stage(), Stage::Result);

        app.queue_event(AppEvent::NextRound);
        app.process_events(10.0);
        assert_eq!(app.game.stage(), Stage::Idle);
    }
}
