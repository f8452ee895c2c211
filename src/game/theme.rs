use egui::Color32;

pub const MARGIN_SM: f32 = 8.0;
pub const MARGIN_MD: f32 = 12.0;
pub const MARGIN_LG: f32 = 16.0;
pub const MARGIN_XL: f32 = 32.0;

pub const NAVBAR_WIDTH_LEFT: f32 = 120.0;
pub const NAVBAR_WIDTH_RIGHT: f32 = 140.0;
pub const NAVBAR_ROW_HEIGHT_EXTRA: f32 = 12.0;

pub const FONT_SIZE_XS: f32 = 14.0;
pub const FONT_SIZE_SM: f32 = 16.0;
pub const FONT_SIZE_MD: f32 = 24.0;
pub const FONT_SIZE_LG: f32 = 48.0;

pub const CHOICE_BUTTON_SIZE: egui::Vec2 = egui::vec2(160.0, 90.0);

pub const COLOR_CORRECT: Color32 = Color32::from_rgb(46, 160, 67);
pub const COLOR_INCORRECT: Color32 = Color32::from_rgb(218, 54, 51);
