//! Odd & Even - a fast-paced number guessing game for the browser
//!
//! The round engine runs the countdown/reveal state machine; an egui
//! frontend renders it via eframe's web runner.

pub mod game;

#[cfg(target_arch = "wasm32")]
use eframe::AppCreator;
#[cfg(target_arch = "wasm32")]
use eframe::{WebOptions, WebRunner};
#[cfg(target_arch = "wasm32")]
use game::App;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlCanvasElement};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    /// JavaScript console.log binding for debug output
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Platform-agnostic println! alternative that works in both native and WASM
/// targets, allowing for consistent debug output across platforms.
#[macro_export]
macro_rules! sprintln {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::log(format!($($arg)*).as_str());
        #[cfg(not(target_arch = "wasm32"))]
        println!($($arg)*);
    }};
}

/// Helper function to start the eframe app with a canvas element
#[cfg(target_arch = "wasm32")]
pub fn start_game(
    canvas: web_sys::HtmlCanvasElement,
    init: AppCreator<'static>,
) -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Forward tracing::info!/warn!/error! to the browser console.
    tracing_wasm::set_as_global_default();

    let web_options = WebOptions::default();
    spawn_local(async move {
        if let Err(e) = WebRunner::new().start(canvas, web_options, init).await {
            // Avoid panicking inside the wasm task; log instead
            crate::sprintln!("Failed to start eframe: {e:?}");
        }
    });
    Ok(())
}

/// Calculate the appropriate UI scale factor based on screen resolution and
/// device pixel ratio, to be used with `ctx.set_pixels_per_point()`.
#[cfg(target_arch = "wasm32")]
pub fn calculate_dpi_scale() -> f32 {
    let window = window().expect("no global window exists");
    let device_pixel_ratio = window.device_pixel_ratio() as f32;
    let screen = window.screen().expect("unable to get screen object");
    let width = screen.width().unwrap_or(1920) as f32;
    let height = screen.height().unwrap_or(1080) as f32;
    let diagonal = (width * width + height * height).sqrt();
    let base_scale = if diagonal > 3000.0 {
        1.8
    } else if diagonal > 2000.0 {
        1.4
    } else if diagonal > 1500.0 {
        1.2
    } else {
        1.0
    };
    base_scale * (device_pixel_ratio / 2.0).max(0.75).min(1.5)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn calculate_dpi_scale() -> f32 {
    // Default for non-WASM targets
    1.5
}

/// Main entry point for starting the WASM application in a browser
///
/// Call from JavaScript with the canvas element the game should render to:
///
/// ```javascript
/// import init, {start} from './pkg/oddeven.js';
///
/// async function run() {
///     await init();
///     start(document.getElementById("oddeven_canvas"));
/// }
///
/// run();
/// ```
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let init = Box::new(|_cc: &eframe::CreationContext| {
        let app = App::new();
        let game: Box<dyn eframe::App> = Box::new(app);
        Ok(game)
    });
    start_game(canvas, init)
}
