mod geometry;
mod graphics;
mod math;
mod shading;
mod state;
mod widget;

use druid::{AppLauncher, LocalizedString, PlatformError, WindowDesc};

use crate::geometry::{STEPS_U, STEPS_V};
use crate::math::{HEIGHT, WIDTH};
use crate::state::AppState;
use crate::widget::HyperboloidWidget;

fn main() -> Result<(), PlatformError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!(
        "starting hyperboloid viewer: {}x{} canvas, {}x{} grid",
        WIDTH,
        HEIGHT,
        STEPS_U,
        STEPS_V
    );

    let main_window = WindowDesc::new(HyperboloidWidget::new())
        .title(LocalizedString::new("3D Hyperboloid with Axes"))
        .window_size((WIDTH as f64, HEIGHT as f64))
        .resizable(false);

    AppLauncher::with_window(main_window).launch(AppState::new())?;

    Ok(())
}
