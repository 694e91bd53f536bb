use druid::Data;

/// Initial scale, and the cap the zoom can never exceed
pub const SCALE_INIT: f64 = 70.0;
/// Radians of rotation per pixel of drag
const DRAG_SENSITIVITY: f64 = 0.01;
/// Multiplicative zoom steps per wheel tick
const ZOOM_IN_STEP: f64 = 1.1;
const ZOOM_OUT_STEP: f64 = 0.9;

/// Camera state driving the render pipeline. Angles accumulate without
/// bound; the scale is clamped at SCALE_INIT. The transient drag flag
/// and last cursor position live on the widget.
#[derive(Clone, Data)]
pub struct AppState {
    /// Rotation angle around the X-axis, in radians
    pub angle_x: f64,
    /// Rotation angle around the Y-axis, in radians
    pub angle_y: f64,
    /// Projection scale (zoom level)
    pub scale: f64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            angle_x: 0.0,
            angle_y: 0.0,
            scale: SCALE_INIT,
        }
    }

    /// Applies a cursor drag delta: horizontal motion yaws, vertical
    /// motion pitches
    pub fn apply_drag(&mut self, dx: f64, dy: f64) {
        self.angle_y += dx * DRAG_SENSITIVITY;
        self.angle_x += dy * DRAG_SENSITIVITY;
    }

    /// Zooms in for positive deltas, out for non-positive ones. Zoom-in
    /// is capped at the initial scale; zoom-out is unbounded.
    pub fn zoom(&mut self, delta: f64) {
        self.scale *= if delta > 0.0 { ZOOM_IN_STEP } else { ZOOM_OUT_STEP };
        if self.scale > SCALE_INIT {
            self.scale = SCALE_INIT;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_in_is_capped_at_initial_scale() {
        let mut state = AppState::new();
        state.zoom(1.0);
        assert_eq!(state.scale, SCALE_INIT);
    }

    #[test]
    fn test_zoom_out_is_unbounded() {
        let mut state = AppState::new();
        state.zoom(-1.0);
        assert!((state.scale - 63.0).abs() < 1e-9);
        for _ in 0..200 {
            state.zoom(-1.0);
        }
        assert!(state.scale < 1e-3);
        assert!(state.scale > 0.0);
    }

    #[test]
    fn test_zoom_back_in_after_zooming_out() {
        let mut state = AppState::new();
        state.zoom(-1.0);
        state.zoom(1.0);
        assert!((state.scale - 69.3).abs() < 1e-9);
    }

    #[test]
    fn test_drag_sensitivity() {
        let mut state = AppState::new();
        state.apply_drag(10.0, -4.0);
        assert!((state.angle_y - 0.1).abs() < 1e-12);
        assert!((state.angle_x + 0.04).abs() < 1e-12);
    }
}
