use druid::Color;

/// Hue endpoints for the depth gradient. Currently equal, which pins the
/// hue; the interpolation stays generic so the palette can be retuned by
/// editing the constants.
const HUE_START: f64 = 0.9;
const HUE_END: f64 = 0.9;
const SATURATION: f64 = 0.8;
/// Value (brightness) endpoints: near vertices render bright, far dim
const VALUE_START: f64 = 0.9;
const VALUE_END: f64 = 0.1;

/// Floor for the depth span, so an edge-on view (all depths equal)
/// never divides by zero
const MIN_DEPTH_RANGE: f64 = 1e-5;

/// Per-frame depth normalization window, built from the extrema of all
/// on-canvas rotated vertices.
#[derive(Debug, Clone, Copy)]
pub struct DepthRange {
    min_z: f64,
    range: f64,
}

impl DepthRange {
    pub fn new(min_z: f64, max_z: f64) -> Self {
        Self {
            min_z,
            range: (max_z - min_z).max(MIN_DEPTH_RANGE),
        }
    }

    /// Normalized depth in [0, 1]; 0 is nearest, 1 is farthest
    pub fn normalize(&self, z: f64) -> f64 {
        ((z - self.min_z) / self.range).clamp(0.0, 1.0)
    }
}

/// Maps a normalized depth to a color: hue and value are linearly
/// interpolated between their endpoints, saturation is fixed.
pub fn depth_color(d: f64) -> Color {
    let h = HUE_START + (HUE_END - HUE_START) * d;
    let v = VALUE_START + (VALUE_END - VALUE_START) * d;
    hsv_to_rgb(h, SATURATION, v)
}

/// Standard sector-based HSV to RGB conversion; h, s, v in [0, 1]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Color {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Color::rgb8((255.0 * r) as u8, (255.0 * g) as u8, (255.0 * b) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bounds() {
        let range = DepthRange::new(0.0, 10.0);
        assert_eq!(range.normalize(0.0), 0.0);
        assert_eq!(range.normalize(10.0), 1.0);
        assert_eq!(range.normalize(5.0), 0.5);
        // Out-of-window depths clamp rather than escape [0, 1]
        assert_eq!(range.normalize(-5.0), 0.0);
        assert_eq!(range.normalize(15.0), 1.0);
    }

    #[test]
    fn test_degenerate_range() {
        // Edge-on view: all depths coincide, the span floors at 1e-5
        let range = DepthRange::new(2.0, 2.0);
        let d = range.normalize(2.0);
        assert!(d.is_finite());
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_empty_depth_window() {
        // No vertex landed on-canvas: the extrema are still at their
        // infinite initial values. The span floors and every depth
        // collapses to 0 so the frame still renders.
        let range = DepthRange::new(f64::INFINITY, f64::NEG_INFINITY);
        for z in [-3.6, 0.0, 1.5] {
            let d = range.normalize(z);
            assert!(d.is_finite());
            assert_eq!(d, 0.0);
        }
    }

    #[test]
    fn test_near_is_brighter_than_far() {
        let (r0, g0, b0, _) = depth_color(0.0).as_rgba8();
        let (r1, g1, b1, _) = depth_color(1.0).as_rgba8();
        let near = r0 as u32 + g0 as u32 + b0 as u32;
        let far = r1 as u32 + g1 as u32 + b1 as u32;
        assert!(near > far);
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0).as_rgba8(), (255, 0, 0, 255));
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0).as_rgba8(), (0, 255, 0, 255));
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0).as_rgba8(), (0, 0, 255, 255));
    }

    #[test]
    fn test_hsv_zero_saturation_is_gray() {
        let (r, g, b, _) = hsv_to_rgb(0.37, 0.0, 0.5).as_rgba8();
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(r, 127);
    }
}
