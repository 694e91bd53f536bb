use crate::geometry::Point3;

/// Canvas dimensions in pixels
pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 800;
/// Perspective field-of-view constant
pub const FOV: f64 = 256.0;
/// Guards the perspective divide when a vertex sits on the projection plane
const EPSILON: f64 = 1e-5;

/// A pixel coordinate, always inside [0, WIDTH) x [0, HEIGHT)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

/// Projection result: the clamped pixel coordinate plus whether the
/// unclamped coordinate actually fell inside the canvas. Off-canvas
/// vertices keep a valid border pixel but are excluded from the frame's
/// depth range.
#[derive(Debug, Clone, Copy)]
pub struct Projected {
    pub point: ScreenPoint,
    pub on_canvas: bool,
}

/// Rotates a point about the X axis by `angle_x`, then about the Y axis
/// by `angle_y`. The order is fixed: drag-to-orbit behavior depends on
/// X-then-Y composition.
pub fn rotate_point(p: Point3, angle_x: f64, angle_y: f64) -> Point3 {
    let (sin_x, cos_x) = angle_x.sin_cos();
    let (sin_y, cos_y) = angle_y.sin_cos();

    let y = p.y * cos_x - p.z * sin_x;
    let z = p.y * sin_x + p.z * cos_x;

    let x = p.x * cos_y + z * sin_y;
    let z = -p.x * sin_y + z * cos_y;

    Point3::new(x, y, z)
}

/// Perspective-projects a rotated point to pixel coordinates. The Y axis
/// is inverted to match the top-left pixel origin. Coordinates are
/// clamped to the canvas rather than rejected, so off-screen points
/// collapse to the border.
pub fn project_point(p: Point3, scale: f64) -> Projected {
    let f = FOV / (FOV + p.z + EPSILON);
    let sx = (WIDTH as f64 / 2.0 + p.x * f * scale).round();
    let sy = (HEIGHT as f64 / 2.0 - p.y * f * scale).round();

    let on_canvas = sx >= 0.0 && sx < WIDTH as f64 && sy >= 0.0 && sy < HEIGHT as f64;

    // `as i64` saturates on overflow, so the clamp holds for any finite input
    Projected {
        point: ScreenPoint {
            x: (sx as i64).clamp(0, WIDTH as i64 - 1) as i32,
            y: (sy as i64).clamp(0, HEIGHT as i64 - 1) as i32,
        },
        on_canvas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_rotation() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(rotate_point(p, 0.0, 0.0), p);
    }

    #[test]
    fn test_rotation_order_dependence() {
        // X-then-Y differs from Y-then-X for a general point and angles
        let p = Point3::new(1.0, 2.0, 3.0);
        let (ax, ay) = (0.7, 0.4);

        let xy = rotate_point(p, ax, ay);

        // Manual Y-then-X composition
        let (sin_x, cos_x) = ax.sin_cos();
        let (sin_y, cos_y) = ay.sin_cos();
        let x = p.x * cos_y + p.z * sin_y;
        let z = -p.x * sin_y + p.z * cos_y;
        let y = p.y * cos_x - z * sin_x;
        let z = p.y * sin_x + z * cos_x;
        let yx = Point3::new(x, y, z);

        assert!((xy.x - yx.x).abs() > 1e-6 || (xy.z - yx.z).abs() > 1e-6);
    }

    #[test]
    fn test_project_origin_to_center() {
        let proj = project_point(Point3::new(0.0, 0.0, 0.0), 70.0);
        assert_eq!(proj.point, ScreenPoint { x: 400, y: 400 });
        assert!(proj.on_canvas);
    }

    #[test]
    fn test_projection_clamping() {
        // Far off to the upper right: x clamps to the right edge,
        // y clamps to the top edge
        let proj = project_point(Point3::new(1e6, 1e6, 0.0), 70.0);
        assert_eq!(proj.point, ScreenPoint { x: 799, y: 0 });
        assert!(!proj.on_canvas);

        let proj = project_point(Point3::new(-1e6, -1e6, 0.0), 70.0);
        assert_eq!(proj.point, ScreenPoint { x: 0, y: 799 });
        assert!(!proj.on_canvas);
    }
}
