use druid::Color;

/// Number of samples along the hyperbolic parameter u
pub const STEPS_U: usize = 30;
/// Number of samples along the angular parameter v
pub const STEPS_V: usize = 40;
/// Range of the hyperbolic parameter
pub const U_MIN: f64 = -2.0;
pub const U_MAX: f64 = 2.0;
/// Length of each coordinate axis segment
pub const AXIS_LENGTH: f64 = 3.0;

/// A point in object space or rotated space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// The sampled surface: a row-major grid of STEPS_U x STEPS_V points.
/// Rows follow u, columns follow v; the topology never changes after
/// generation, only projections of the points do.
pub struct Grid {
    points: Vec<Point3>,
}

impl Grid {
    pub fn at(&self, i: usize, j: usize) -> Point3 {
        self.points[i * STEPS_V + j]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// A coordinate axis from the origin to its tip, with a fixed color
pub struct AxisSegment {
    pub origin: Point3,
    pub tip: Point3,
    pub color: Color,
}

/// Samples the hyperboloid of revolution
/// x = cosh(u) cos(v), y = cosh(u) sin(v), z = sinh(u)
/// over u in [U_MIN, U_MAX] and v in [0, 2*pi], endpoints inclusive.
pub fn generate_grid() -> Grid {
    let mut points = Vec::with_capacity(STEPS_U * STEPS_V);
    for i in 0..STEPS_U {
        let u = U_MIN + (U_MAX - U_MIN) * i as f64 / (STEPS_U - 1) as f64;
        for j in 0..STEPS_V {
            let v = 2.0 * std::f64::consts::PI * j as f64 / (STEPS_V - 1) as f64;
            points.push(Point3::new(
                u.cosh() * v.cos(),
                u.cosh() * v.sin(),
                u.sinh(),
            ));
        }
    }
    Grid { points }
}

/// Returns the three coordinate axes: +X red, +Y green, +Z blue
pub fn generate_axes(length: f64) -> [AxisSegment; 3] {
    let origin = Point3::new(0.0, 0.0, 0.0);
    [
        AxisSegment {
            origin,
            tip: Point3::new(length, 0.0, 0.0),
            color: Color::rgb8(255, 0, 0),
        },
        AxisSegment {
            origin,
            tip: Point3::new(0.0, length, 0.0),
            color: Color::rgb8(0, 255, 0),
        },
        AxisSegment {
            origin,
            tip: Point3::new(0.0, 0.0, length),
            color: Color::rgb8(0, 0, 255),
        },
    ]
}
