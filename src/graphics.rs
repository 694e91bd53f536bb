use crate::math::{HEIGHT, WIDTH};
use druid::Color;

/// Writes one opaque pixel into the RGBA buffer; out-of-bounds
/// coordinates are silently skipped
fn put_pixel(pixel_data: &mut [u8], x: i32, y: i32, color: &Color) {
    if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
        let offset = (y as usize * WIDTH + x as usize) * 4;
        let (r, g, b, _) = color.as_rgba8();
        pixel_data[offset] = r;
        pixel_data[offset + 1] = g;
        pixel_data[offset + 2] = b;
        pixel_data[offset + 3] = 0xff;
    }
}

/// Draws an 8-connected line between two pixels using Bresenham's
/// algorithm. Both endpoints are always plotted; a zero-length line
/// degenerates to a single pixel. Stepping always runs in a canonical
/// direction, so both orientations of a line plot the same pixel set
/// even when the error term hits a midpoint tie.
pub fn draw_line(x0: i32, y0: i32, x1: i32, y1: i32, pixel_data: &mut [u8], color: Color) {
    let (x0, y0, x1, y1) = if (x1, y1) < (x0, y0) {
        (x1, y1, x0, y0)
    } else {
        (x0, y0, x1, y1)
    };
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; // error value e_xy

    loop {
        put_pixel(pixel_data, x0, y0, &color);

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Same stepping as `draw_line`, but interpolates between two colors
/// along the way. The blend factor is the fraction of the line's total
/// length covered so far, measured from the true start pixel, so the
/// gradient is uniform regardless of slope or direction. Off-canvas
/// pixels are skipped without breaking the stepper, so the gradient
/// stays continuous when the line re-enters the canvas. Endpoints are
/// canonicalized like `draw_line`'s, with the colors swapped alongside
/// them so each endpoint keeps its own color.
pub fn draw_gradient_line(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    pixel_data: &mut [u8],
    color_a: Color,
    color_b: Color,
) {
    let (x0, y0, x1, y1, color_a, color_b) = if (x1, y1) < (x0, y0) {
        (x1, y1, x0, y0, color_b, color_a)
    } else {
        (x0, y0, x1, y1, color_a, color_b)
    };
    let (mut x0, mut y0) = (x0, y0);
    let (start_x, start_y) = (x0, y0);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let total = ((x1 - x0) as f64).hypot((y1 - y0) as f64).max(1e-5);
    let (ra, ga, ba, _) = color_a.as_rgba8();
    let (rb, gb, bb, _) = color_b.as_rgba8();

    loop {
        let t = (((x0 - start_x) as f64).hypot((y0 - start_y) as f64) / total).clamp(0.0, 1.0);
        let r = (ra as f64 * (1.0 - t) + rb as f64 * t) as u8;
        let g = (ga as f64 * (1.0 - t) + gb as f64 * t) as u8;
        let b = (ba as f64 * (1.0 - t) + bb as f64 * t) as u8;
        put_pixel(pixel_data, x0, y0, &Color::rgb8(r, g, b));

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
