use crate::geometry::{
    generate_axes, generate_grid, AxisSegment, Grid, AXIS_LENGTH, STEPS_U, STEPS_V,
};
use crate::graphics::{draw_gradient_line, draw_line};
use crate::math::{project_point, rotate_point, ScreenPoint, HEIGHT, WIDTH};
use crate::shading::{depth_color, DepthRange};
use crate::state::AppState;
use druid::kurbo::Point;
use druid::piet::{ImageFormat, InterpolationMode};
use druid::widget::prelude::*;
use druid::{RenderContext, Widget};
use std::time::Instant;

/// Hyperboloid viewer widget: owns the static geometry, handles mouse
/// interaction, and composites every frame into a fresh pixel buffer
pub struct HyperboloidWidget {
    grid: Grid,
    axes: [AxisSegment; 3],
    /// Is the user currently dragging to rotate?
    dragging: bool,
    /// Last mouse position while dragging
    last_mouse_pos: Point,
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
}

impl HyperboloidWidget {
    pub fn new() -> Self {
        HyperboloidWidget {
            grid: generate_grid(),
            axes: generate_axes(AXIS_LENGTH),
            dragging: false,
            last_mouse_pos: Point::ZERO,
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
        }
    }

    /// Draws the surface wireframe: one full projection pass over the
    /// grid to collect screen points, rotated depths, and the depth
    /// extrema, then a row pass and a column pass so every cell boundary
    /// is drawn exactly once in each direction.
    fn render_hyperboloid(&self, pixel_data: &mut [u8], data: &AppState) {
        let mut projected: Vec<ScreenPoint> = Vec::with_capacity(self.grid.len());
        let mut depths: Vec<f64> = Vec::with_capacity(self.grid.len());
        let mut min_z = f64::INFINITY;
        let mut max_z = f64::NEG_INFINITY;

        for i in 0..STEPS_U {
            for j in 0..STEPS_V {
                let rotated = rotate_point(self.grid.at(i, j), data.angle_x, data.angle_y);
                let proj = project_point(rotated, data.scale);
                // Off-canvas vertices would skew the gradient when the
                // mesh extends past the viewport
                if proj.on_canvas {
                    min_z = min_z.min(rotated.z);
                    max_z = max_z.max(rotated.z);
                }
                projected.push(proj.point);
                depths.push(rotated.z);
            }
        }

        let range = DepthRange::new(min_z, max_z);
        let idx = |i: usize, j: usize| i * STEPS_V + j;

        // Horizontal edges along each row
        for i in 0..STEPS_U {
            for j in 0..STEPS_V - 1 {
                let (a, b) = (idx(i, j), idx(i, j + 1));
                self.draw_edge(
                    pixel_data,
                    projected[a],
                    projected[b],
                    &range,
                    depths[a],
                    depths[b],
                );
            }
        }

        // Vertical edges along each column
        for j in 0..STEPS_V {
            for i in 0..STEPS_U - 1 {
                let (a, b) = (idx(i, j), idx(i + 1, j));
                self.draw_edge(
                    pixel_data,
                    projected[a],
                    projected[b],
                    &range,
                    depths[a],
                    depths[b],
                );
            }
        }
    }

    fn draw_edge(
        &self,
        pixel_data: &mut [u8],
        p0: ScreenPoint,
        p1: ScreenPoint,
        range: &DepthRange,
        z0: f64,
        z1: f64,
    ) {
        let color0 = depth_color(range.normalize(z0));
        let color1 = depth_color(range.normalize(z1));
        draw_gradient_line(p0.x, p0.y, p1.x, p1.y, pixel_data, color0, color1);
    }

    /// Draws the coordinate axes as solid lines, after the surface so
    /// they stay visible on top
    fn render_axes(&self, pixel_data: &mut [u8], data: &AppState) {
        for axis in &self.axes {
            let p0 = project_point(
                rotate_point(axis.origin, data.angle_x, data.angle_y),
                data.scale,
            )
            .point;
            let p1 = project_point(
                rotate_point(axis.tip, data.angle_x, data.angle_y),
                data.scale,
            )
            .point;
            draw_line(p0.x, p0.y, p1.x, p1.y, pixel_data, axis.color.clone());
        }
    }
}

impl Widget<AppState> for HyperboloidWidget {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, _env: &Env) {
        match event {
            Event::MouseDown(mouse_event) => {
                if mouse_event.button == druid::MouseButton::Left {
                    self.dragging = true;
                    self.last_mouse_pos = mouse_event.pos;
                    ctx.set_active(true); // Capture mouse events
                }
            }
            Event::MouseMove(mouse_event) => {
                if self.dragging {
                    let delta = mouse_event.pos - self.last_mouse_pos;
                    data.apply_drag(delta.x, delta.y);
                    self.last_mouse_pos = mouse_event.pos;
                    ctx.request_paint();
                }
            }
            Event::MouseUp(mouse_event) => {
                if mouse_event.button == druid::MouseButton::Left {
                    self.dragging = false;
                    ctx.set_active(false);
                }
            }
            Event::Wheel(wheel_event) => {
                // wheel_delta.y is positive when scrolling down, so
                // negate it: scrolling up zooms in
                data.zoom(-wheel_event.wheel_delta.y);
                ctx.request_paint();
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        _event: &LifeCycle,
        _data: &AppState,
        _env: &Env,
    ) {
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &AppState, _data: &AppState, _env: &Env) {
    }

    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &AppState,
        _env: &Env,
    ) -> Size {
        bc.constrain(Size::new(WIDTH as f64, HEIGHT as f64))
    }

    /// Composites one frame: fresh opaque-black buffer, surface
    /// wireframe, axes, then hand the buffer off to the display surface
    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppState, _env: &Env) {
        // Update FPS calculation
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            let fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            log::debug!("render rate: {:.1} fps", fps);
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        let mut pixel_data = vec![0u8; WIDTH * HEIGHT * 4];
        // Opaque black background
        for pixel in pixel_data.chunks_exact_mut(4) {
            pixel[3] = 0xff;
        }

        self.render_hyperboloid(&mut pixel_data, data);
        self.render_axes(&mut pixel_data, data);

        let size = ctx.size();
        let image = ctx
            .make_image(WIDTH, HEIGHT, &pixel_data, ImageFormat::RgbaSeparate)
            .unwrap();
        ctx.draw_image(&image, size.to_rect(), InterpolationMode::NearestNeighbor);
    }
}

impl Default for HyperboloidWidget {
    fn default() -> Self {
        Self::new()
    }
}
