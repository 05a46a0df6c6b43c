//! The stateful side: configuration, element size, setters and the two draw phases.
//!
//! A host element owns one [`CornerCutPathBuilder`]. It forwards size changes to
//! [`resize`](CornerCutPathBuilder::resize), wraps its own drawing between
//! [`pre_draw`](CornerCutPathBuilder::pre_draw) and
//! [`draw_path`](CornerCutPathBuilder::draw_path), and calls the setters when its properties
//! change.
//!
//! # Examples
//!
//! ```rust
//! use cutcorner::{
//!     Capabilities, Color, CornerCutPathBuilder, CornerCuts, CutCornerConfig, Host,
//!     RecordingCanvas, Stroke,
//! };
//!
//! #[derive(Default)]
//! struct Element {
//!     dirty: bool,
//! }
//!
//! impl Host for Element {
//!     fn invalidate(&mut self) {
//!         self.dirty = true;
//!     }
//! }
//!
//! let mut builder = CornerCutPathBuilder::new();
//! builder.attach(
//!     Element::default(),
//!     CutCornerConfig::new(CornerCuts::uniform(20.0), Stroke::new(4.0, Color::BLACK)),
//! );
//! builder.resize(100.0, 60.0);
//!
//! let mut canvas = RecordingCanvas::new(Capabilities { path_difference: true });
//! builder.pre_draw(&mut canvas);
//! // ... the element draws its content here ...
//! builder.draw_path(&mut canvas);
//! assert_eq!(canvas.save_depth(), 0);
//!
//! builder.set_radius(10.0);
//! assert!(builder.host().unwrap().dirty);
//! ```

use crate::canvas::{Canvas, CutoutStrategy};
use crate::config::{CutCornerConfig, CutMaxPolicy};
use crate::util::{content_scale, rect_center};
use crate::{Color, CornerCuts, CutPath, Rect, Stroke};
use lyon::math::{point, size};

/// What the builder needs from the element that owns it.
pub trait Host {
    /// Converts a density-independent length into device pixels.
    fn dp_to_px(&self, dp: f32) -> f32 {
        dp
    }

    /// Asks for a redraw.
    fn invalidate(&mut self);
}

pub struct CornerCutPathBuilder<H: Host> {
    host: Option<H>,
    cuts: CornerCuts,
    cut_max: f32,
    cut_max_policy: CutMaxPolicy,
    stroke: Stroke,
    size: Option<(f32, f32)>,
    rect: Rect,
    stroke_rect: Rect,
    path: CutPath,
    layer_saved: bool,
    content_scaled: bool,
}

impl<H: Host> Default for CornerCutPathBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Host> CornerCutPathBuilder<H> {
    /// A detached builder. Length setters do nothing until [`attach`](Self::attach) is called.
    pub fn new() -> Self {
        Self {
            host: None,
            cuts: CornerCuts::default(),
            cut_max: 0.0,
            cut_max_policy: CutMaxPolicy::default(),
            stroke: Stroke::default(),
            size: None,
            rect: Rect::zero(),
            stroke_rect: Rect::zero(),
            path: CutPath::new(),
            layer_saved: false,
            content_scaled: false,
        }
    }

    pub fn attach(&mut self, host: H, config: CutCornerConfig) {
        self.host = Some(host);
        self.configure(config);
    }

    pub fn detach(&mut self) -> Option<H> {
        self.host.take()
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    /// Replaces cuts, stroke and policy, and derives the shared notch length from the new cuts.
    ///
    /// Invalid values are logged and kept; they produce malformed geometry rather than errors.
    pub fn configure(&mut self, config: CutCornerConfig) {
        if let Err(error) = config.validate() {
            tracing::warn!("Drawing cut corners with invalid configuration: {}", error);
        }

        self.cuts = config.cuts;
        self.cut_max = config.cuts.max();
        self.cut_max_policy = config.cut_max_policy;
        self.stroke = config.stroke;
        self.refresh_stroke_rect();

        tracing::debug!(
            cuts = %self.cuts,
            cut_max = self.cut_max,
            stroke_width = self.stroke.width,
            "configured cut corners"
        );
    }

    /// Sets the element size in device pixels.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.size == Some((width, height)) {
            return;
        }
        self.size = Some((width, height));
        self.rect = Rect::from_size(size(width, height));
        self.refresh_stroke_rect();

        tracing::debug!(width, height, "resized cut corners");
    }

    fn refresh_stroke_rect(&mut self) {
        let half = self.stroke.half_width();
        self.stroke_rect = Rect::new(
            point(self.rect.min.x + half, self.rect.min.y + half),
            point(self.rect.max.x - half, self.rect.max.y - half),
        );
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The element rectangle shrunk by half the stroke width on every side.
    pub fn stroke_rect(&self) -> Rect {
        self.stroke_rect
    }

    pub fn cuts(&self) -> CornerCuts {
        self.cuts
    }

    /// Leg length shared by every notched corner.
    pub fn cut_max(&self) -> f32 {
        self.cut_max
    }

    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    /// Rebuilds the cut polygon over the element rectangle, shifted `inset` pixels inward.
    ///
    /// The builder owns a single path buffer; the returned path is overwritten by the next build.
    pub fn build_cut_path(&mut self, inset: f32) -> &CutPath {
        self.path.rebuild(&self.rect, &self.cuts, self.cut_max, inset);
        &self.path
    }

    /// The outline used for the cutout.
    pub fn fill_path(&mut self) -> &CutPath {
        self.build_cut_path(0.0)
    }

    /// The stroke centerline, or `None` without a stroke.
    pub fn stroke_path(&mut self) -> Option<&CutPath> {
        if self.stroke.width > 0.0 {
            let inset = self.stroke.half_width();
            Some(self.build_cut_path(inset))
        } else {
            None
        }
    }

    /// Sized, and every length that reaches the path is finite.
    fn is_drawable(&self) -> bool {
        let sized = matches!(
            self.size,
            Some((width, height)) if width > 0.0 && height > 0.0
        );
        sized
            && self.rect.max.x.is_finite()
            && self.rect.max.y.is_finite()
            && self.cuts.is_finite()
            && self.cut_max.is_finite()
            && self.stroke.width.is_finite()
    }

    /// Opens the layer the element content is drawn into.
    ///
    /// With a stroke, the content is also scaled about the center so that it stays clear of the
    /// stroke band.
    pub fn pre_draw(&mut self, canvas: &mut dyn Canvas) {
        if !self.is_drawable() || self.layer_saved {
            return;
        }
        canvas.save_layer(self.rect);
        self.layer_saved = true;

        if self.stroke.width > 0.0 {
            let (sx, sy) = content_scale(&self.rect, self.stroke.width);
            canvas.save();
            canvas.scale_about(sx, sy, rect_center(&self.rect));
            self.content_scaled = true;
        }

        tracing::trace!(scaled = self.content_scaled, "pre-draw");
    }

    /// Cuts the notches out of the layer content, strokes the outline and closes the layer.
    ///
    /// The cutout runs while the content scale from [`pre_draw`](Self::pre_draw) is still
    /// active, so the shrunk content is notched at its own corners. The stroke is drawn after the
    /// scale is restored, in element pixels, where its inner edge meets the shrunk content.
    pub fn draw_path(&mut self, canvas: &mut dyn Canvas) {
        if !self.is_drawable() {
            if self.layer_saved || self.content_scaled {
                tracing::warn!("Closing cut corner layer after the element became undrawable");
                self.close_layers(canvas);
            }
            return;
        }

        self.render_fill(canvas);
        if self.content_scaled {
            canvas.restore();
            self.content_scaled = false;
        }
        self.render_stroke(canvas);
        self.close_layers(canvas);

        tracing::trace!("drew cut path");
    }

    fn close_layers(&mut self, canvas: &mut dyn Canvas) {
        if self.content_scaled {
            canvas.restore();
            self.content_scaled = false;
        }

        if self.layer_saved {
            canvas.restore();
            self.layer_saved = false;
        }
    }

    /// Applies the cutout with whatever strategy the canvas supports.
    pub fn render_fill(&mut self, canvas: &mut dyn Canvas) {
        if !self.is_drawable() {
            return;
        }
        let path = self.fill_path().to_lyon_path();
        let strategy = CutoutStrategy::for_capabilities(canvas.capabilities());
        strategy.apply(canvas, self.rect, &path);
    }

    pub fn render_stroke(&mut self, canvas: &mut dyn Canvas) {
        if !self.is_drawable() {
            return;
        }
        let stroke = self.stroke;
        if let Some(cut_path) = self.stroke_path() {
            let path = cut_path.to_lyon_path();
            canvas.stroke_path(&path, &stroke);
        }
    }

    fn invalidate(&mut self) {
        if let Some(host) = self.host.as_mut() {
            host.invalidate();
        }
    }

    fn set_cuts(&mut self, update: impl FnOnce(&H, &mut CornerCuts)) {
        let Some(host) = self.host.as_ref() else {
            return;
        };
        update(host, &mut self.cuts);
        if self.cut_max_policy == CutMaxPolicy::Recompute {
            self.cut_max = self.cuts.max();
        }
        self.invalidate();
    }

    pub fn set_radius(&mut self, radius_dp: f32) {
        self.set_cuts(|host, cuts| *cuts = CornerCuts::uniform(host.dp_to_px(radius_dp)));
    }

    pub fn set_radii(
        &mut self,
        top_left_dp: f32,
        top_right_dp: f32,
        bottom_left_dp: f32,
        bottom_right_dp: f32,
    ) {
        self.set_cuts(|host, cuts| {
            *cuts = CornerCuts::new(
                host.dp_to_px(top_left_dp),
                host.dp_to_px(top_right_dp),
                host.dp_to_px(bottom_left_dp),
                host.dp_to_px(bottom_right_dp),
            )
        });
    }

    pub fn set_radius_left(&mut self, radius_dp: f32) {
        self.set_cuts(|host, cuts| {
            let px = host.dp_to_px(radius_dp);
            cuts.top_left = px;
            cuts.bottom_left = px;
        });
    }

    pub fn set_radius_right(&mut self, radius_dp: f32) {
        self.set_cuts(|host, cuts| {
            let px = host.dp_to_px(radius_dp);
            cuts.top_right = px;
            cuts.bottom_right = px;
        });
    }

    pub fn set_radius_top(&mut self, radius_dp: f32) {
        self.set_cuts(|host, cuts| {
            let px = host.dp_to_px(radius_dp);
            cuts.top_left = px;
            cuts.top_right = px;
        });
    }

    pub fn set_radius_bottom(&mut self, radius_dp: f32) {
        self.set_cuts(|host, cuts| {
            let px = host.dp_to_px(radius_dp);
            cuts.bottom_left = px;
            cuts.bottom_right = px;
        });
    }

    pub fn set_radius_top_left(&mut self, radius_dp: f32) {
        self.set_cuts(|host, cuts| cuts.top_left = host.dp_to_px(radius_dp));
    }

    pub fn set_radius_top_right(&mut self, radius_dp: f32) {
        self.set_cuts(|host, cuts| cuts.top_right = host.dp_to_px(radius_dp));
    }

    pub fn set_radius_bottom_left(&mut self, radius_dp: f32) {
        self.set_cuts(|host, cuts| cuts.bottom_left = host.dp_to_px(radius_dp));
    }

    pub fn set_radius_bottom_right(&mut self, radius_dp: f32) {
        self.set_cuts(|host, cuts| cuts.bottom_right = host.dp_to_px(radius_dp));
    }

    pub fn set_stroke_width(&mut self, width_dp: f32) {
        let Some(host) = self.host.as_ref() else {
            return;
        };
        self.stroke.width = host.dp_to_px(width_dp);
        self.refresh_stroke_rect();
        tracing::debug!(stroke_width = self.stroke.width, "stroke width changed");
        self.invalidate();
    }

    /// Stores the color even while detached; only the redraw request needs a host.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke.color = color;
        self.invalidate();
    }

    pub fn set_stroke_width_color(&mut self, width_dp: f32, color: Color) {
        let Some(host) = self.host.as_ref() else {
            return;
        };
        self.stroke = Stroke::new(host.dp_to_px(width_dp), color);
        self.refresh_stroke_rect();
        tracing::debug!(stroke_width = self.stroke.width, "stroke changed");
        self.invalidate();
    }
}
