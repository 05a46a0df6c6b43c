//! Configuration handed to the path builder, and resolution of the host's declarative attributes
//! into that configuration.

use crate::error::{check_length, Result};
use crate::{Color, CornerCuts, Stroke};

/// How the shared notch length follows later corner mutations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CutMaxPolicy {
    /// Set to the largest cut by `configure` and left alone by the corner setters.
    #[default]
    Frozen,
    /// Recomputed from the current cuts after every mutation.
    Recompute,
}

/// Everything the builder needs besides the element size.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct CutCornerConfig {
    pub cuts: CornerCuts,
    pub stroke: Stroke,
    pub cut_max_policy: CutMaxPolicy,
}

impl CutCornerConfig {
    pub fn new(cuts: CornerCuts, stroke: Stroke) -> Self {
        Self {
            cuts,
            stroke,
            cut_max_policy: CutMaxPolicy::default(),
        }
    }

    pub fn with_cut_max_policy(mut self, policy: CutMaxPolicy) -> Self {
        self.cut_max_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.cuts.validate()?;
        check_length("stroke width", self.stroke.width)
    }
}

/// Pixel-resolved values read from the host's styling source. Unset fields fall back as the
/// styling source defines:
///
/// - `left`, `right`, `top` and `bottom` default to `radius` (itself defaulting to zero).
/// - each corner defaults to its top/bottom edge when that edge is positive, otherwise to its
///   left/right edge.
/// - the stroke defaults to zero width and white.
///
/// # Examples
///
/// ```rust
/// use cutcorner::{CornerCuts, CutAttributes};
///
/// let attributes = CutAttributes {
///     radius: Some(8.0),
///     top: Some(16.0),
///     bottom_right: Some(2.0),
///     ..CutAttributes::default()
/// };
/// let config = attributes.resolve();
/// assert_eq!(config.cuts, CornerCuts::new(16.0, 16.0, 8.0, 2.0));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CutAttributes {
    pub radius: Option<f32>,
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub top_left: Option<f32>,
    pub top_right: Option<f32>,
    pub bottom_left: Option<f32>,
    pub bottom_right: Option<f32>,
    pub stroke_width: Option<f32>,
    pub stroke_color: Option<Color>,
}

impl CutAttributes {
    pub fn resolve(&self) -> CutCornerConfig {
        let radius = self.radius.unwrap_or(0.0);
        let left = self.left.unwrap_or(radius);
        let right = self.right.unwrap_or(radius);
        let top = self.top.unwrap_or(radius);
        let bottom = self.bottom.unwrap_or(radius);

        let corner = |explicit: Option<f32>, vertical: f32, horizontal: f32| {
            explicit.unwrap_or(if vertical > 0.0 { vertical } else { horizontal })
        };

        let cuts = CornerCuts {
            top_left: corner(self.top_left, top, left),
            top_right: corner(self.top_right, top, right),
            bottom_left: corner(self.bottom_left, bottom, left),
            bottom_right: corner(self.bottom_right, bottom, right),
        };

        let stroke = Stroke {
            width: self.stroke_width.unwrap_or(0.0),
            color: self.stroke_color.unwrap_or(Color::WHITE),
        };

        CutCornerConfig::new(cuts, stroke)
    }
}
