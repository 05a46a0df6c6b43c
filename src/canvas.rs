//! The drawing backend seam.
//!
//! The builder never touches pixels. It describes layers, transforms, masks and strokes to a
//! [`Canvas`], and picks a [`CutoutStrategy`] from what the canvas says it can do.

use crate::{Rect, Stroke};
use lyon::math::Point;
use lyon::path::Path;

/// How a mask fill combines with what is already in the layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Compositing {
    /// Erase destination pixels covered by the mask.
    DestinationOut,
    /// Keep destination pixels covered by the mask, erase the rest.
    DestinationIn,
}

/// Area filled by a mask operation.
#[derive(Copy, Clone, Debug)]
pub enum MaskShape<'a> {
    Path(&'a Path),
    /// `rect` with `hole` removed. Only requested from canvases reporting
    /// [`Capabilities::path_difference`].
    RectMinusPath { rect: Rect, hole: &'a Path },
}

/// What a backend supports beyond the basic operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// The backend can fill [`MaskShape::RectMinusPath`] exactly.
    pub path_difference: bool,
}

/// A 2D drawing backend.
///
/// `save_layer`, `save` and `restore` form a single stack; every save is matched by one restore.
pub trait Canvas {
    fn capabilities(&self) -> Capabilities;

    /// Starts an offscreen layer clipped to `bounds`, composited back on the matching restore.
    fn save_layer(&mut self, bounds: Rect);

    /// Saves the current transform.
    fn save(&mut self);

    fn restore(&mut self);

    /// Scales subsequent drawing by `sx`, `sy` about `pivot`.
    fn scale_about(&mut self, sx: f32, sy: f32, pivot: Point);

    fn fill_mask(&mut self, shape: MaskShape<'_>, compositing: Compositing);

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);
}

/// Ways of turning the cut path into notches in already drawn content.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CutoutStrategy {
    /// Erase `bounds − cut path`. Exact; needs path difference.
    Subtract,
    /// Keep only what lies inside the cut path. Visually equivalent, not bit-identical.
    Intersect,
}

impl CutoutStrategy {
    pub fn for_capabilities(capabilities: Capabilities) -> Self {
        if capabilities.path_difference {
            CutoutStrategy::Subtract
        } else {
            CutoutStrategy::Intersect
        }
    }

    pub fn apply(&self, canvas: &mut dyn Canvas, bounds: Rect, cut_path: &Path) {
        match self {
            CutoutStrategy::Subtract => canvas.fill_mask(
                MaskShape::RectMinusPath {
                    rect: bounds,
                    hole: cut_path,
                },
                Compositing::DestinationOut,
            ),
            CutoutStrategy::Intersect => {
                canvas.fill_mask(MaskShape::Path(cut_path), Compositing::DestinationIn)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Capabilities, CutoutStrategy};

    #[test]
    fn strategy_follows_path_difference_support() {
        assert_eq!(
            CutoutStrategy::for_capabilities(Capabilities {
                path_difference: true
            }),
            CutoutStrategy::Subtract
        );
        assert_eq!(
            CutoutStrategy::for_capabilities(Capabilities::default()),
            CutoutStrategy::Intersect
        );
    }
}
