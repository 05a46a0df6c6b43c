//! The cut-corner polygon.
//!
//! A [`CutPath`] is a closed polygon of four to eight vertices: one per sharp corner, two per
//! notched corner. Vertices are kept in a small inline buffer that is reset and refilled on every
//! build, so rebuilding on each draw does not allocate.
//!
//! # Examples
//!
//! ```rust
//! use cutcorner::{CornerCuts, CutPath, Rect};
//! use cutcorner::lyon::math::point;
//!
//! let rect = Rect::new(point(0.0, 0.0), point(100.0, 100.0));
//! let cuts = CornerCuts { top_left: 20.0, ..CornerCuts::default() };
//!
//! let mut path = CutPath::new();
//! path.rebuild(&rect, &cuts, cuts.max(), 0.0);
//!
//! assert_eq!(path.len(), 5);
//! assert_eq!(path.vertices()[0], point(0.0, 20.0));
//! assert_eq!(path.vertices()[1], point(20.0, 0.0));
//! ```

use crate::{Corner, CornerCuts, Rect};
use lyon::math::{point, Point};
use smallvec::SmallVec;

/// Closed polygon describing the cut outline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CutPath {
    vertices: SmallVec<[Point; 8]>,
    closed: bool,
}

impl CutPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the buffer, keeping its storage.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.closed = false;
    }

    /// Rebuilds the polygon for `rect`.
    ///
    /// Corners are visited clockwise from the top-left. A corner whose cut is nonzero gets a
    /// notch with legs of `cut_max`, so every notched corner has the same size no matter its own
    /// cut. A corner with a zero cut contributes its sharp vertex.
    ///
    /// A positive `inset` moves every vertex that many pixels toward the interior on both axes;
    /// a negative one moves it outward.
    pub fn rebuild(&mut self, rect: &Rect, cuts: &CornerCuts, cut_max: f32, inset: f32) {
        self.reset();

        let left = rect.min.x + inset;
        let top = rect.min.y + inset;
        let right = rect.max.x - inset;
        let bottom = rect.max.y - inset;
        let m = cut_max;

        for corner in Corner::PATH_ORDER {
            let cut = cuts.is_cut(corner);
            match corner {
                Corner::TopLeft if cut => {
                    self.push(point(left, top + m));
                    self.push(point(left + m, top));
                }
                Corner::TopLeft => self.push(point(left, top)),
                Corner::TopRight if cut => {
                    self.push(point(right - m, top));
                    self.push(point(right, top + m));
                }
                Corner::TopRight => self.push(point(right, top)),
                Corner::BottomRight if cut => {
                    self.push(point(right, bottom - m));
                    self.push(point(right - m, bottom));
                }
                Corner::BottomRight => self.push(point(right, bottom)),
                Corner::BottomLeft if cut => {
                    self.push(point(left + m, bottom));
                    self.push(point(left, bottom - m));
                }
                Corner::BottomLeft => self.push(point(left, bottom)),
            }
        }

        self.closed = true;

        tracing::trace!(
            vertices = self.vertices.len(),
            inset,
            cut_max,
            "rebuilt cut path"
        );
    }

    #[inline]
    fn push(&mut self, vertex: Point) {
        self.vertices.push(vertex);
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Converts the polygon into a lyon path for backends that tessellate or rasterize.
    pub fn to_lyon_path(&self) -> lyon::path::Path {
        let mut builder = lyon::path::Path::builder();
        builder.add_polygon(lyon::path::Polygon {
            points: &self.vertices[..],
            closed: self.closed,
        });
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::CutPath;
    use crate::{CornerCuts, Rect};
    use lyon::math::point;

    fn square() -> Rect {
        Rect::new(point(0.0, 0.0), point(100.0, 100.0))
    }

    #[test]
    fn no_cuts_yields_the_four_rectangle_corners() {
        let mut path = CutPath::new();
        path.rebuild(&square(), &CornerCuts::default(), 0.0, 0.0);

        assert!(path.is_closed());
        assert_eq!(
            path.vertices(),
            &[
                point(0.0, 0.0),
                point(100.0, 0.0),
                point(100.0, 100.0),
                point(0.0, 100.0)
            ]
        );
    }

    #[test]
    fn uniform_cuts_yield_an_octagon() {
        let mut path = CutPath::new();
        path.rebuild(&square(), &CornerCuts::uniform(20.0), 20.0, 0.0);

        assert_eq!(
            path.vertices(),
            &[
                point(0.0, 20.0),
                point(20.0, 0.0),
                point(80.0, 0.0),
                point(100.0, 20.0),
                point(100.0, 80.0),
                point(80.0, 100.0),
                point(20.0, 100.0),
                point(0.0, 80.0),
            ]
        );
    }

    #[test]
    fn every_notch_uses_the_shared_maximum() {
        let mut path = CutPath::new();
        let cuts = CornerCuts::new(5.0, 30.0, 1.0, 0.0);
        path.rebuild(&square(), &cuts, cuts.max(), 0.0);

        assert_eq!(path.len(), 7);
        assert_eq!(path.vertices()[0], point(0.0, 30.0));
        assert_eq!(path.vertices()[1], point(30.0, 0.0));
        assert_eq!(path.vertices()[4], point(100.0, 100.0));
        assert_eq!(path.vertices()[5], point(30.0, 100.0));
        assert_eq!(path.vertices()[6], point(0.0, 70.0));
    }

    #[test]
    fn inset_moves_vertices_toward_the_interior() {
        let mut outline = CutPath::new();
        let mut inset = CutPath::new();
        let cuts = CornerCuts::new(20.0, 0.0, 20.0, 0.0);
        outline.rebuild(&square(), &cuts, 20.0, 0.0);
        inset.rebuild(&square(), &cuts, 20.0, 5.0);

        let center = point(50.0, 50.0);
        for (a, b) in outline.vertices().iter().zip(inset.vertices()) {
            assert_eq!((b.x - a.x).abs(), 5.0);
            assert_eq!((b.y - a.y).abs(), 5.0);
            assert!((b.x - center.x).abs() < (a.x - center.x).abs());
            assert!((b.y - center.y).abs() < (a.y - center.y).abs());
        }
    }

    #[test]
    fn rebuild_discards_previous_vertices() {
        let mut path = CutPath::new();
        path.rebuild(&square(), &CornerCuts::uniform(20.0), 20.0, 0.0);
        path.rebuild(&square(), &CornerCuts::default(), 20.0, 0.0);
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn lyon_path_keeps_every_vertex() {
        let mut path = CutPath::new();
        path.rebuild(&square(), &CornerCuts::uniform(10.0), 10.0, 0.0);
        let lyon_path = path.to_lyon_path();
        let endpoints = lyon_path
            .iter()
            .filter(|event| !matches!(event, lyon::path::Event::End { .. }))
            .count();
        assert_eq!(endpoints, 8);
    }
}
