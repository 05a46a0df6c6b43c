//! Per-corner notch lengths.

use crate::error::{check_length, Result};

/// One of the four rectangle corners, in the order the cut path visits them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Clockwise from the top-left corner.
    pub const PATH_ORDER: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left cut",
            Corner::TopRight => "top-right cut",
            Corner::BottomRight => "bottom-right cut",
            Corner::BottomLeft => "bottom-left cut",
        }
    }
}

/// Leg lengths of the right-triangle notches removed from each corner.
///
/// A length of exactly zero keeps that corner sharp.
///
/// # Examples
///
/// ```rust
/// use cutcorner::{Corner, CornerCuts};
///
/// let cuts = CornerCuts {
///     top_left: 20.0,
///     ..CornerCuts::default()
/// };
/// assert!(cuts.is_cut(Corner::TopLeft));
/// assert!(!cuts.is_cut(Corner::BottomRight));
/// assert_eq!(cuts.max(), 20.0);
/// ```
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct CornerCuts {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl CornerCuts {
    /// The same cut on every corner.
    pub fn uniform(cut: f32) -> Self {
        Self::new(cut, cut, cut, cut)
    }

    pub fn new(top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    pub fn get(&self, corner: Corner) -> f32 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    pub fn set(&mut self, corner: Corner, cut: f32) {
        match corner {
            Corner::TopLeft => self.top_left = cut,
            Corner::TopRight => self.top_right = cut,
            Corner::BottomRight => self.bottom_right = cut,
            Corner::BottomLeft => self.bottom_left = cut,
        }
    }

    /// Whether the corner gets a notch. Only a literal zero keeps it sharp.
    pub fn is_cut(&self, corner: Corner) -> bool {
        self.get(corner) != 0.0
    }

    /// Largest of the four cuts, never below zero.
    pub fn max(&self) -> f32 {
        Corner::PATH_ORDER
            .iter()
            .fold(0.0, |max, corner| f32::max(max, self.get(*corner)))
    }

    pub fn is_finite(&self) -> bool {
        Corner::PATH_ORDER
            .iter()
            .all(|corner| self.get(*corner).is_finite())
    }

    pub fn validate(&self) -> Result<()> {
        for corner in Corner::PATH_ORDER {
            check_length(corner.name(), self.get(corner))?;
        }
        Ok(())
    }
}

impl core::fmt::Display for CornerCuts {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Clockwise from top left, like CSS
        write!(
            f,
            "CornerCuts({}, {}, {}, {})",
            self.top_left, self.top_right, self.bottom_right, self.bottom_left
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Corner, CornerCuts};
    use crate::Error;

    #[test]
    fn max_picks_largest_corner() {
        let cuts = CornerCuts::new(4.0, 12.0, 0.0, 7.0);
        assert_eq!(cuts.max(), 12.0);
        assert_eq!(CornerCuts::default().max(), 0.0);
    }

    #[test]
    fn set_and_get_address_the_same_corner() {
        let mut cuts = CornerCuts::default();
        for (index, corner) in Corner::PATH_ORDER.into_iter().enumerate() {
            cuts.set(corner, index as f32 + 1.0);
        }
        assert_eq!(cuts, CornerCuts::new(1.0, 2.0, 4.0, 3.0));
        assert_eq!(cuts.get(Corner::BottomLeft), 4.0);
    }

    #[test]
    fn tiny_cut_still_counts_as_cut() {
        let cuts = CornerCuts::uniform(0.001);
        assert!(Corner::PATH_ORDER.iter().all(|corner| cuts.is_cut(*corner)));
    }

    #[test]
    fn validate_reports_offending_corner() {
        let cuts = CornerCuts::new(1.0, 1.0, -3.0, 1.0);
        assert_eq!(
            cuts.validate(),
            Err(Error::NegativeLength {
                what: "bottom-left cut",
                value: -3.0
            })
        );
    }

    #[test]
    fn any_non_finite_corner_makes_cuts_non_finite() {
        assert!(CornerCuts::uniform(3.0).is_finite());
        assert!(!CornerCuts::new(1.0, f32::NAN, 1.0, 1.0).is_finite());
        assert!(!CornerCuts::new(1.0, 1.0, 1.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn display_is_clockwise() {
        let cuts = CornerCuts::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(cuts.to_string(), "CornerCuts(1, 2, 4, 3)");
    }
}
