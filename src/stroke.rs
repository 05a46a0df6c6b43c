use crate::Color;

/// Outline drawn along the cut boundary.
///
/// A zero width means no outline. The default color is [`Color::WHITE`].
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 0.0,
            color: Color::WHITE,
        }
    }
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// True if width is zero or color is transparent
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.color.is_transparent()
    }

    /// Offset that centers the stroke line on the nominal boundary.
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::Stroke;
    use crate::Color;

    #[test]
    fn default_stroke_is_white_and_empty() {
        let stroke = Stroke::default();
        assert_eq!(stroke.color, Color::WHITE);
        assert!(stroke.is_empty());
    }

    #[test]
    fn transparent_stroke_is_empty_even_with_width() {
        assert!(Stroke::new(4.0, Color::TRANSPARENT).is_empty());
        assert!(!Stroke::new(4.0, Color::BLACK).is_empty());
        assert_eq!(Stroke::new(4.0, Color::BLACK).half_width(), 2.0);
    }
}
