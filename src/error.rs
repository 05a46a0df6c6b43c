/// Errors reported when validating configuration input.
///
/// Drawing never fails: invalid numbers only produce malformed geometry. These errors exist for
/// hosts that want to reject bad input up front.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{what} must not be negative, got {value}")]
    NegativeLength { what: &'static str, value: f32 },
    #[error("{what} must be a finite number")]
    NonFiniteLength { what: &'static str },
    #[error("invalid color {0:?}, expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_length(what: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::NonFiniteLength { what });
    }
    if value < 0.0 {
        return Err(Error::NegativeLength { what, value });
    }
    Ok(())
}
