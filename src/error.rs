use thiserror::Error;

/// Error raised while building an [`AxisTransform`](crate::AxisTransform)
/// from raw bounds.
///
/// Construction is all-or-nothing: a failed build never yields a partial
/// transform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The canvas bounds were not a four-element `[x0, y0, x1, y1]` slice.
    #[error("missing canvas data")]
    MissingCanvas,
    /// The data bounds were not a four-element `[x0, y0, x1, y1]` slice.
    #[error("missing data data")]
    MissingData,
}

/// Error raised by a mapping call on an already-constructed transform.
///
/// Each call is validated independently; a rejected call leaves the
/// transform untouched for subsequent calls.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Paired x and y coordinate sequences did not have the same length.
    #[error("x and y arrays different lengths: {x_len} vs {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
}
