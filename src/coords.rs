//! Scalar-or-sequence coordinate arguments and results.
//!
//! The mapping entry points on [`AxisTransform`](crate::AxisTransform)
//! accept either a single coordinate or an ordered batch of coordinates.
//! [`Coords`] is the argument side of that contract and [`Mapped`] the
//! result side: the output shape mirrors the input shape, so callers that
//! pass one value get one value back without unwrapping a container.

use num_traits::Float;

/// A coordinate argument: one value or an ordered sequence of values.
///
/// Mapping methods take `impl Into<Coords<F>>`, so call sites pass plain
/// scalars, vectors, slices, or arrays directly:
///
/// ```
/// use lerret::{AxisTransform, Rect};
///
/// let t = AxisTransform::new(
///     Rect::new(0.0, 0.0, 800.0, 600.0),
///     Rect::new(0.0, 0.0, 100.0, 50.0),
/// );
///
/// t.map_x(50.0);                // scalar
/// t.map_x(vec![0.0, 50.0]);     // vector
/// t.map_x([0.0, 50.0, 100.0]);  // array
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Coords<F = f64> {
    /// A single coordinate.
    Scalar(F),
    /// An ordered batch of coordinates.
    Sequence(Vec<F>),
}

impl<F: Float> Coords<F> {
    /// Wraps a single coordinate.
    ///
    /// Useful for numeric types without a scalar `From` impl, such as
    /// decimal domains.
    pub fn scalar(value: F) -> Self {
        Coords::Scalar(value)
    }

    /// Normalizes to an owned sequence; a scalar becomes one element.
    pub fn into_vec(self) -> Vec<F> {
        match self {
            Coords::Scalar(value) => vec![value],
            Coords::Sequence(values) => values,
        }
    }
}

impl From<f64> for Coords<f64> {
    fn from(value: f64) -> Self {
        Coords::Scalar(value)
    }
}

impl From<f32> for Coords<f32> {
    fn from(value: f32) -> Self {
        Coords::Scalar(value)
    }
}

impl<F: Float> From<Vec<F>> for Coords<F> {
    fn from(values: Vec<F>) -> Self {
        Coords::Sequence(values)
    }
}

impl<F: Float> From<&[F]> for Coords<F> {
    fn from(values: &[F]) -> Self {
        Coords::Sequence(values.to_vec())
    }
}

impl<F: Float, const N: usize> From<[F; N]> for Coords<F> {
    fn from(values: [F; N]) -> Self {
        Coords::Sequence(values.to_vec())
    }
}

/// A mapped coordinate result whose shape mirrors the input.
///
/// A normalized input of exactly one element comes back as
/// [`Mapped::Scalar`]; any other length (including zero) comes back as
/// [`Mapped::Sequence`] in input order.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapped<F = f64> {
    /// The single mapped coordinate for a one-element input.
    Scalar(F),
    /// The mapped coordinates for a multi-element (or empty) input.
    Sequence(Vec<F>),
}

impl<F: Float> Mapped<F> {
    pub(crate) fn from_vec(values: Vec<F>) -> Self {
        if values.len() == 1 {
            Mapped::Scalar(values[0])
        } else {
            Mapped::Sequence(values)
        }
    }

    /// Returns the scalar value, or `None` for a sequence result.
    pub fn as_scalar(&self) -> Option<F> {
        match self {
            Mapped::Scalar(value) => Some(*value),
            Mapped::Sequence(_) => None,
        }
    }

    /// Flattens to an owned sequence; a scalar becomes one element.
    pub fn into_vec(self) -> Vec<F> {
        match self {
            Mapped::Scalar(value) => vec![value],
            Mapped::Sequence(values) => values,
        }
    }
}
