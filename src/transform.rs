//! The data-to-canvas axis transform.
//!
//! This module provides the one conversion this crate exists for: mapping
//! points from a "data" rectangle (mathematical coordinates, y increasing
//! upward) into a "canvas" rectangle (painter coordinates, y increasing
//! downward).
//!
//! # Key Types
//!
//! - [`Rect`] - An axis-aligned rectangle given by its min/max bounds
//! - [`AxisMap`] - The per-axis scale and translation derived at construction
//! - [`AxisTransform`] - Maps data-space points to canvas-space points
//!
//! # Coordinate Systems
//!
//! ## Data Coordinates
//!
//! - Origin and scale defined by your data
//! - X increases to the right
//! - Y increases **upward**
//! - Values are in your domain units
//!
//! ## Canvas Coordinates
//!
//! - The painter/graphics model
//! - X increases to the right
//! - Y increases **downward**
//! - Values are in destination units (typically pixels or points)
//!
//! The [`AxisTransform`] handles the y-axis inversion between the two
//! systems: the data-space minimum y lands on the canvas-space *maximum* y.
//!
//! # Examples
//!
//! ```
//! use lerret::{AxisTransform, Rect};
//!
//! // An 800x600 canvas showing the data window [0, 100] x [0, 50].
//! let transform = AxisTransform::new(
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     Rect::new(0.0, 0.0, 100.0, 50.0),
//! );
//!
//! // The center of the data window lands on the center of the canvas.
//! assert_eq!(transform.map_point((50.0, 25.0)), (400.0, 300.0));
//!
//! // The bottom of the data window (y = 0) lands on the bottom of the
//! // canvas (y = 600), because canvas y grows downward.
//! assert_eq!(transform.map_point((0.0, 0.0)), (0.0, 600.0));
//! ```

use num_traits::Float;

use crate::coords::{Coords, Mapped};
use crate::error::{ConfigError, InputError};

/// Return `(min, max)` for two owned values.
fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// An axis-aligned rectangle given by its bounds.
///
/// `x0`/`x1` are the minimum and maximum x, `y0`/`y1` the minimum and
/// maximum y. The same shape describes both data-space and canvas-space
/// rectangles; only the interpretation of the y direction differs.
///
/// # Examples
///
/// ```
/// use lerret::Rect;
///
/// let rect = Rect::new(0.0, 0.0, 800.0, 600.0);
/// assert_eq!(rect.width(), 800.0);
/// assert_eq!(rect.height(), 600.0);
/// assert!(rect.contains(400.0, 300.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<F = f64> {
    /// Minimum x bound.
    pub x0: F,
    /// Minimum y bound.
    pub y0: F,
    /// Maximum x bound.
    pub x1: F,
    /// Maximum y bound.
    pub y1: F,
}

impl<F> Rect<F> {
    /// Creates a rectangle from its four bounds.
    pub const fn new(x0: F, y0: F, x1: F, y1: F) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

impl<F: Float> Rect<F> {
    /// Creates a rectangle from a `[x0, y0, x1, y1]` slice.
    ///
    /// Returns `None` unless the slice has exactly four elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lerret::Rect;
    ///
    /// assert_eq!(
    ///     Rect::from_slice(&[0.0, 0.0, 800.0, 600.0]),
    ///     Some(Rect::new(0.0, 0.0, 800.0, 600.0)),
    /// );
    /// assert_eq!(Rect::<f64>::from_slice(&[0.0, 0.0, 800.0]), None);
    /// ```
    pub fn from_slice(bounds: &[F]) -> Option<Self> {
        match *bounds {
            [x0, y0, x1, y1] => Some(Self::new(x0, y0, x1, y1)),
            _ => None,
        }
    }

    /// The horizontal extent, `x1 - x0`.
    pub fn width(&self) -> F {
        self.x1 - self.x0
    }

    /// The vertical extent, `y1 - y0`.
    pub fn height(&self) -> F {
        self.y1 - self.y0
    }

    /// Returns true if the point lies within this rectangle.
    ///
    /// Bounds are inclusive and reversed bounds are handled by comparing
    /// sorted endpoints.
    pub fn contains(&self, x: F, y: F) -> bool {
        let (x_min, x_max) = sorted_pair(self.x0, self.x1);
        let (y_min, y_max) = sorted_pair(self.y0, self.y1);
        x >= x_min && x <= x_max && y >= y_min && y <= y_max
    }
}

/// Per-axis linear map: `canvas = offset_from_reference * s + t`.
///
/// `s` converts a unit of data-space distance into canvas-space distance;
/// `t` aligns the result to the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMap<F = f64> {
    /// Scale factor.
    pub s: F,
    /// Translation offset.
    pub t: F,
}

/// Maps points from a data rectangle onto a canvas rectangle.
///
/// The per-axis scale and translation factors are derived once at
/// construction and the transform is immutable afterward: every mapping
/// call is a pure read, so sharing a transform across threads needs no
/// locking.
///
/// # Y-Axis Inversion
///
/// Data y increases upward while canvas y increases downward. The x axis
/// measures offsets from the data minimum (`data.x0`); the y axis measures
/// offsets from the data *maximum* (`data.y1`), which is what flips the
/// direction:
///
/// - `canvas_x = (x - data.x0) * sx + canvas.x0`
/// - `canvas_y = (data.y1 - y) * sy + canvas.y0`
///
/// # Degenerate Rectangles
///
/// A data rectangle with zero width or height makes the corresponding
/// scale factor non-finite. Construction still succeeds and every
/// subsequent mapping call silently propagates the non-finite values;
/// callers that need to reject such windows must check the bounds
/// themselves.
///
/// # Examples
///
/// ```
/// use lerret::{AxisTransform, Mapped, Rect};
///
/// let transform = AxisTransform::new(
///     Rect::new(0.0, 0.0, 800.0, 600.0),
///     Rect::new(0.0, 0.0, 100.0, 50.0),
/// );
///
/// // One value in, one value out.
/// assert_eq!(transform.map_x(50.0), Mapped::Scalar(400.0));
///
/// // A batch in, a batch out, in input order.
/// assert_eq!(
///     transform.map_y(vec![0.0, 25.0, 50.0]),
///     Mapped::Sequence(vec![600.0, 300.0, 0.0]),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransform<F = f64> {
    canvas: Rect<F>,
    data: Rect<F>,
    x_map: AxisMap<F>,
    y_map: AxisMap<F>,
}

impl<F: Float> AxisTransform<F> {
    /// Creates a transform mapping the data rectangle onto the canvas
    /// rectangle.
    ///
    /// The per-axis maps are derived immediately; the result is ready to
    /// use with no further setup.
    pub fn new(canvas: Rect<F>, data: Rect<F>) -> Self {
        let x_map = AxisMap {
            s: canvas.width() / data.width(),
            t: canvas.x0,
        };
        let y_map = AxisMap {
            s: canvas.height() / data.height(),
            t: canvas.y0,
        };
        Self {
            canvas,
            data,
            x_map,
            y_map,
        }
    }

    /// Creates a transform from raw `[x0, y0, x1, y1]` bounds.
    ///
    /// Fails fast if either slice does not hold exactly four elements;
    /// no partial transform is ever produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use lerret::{AxisTransform, ConfigError};
    ///
    /// let transform =
    ///     AxisTransform::from_bounds(&[0.0, 0.0, 800.0, 600.0], &[0.0, 0.0, 100.0, 50.0])
    ///         .unwrap();
    /// assert_eq!(transform.cx1(), 800.0);
    ///
    /// let err = AxisTransform::from_bounds(&[0.0, 0.0, 800.0], &[0.0, 0.0, 100.0, 50.0]);
    /// assert_eq!(err.unwrap_err(), ConfigError::MissingCanvas);
    /// ```
    pub fn from_bounds(canvas: &[F], data: &[F]) -> Result<Self, ConfigError> {
        let canvas = Rect::from_slice(canvas).ok_or(ConfigError::MissingCanvas)?;
        let data = Rect::from_slice(data).ok_or(ConfigError::MissingData)?;
        Ok(Self::new(canvas, data))
    }

    /// The canvas rectangle this transform maps onto.
    pub fn canvas_bounds(&self) -> &Rect<F> {
        &self.canvas
    }

    /// The data rectangle this transform maps from.
    pub fn data_bounds(&self) -> &Rect<F> {
        &self.data
    }

    /// The derived x-axis scale and translation.
    pub fn x_map(&self) -> AxisMap<F> {
        self.x_map
    }

    /// The derived y-axis scale and translation.
    pub fn y_map(&self) -> AxisMap<F> {
        self.y_map
    }

    /// Canvas minimum x.
    pub fn cx0(&self) -> F {
        self.canvas.x0
    }

    /// Canvas maximum x.
    pub fn cx1(&self) -> F {
        self.canvas.x1
    }

    /// Canvas minimum y.
    pub fn cy0(&self) -> F {
        self.canvas.y0
    }

    /// Canvas maximum y.
    pub fn cy1(&self) -> F {
        self.canvas.y1
    }

    /// Data minimum x.
    pub fn dx0(&self) -> F {
        self.data.x0
    }

    /// Data maximum x.
    pub fn dx1(&self) -> F {
        self.data.x1
    }

    /// Data minimum y.
    pub fn dy0(&self) -> F {
        self.data.y0
    }

    /// Data maximum y.
    pub fn dy1(&self) -> F {
        self.data.y1
    }

    /// Maps a single data-space x coordinate to canvas space.
    pub fn x_to_canvas(&self, x: F) -> F {
        (x - self.data.x0) * self.x_map.s + self.x_map.t
    }

    /// Maps a single data-space y coordinate to canvas space.
    ///
    /// Unlike the x axis, y is measured as a distance from the data
    /// maximum, which inverts the axis direction.
    pub fn y_to_canvas(&self, y: F) -> F {
        (self.data.y1 - y) * self.y_map.s + self.y_map.t
    }

    /// Maps data-space x coordinates to canvas space.
    ///
    /// Accepts a scalar or a sequence; the result mirrors the input shape
    /// (see [`Mapped`]). Sequences are mapped element-wise in input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lerret::{AxisTransform, Mapped, Rect};
    ///
    /// let transform = AxisTransform::new(
    ///     Rect::new(0.0, 0.0, 800.0, 600.0),
    ///     Rect::new(0.0, 0.0, 100.0, 50.0),
    /// );
    ///
    /// assert_eq!(transform.map_x(25.0), Mapped::Scalar(200.0));
    /// assert_eq!(transform.map_x([25.0]), Mapped::Scalar(200.0));
    /// assert_eq!(
    ///     transform.map_x(vec![25.0, 75.0]),
    ///     Mapped::Sequence(vec![200.0, 600.0]),
    /// );
    /// ```
    pub fn map_x(&self, x: impl Into<Coords<F>>) -> Mapped<F> {
        let mapped = x
            .into()
            .into_vec()
            .into_iter()
            .map(|x| self.x_to_canvas(x))
            .collect();
        Mapped::from_vec(mapped)
    }

    /// Maps data-space y coordinates to canvas space, inverting the axis.
    ///
    /// Same contract as [`map_x`](Self::map_x) but with the y-flip formula:
    /// the data minimum y maps to the canvas maximum y and vice versa.
    pub fn map_y(&self, y: impl Into<Coords<F>>) -> Mapped<F> {
        let mapped = y
            .into()
            .into_vec()
            .into_iter()
            .map(|y| self.y_to_canvas(y))
            .collect();
        Mapped::from_vec(mapped)
    }

    /// Maps parallel x and y coordinate batches to canvas space.
    ///
    /// Scalars are normalized to one-element sequences first; the two
    /// sequences must then have equal length. The result is always a pair
    /// of sequences; unlike [`map_x`](Self::map_x) and
    /// [`map_y`](Self::map_y), a single pair is not unwrapped to scalars.
    ///
    /// # Errors
    ///
    /// [`InputError::LengthMismatch`] if the normalized sequences differ
    /// in length. A rejected call has no effect on the transform.
    ///
    /// # Examples
    ///
    /// ```
    /// use lerret::{AxisTransform, Rect};
    ///
    /// let transform = AxisTransform::new(
    ///     Rect::new(0.0, 0.0, 800.0, 600.0),
    ///     Rect::new(0.0, 0.0, 100.0, 50.0),
    /// );
    ///
    /// let (xs, ys) = transform.map(vec![0.0, 100.0], vec![0.0, 50.0]).unwrap();
    /// assert_eq!(xs, vec![0.0, 800.0]);
    /// assert_eq!(ys, vec![600.0, 0.0]);
    ///
    /// assert!(transform.map(vec![1.0, 2.0, 3.0], vec![1.0, 2.0]).is_err());
    /// ```
    pub fn map(
        &self,
        x: impl Into<Coords<F>>,
        y: impl Into<Coords<F>>,
    ) -> Result<(Vec<F>, Vec<F>), InputError> {
        let xs = x.into().into_vec();
        let ys = y.into().into_vec();
        if xs.len() != ys.len() {
            return Err(InputError::LengthMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        let xs = xs.into_iter().map(|x| self.x_to_canvas(x)).collect();
        let ys = ys.into_iter().map(|y| self.y_to_canvas(y)).collect();
        Ok((xs, ys))
    }

    /// Maps a single data-space point to canvas space.
    pub fn map_point(&self, point: (F, F)) -> (F, F) {
        (self.x_to_canvas(point.0), self.y_to_canvas(point.1))
    }

    /// The opposite-direction transform, mapping canvas space back onto
    /// data space.
    ///
    /// Built by swapping the two rectangles; composing it with `self`
    /// returns the original coordinates within floating-point tolerance.
    ///
    /// # Examples
    ///
    /// ```
    /// use lerret::{AxisTransform, Rect};
    ///
    /// let transform = AxisTransform::new(
    ///     Rect::new(0.0, 0.0, 800.0, 600.0),
    ///     Rect::new(0.0, 0.0, 100.0, 75.0),
    /// );
    /// let back = transform.inverted();
    ///
    /// let (cx, cy) = transform.map_point((30.0, 20.0));
    /// assert_eq!(back.map_point((cx, cy)), (30.0, 20.0));
    /// ```
    pub fn inverted(&self) -> Self {
        Self::new(self.data, self.canvas)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn example_transform() -> AxisTransform {
        AxisTransform::new(
            Rect::new(10.0, 10.0, 100.0, 100.0),
            Rect::new(-100.0, -100.0, 100.0, 100.0),
        )
    }

    #[test]
    fn construction_derives_axis_maps() {
        let transform = example_transform();

        assert_approx_eq!(transform.x_map().s, 0.45);
        assert_eq!(transform.x_map().t, 10.0);
        assert_approx_eq!(transform.y_map().s, 0.45);
        assert_eq!(transform.y_map().t, 10.0);
    }

    #[test]
    fn accessors_read_stored_rects() {
        let transform = example_transform();

        assert_eq!(
            (
                transform.cx0(),
                transform.cy0(),
                transform.cx1(),
                transform.cy1()
            ),
            (10.0, 10.0, 100.0, 100.0),
        );
        assert_eq!(
            (
                transform.dx0(),
                transform.dy0(),
                transform.dx1(),
                transform.dy1()
            ),
            (-100.0, -100.0, 100.0, 100.0),
        );
        assert_eq!(
            transform.canvas_bounds(),
            &Rect::new(10.0, 10.0, 100.0, 100.0)
        );
        assert_eq!(
            transform.data_bounds(),
            &Rect::new(-100.0, -100.0, 100.0, 100.0)
        );
    }

    #[test]
    fn from_bounds_rejects_wrong_lengths() {
        assert_eq!(
            AxisTransform::from_bounds(&[0.0, 0.0, 1.0], &[0.0, 0.0, 1.0, 1.0]),
            Err(ConfigError::MissingCanvas),
        );
        assert_eq!(
            AxisTransform::from_bounds(&[0.0, 0.0, 1.0, 1.0], &[0.0, 0.0, 1.0, 1.0, 9.0]),
            Err(ConfigError::MissingData),
        );
        assert_eq!(ConfigError::MissingCanvas.to_string(), "missing canvas data");
        assert_eq!(ConfigError::MissingData.to_string(), "missing data data");
    }

    #[test]
    fn maps_data_extremes_onto_canvas_extremes() {
        let transform = example_transform();

        assert_approx_eq!(transform.x_to_canvas(-100.0), 10.0);
        assert_approx_eq!(transform.x_to_canvas(100.0), 100.0);
        // y flips: the data minimum lands on the canvas maximum.
        assert_approx_eq!(transform.y_to_canvas(-100.0), 100.0);
        assert_approx_eq!(transform.y_to_canvas(100.0), 10.0);
    }

    #[test]
    fn corner_mapping_inverts_y() {
        let transform = example_transform();

        let (xs, ys) = transform
            .map(vec![transform.dx0()], vec![transform.dy0()])
            .unwrap();
        assert_approx_eq!(xs[0], transform.cx0());
        assert_approx_eq!(ys[0], transform.cy1());

        let (xs, ys) = transform
            .map(vec![transform.dx1()], vec![transform.dy1()])
            .unwrap();
        assert_approx_eq!(xs[0], transform.cx1());
        assert_approx_eq!(ys[0], transform.cy0());
    }

    #[test]
    fn round_trip_through_inverted_transform() {
        let transform = AxisTransform::new(
            Rect::new(10.0, 20.0, 810.0, 420.0),
            Rect::new(-3.0, 1.5, 7.25, 9.0),
        );
        let back = transform.inverted();

        for &(x, y) in &[(-3.0, 1.5), (0.0, 5.0), (7.25, 9.0), (2.125, 3.75)] {
            let (cx, cy) = transform.map_point((x, y));
            let (rx, ry) = back.map_point((cx, cy));
            assert_approx_eq!(rx, x, 1e-12);
            assert_approx_eq!(ry, y, 1e-12);
        }
    }

    #[test]
    fn scalar_and_sequence_results_mirror_input_shape() {
        let transform = example_transform();

        assert_eq!(transform.map_x(5.0), transform.map_x(vec![5.0]));
        assert!(matches!(transform.map_x(5.0), Mapped::Scalar(_)));
        assert!(matches!(
            transform.map_x(vec![5.0, 6.0]),
            Mapped::Sequence(ref values) if values.len() == 2
        ));
        assert_eq!(transform.map_x(Vec::new()), Mapped::Sequence(Vec::new()));
    }

    #[test]
    fn sequences_map_in_input_order() {
        let transform = example_transform();

        let mapped = transform.map_x(vec![0.0, 10.0, 20.0]).into_vec();
        assert!(mapped[0] < mapped[1] && mapped[1] < mapped[2]);

        // The y axis flips, so increasing inputs come out decreasing.
        let mapped = transform.map_y(vec![0.0, 10.0, 20.0]).into_vec();
        assert!(mapped[0] > mapped[1] && mapped[1] > mapped[2]);
    }

    #[test]
    fn map_rejects_mismatched_lengths() {
        let transform = example_transform();

        let err = transform
            .map(vec![1.0, 2.0, 3.0], vec![1.0, 2.0])
            .unwrap_err();
        assert_eq!(err, InputError::LengthMismatch { x_len: 3, y_len: 2 });
        assert!(err.to_string().contains("x and y arrays different lengths"));

        // A scalar pairs with a one-element sequence.
        assert!(transform.map(4.0, vec![5.0]).is_ok());

        // A rejected call leaves the transform usable.
        assert!(transform.map(vec![1.0, 2.0], vec![3.0, 4.0]).is_ok());
    }

    #[test]
    fn map_always_returns_sequences() {
        let transform = example_transform();

        let (xs, ys) = transform.map(0.0, 0.0).unwrap();
        assert_eq!(xs.len(), 1);
        assert_eq!(ys.len(), 1);
        assert_approx_eq!(xs[0], 55.0);
        assert_approx_eq!(ys[0], 55.0);
    }

    #[test]
    fn degenerate_data_rect_propagates_non_finite_values() {
        // Zero-width data window: the x scale divides by zero.
        let transform = AxisTransform::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(5.0, 0.0, 5.0, 10.0),
        );

        assert!(transform.x_map().s.is_infinite());
        assert!(transform.x_to_canvas(7.0).is_infinite());
        // At the collapsed bound the offset is zero, so 0 * inf = NaN.
        assert!(transform.x_to_canvas(5.0).is_nan());
        // The y axis is unaffected.
        assert_approx_eq!(transform.y_to_canvas(0.0), 100.0);
    }

    #[test]
    fn works_with_f32_bounds() {
        let transform = AxisTransform::new(
            Rect::new(0.0f32, 0.0, 800.0, 600.0),
            Rect::new(0.0f32, 0.0, 100.0, 50.0),
        );

        assert_eq!(transform.map_x(50.0f32), Mapped::Scalar(400.0f32));
        assert_eq!(transform.map_point((100.0, 50.0)), (800.0, 0.0));
    }
}
