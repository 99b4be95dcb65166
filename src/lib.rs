//! Data-to-canvas coordinate mapping for 2D plotting.
//!
//! `lerret` maps points between two cartesian reference frames: a **data**
//! space, where y increases upward and the bounds are whatever your domain
//! dictates, and a **canvas** space, the painter model where y increases
//! downward. It does one conversion (independent per-axis linear scaling
//! plus a y-axis flip) and nothing else.
//!
//! # Core Concepts
//!
//! ## Rectangles
//!
//! Both spaces are described by an axis-aligned [`Rect`] holding the
//! min/max bounds `{x0, y0, x1, y1}`. The transform takes one rectangle
//! per space and derives a per-axis [`AxisMap`] (scale factor plus
//! translation offset) once, at construction.
//!
//! ## The Transform
//!
//! [`AxisTransform`] is immutable after construction: every mapping call
//! is a pure read of the derived maps, so an instance can be shared freely,
//! including across threads.
//!
//! ## Scalars and Batches
//!
//! The single-axis entry points accept either one coordinate or an ordered
//! batch, and the result mirrors the input shape: pass one value, get one
//! value back. See [`Coords`] and [`Mapped`].
//!
//! # Examples
//!
//! ## Basic Point Mapping
//!
//! ```rust
//! use lerret::{AxisTransform, Rect};
//!
//! // Show the data window [0, 100] x [0, 50] on an 800x600 canvas.
//! let transform = AxisTransform::new(
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     Rect::new(0.0, 0.0, 100.0, 50.0),
//! );
//!
//! // Canvas y grows downward, so the data bottom lands on canvas y = 600.
//! assert_eq!(transform.map_point((0.0, 0.0)), (0.0, 600.0));
//! assert_eq!(transform.map_point((100.0, 50.0)), (800.0, 0.0));
//! ```
//!
//! ## Batches of Coordinates
//!
//! ```rust
//! use lerret::{AxisTransform, Rect};
//!
//! let transform = AxisTransform::new(
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     Rect::new(0.0, 0.0, 100.0, 50.0),
//! );
//!
//! // A polyline in data space, ready for a painter in canvas space.
//! let (xs, ys) = transform
//!     .map(vec![0.0, 25.0, 50.0], vec![0.0, 25.0, 50.0])
//!     .unwrap();
//! assert_eq!(xs, vec![0.0, 200.0, 400.0]);
//! assert_eq!(ys, vec![600.0, 300.0, 0.0]);
//! ```
//!
//! ## Building from Raw Bounds
//!
//! ```rust
//! use lerret::AxisTransform;
//!
//! // Bounds arriving as plain [x0, y0, x1, y1] slices are validated.
//! let transform =
//!     AxisTransform::from_bounds(&[10.0, 10.0, 100.0, 100.0], &[-100.0, -100.0, 100.0, 100.0])
//!         .unwrap();
//! assert_eq!(transform.map_x(-100.0).as_scalar(), Some(10.0));
//! ```
//!
//! ## Mapping Back to Data Space
//!
//! ```rust
//! use lerret::{AxisTransform, Rect};
//!
//! let transform = AxisTransform::new(
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     Rect::new(0.0, 0.0, 100.0, 75.0),
//! );
//!
//! // A click at pixel (240, 440) corresponds to data point (30, 20).
//! let click = transform.inverted().map_point((240.0, 440.0));
//! assert_eq!(click, (30.0, 20.0));
//! ```

pub mod coords;
pub mod error;
pub mod transform;

pub use coords::{Coords, Mapped};
pub use error::{ConfigError, InputError};
pub use num_traits::Float;
pub use transform::{AxisMap, AxisTransform, Rect};
