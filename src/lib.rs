//! Contain/cover fitting of a rectangle inside a container, `object-fit` style.
//!
//! Pure geometry plus a handful of appliers that write the result back to
//! a host element's style or to a plain rectangle record. `no_std + alloc`
//! compatible.
//!
//! # Modules
//!
//! - [`rect`] — Rectangles and normalization of plain records
//! - [`fit`] — Alignment, options, and the fit computation
//! - [`apply`] — Applier selection and in-place record mutation
//! - [`css`] — Host element trait and the CSS appliers

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod apply;
pub mod css;
pub mod fit;
pub mod rect;

pub use apply::{Applier, rectangle};
pub use css::{Element, Matrix, css_margin, css_position, css_transform};
pub use fit::{
    BOTTOM, CENTER, Container, FitError, FitOptions, HAlign, LEFT, RIGHT, TOP, Target, Transform,
    VAlign, fit,
};
pub use rect::{Bounds, Rect, TopFallback};
