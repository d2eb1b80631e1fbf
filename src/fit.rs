//! Contain/cover fitting of a target rectangle inside a container.
//!
//! Computes a uniform scale and a translation that place the target in
//! the container, aligned on each axis. Pure geometry; applying the result
//! is left to an [`Applier`].
//!
//! # Example
//!
//! ```
//! use zenfit::{Bounds, FitOptions, VAlign};
//!
//! let mut image = Bounds::new(0.0, 0.0, 200.0, 100.0);
//! let frame = Bounds::new(0.0, 0.0, 100.0, 100.0);
//!
//! let t = FitOptions::default()
//!     .v_align(VAlign::Top)
//!     .fit(Some((&mut image).into()), Some((&frame).into()))
//!     .unwrap();
//!
//! assert_eq!(t.scale, 0.5);
//! assert_eq!((image.width, image.height), (100.0, 50.0));
//! ```

use core::fmt;

use num_traits::Float;

use crate::apply::Applier;
use crate::css::Element;
use crate::rect::{Bounds, Rect, TopFallback};

/// Keyword for centered alignment on either axis.
pub const CENTER: &str = "center";
/// Keyword for top vertical alignment.
pub const TOP: &str = "top";
/// Keyword for bottom vertical alignment.
pub const BOTTOM: &str = "bottom";
/// Keyword for left horizontal alignment.
pub const LEFT: &str = "left";
/// Keyword for right horizontal alignment.
pub const RIGHT: &str = "right";

/// Horizontal alignment of the scaled target within the container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl HAlign {
    /// Map a keyword to an alignment. Unrecognized keywords center.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            LEFT => Self::Left,
            RIGHT => Self::Right,
            _ => Self::Center,
        }
    }

    /// The keyword for this alignment.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Left => LEFT,
            Self::Center => CENTER,
            Self::Right => RIGHT,
        }
    }

    /// Offset of the scaled size against the container size.
    fn offset(self, scaled: f64, container: f64) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => 0.5 * (scaled - container),
            Self::Right => scaled - container,
        }
    }
}

/// Vertical alignment of the scaled target within the container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VAlign {
    /// Map a keyword to an alignment. Unrecognized keywords center.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            TOP => Self::Top,
            BOTTOM => Self::Bottom,
            _ => Self::Center,
        }
    }

    /// The keyword for this alignment.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Top => TOP,
            Self::Center => CENTER,
            Self::Bottom => BOTTOM,
        }
    }

    fn offset(self, scaled: f64, container: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5 * (scaled - container),
            Self::Bottom => scaled - container,
        }
    }
}

/// Computed placement of a target within a container.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Transform {
    /// Horizontal move, relative to the target's current position.
    pub tx: f64,
    /// Vertical move, relative to the target's current position.
    pub ty: f64,
    /// Absolute horizontal position after scaling, in container space.
    pub x: f64,
    /// Absolute vertical position after scaling, in container space.
    pub y: f64,
    /// Target width after scaling.
    pub width: f64,
    /// Target height after scaling.
    pub height: f64,
    /// Uniform scale factor for both axes.
    pub scale: f64,
}

impl Transform {
    /// Move and resize a rect by this transform.
    pub fn apply_to(&self, rect: Rect) -> Rect {
        Rect {
            x: rect.x + self.tx,
            y: rect.y + self.ty,
            width: rect.width * self.scale,
            height: rect.height * self.scale,
        }
    }

    /// Copy with offsets, positions and sizes rounded to whole pixels.
    /// The scale is left exact.
    pub fn snapped(&self) -> Self {
        Self {
            tx: Float::round(self.tx),
            ty: Float::round(self.ty),
            x: Float::round(self.x),
            y: Float::round(self.y),
            width: Float::round(self.width),
            height: Float::round(self.height),
            scale: self.scale,
        }
    }

    /// Whether every field is finite. Degenerate inputs produce NaN or
    /// infinities rather than errors.
    pub fn is_finite(&self) -> bool {
        [
            self.tx,
            self.ty,
            self.x,
            self.y,
            self.width,
            self.height,
            self.scale,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Something a transform can be applied to.
pub enum Target<'a> {
    /// A host element, restyled through CSS.
    Element(&'a mut dyn Element),
    /// A plain record, mutated in place.
    Rectangle(&'a mut Bounds),
}

impl Target<'_> {
    /// Normalize to a rect. `top`/`left` fallbacks on records are written back.
    pub fn resolve(&mut self, fallback: TopFallback) -> Rect {
        match self {
            Self::Element(el) => el.rect(),
            Self::Rectangle(b) => b.resolve(fallback),
        }
    }
}

impl<'a> From<&'a mut Bounds> for Target<'a> {
    fn from(b: &'a mut Bounds) -> Self {
        Self::Rectangle(b)
    }
}

impl fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(el) => f.debug_tuple("Element").field(&el.rect()).finish(),
            Self::Rectangle(b) => f.debug_tuple("Rectangle").field(b).finish(),
        }
    }
}

/// The area a target is fitted into. Never mutated.
#[derive(Copy, Clone)]
pub enum Container<'a> {
    Element(&'a dyn Element),
    Rectangle(&'a Bounds),
}

impl Container<'_> {
    /// Normalize to a rect.
    pub fn normalized(&self, fallback: TopFallback) -> Rect {
        match self {
            Self::Element(el) => el.rect(),
            Self::Rectangle(b) => b.normalized(fallback),
        }
    }
}

impl<'a> From<&'a Bounds> for Container<'a> {
    fn from(b: &'a Bounds) -> Self {
        Self::Rectangle(b)
    }
}

impl fmt::Debug for Container<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(el) => f.debug_tuple("Element").field(&el.rect()).finish(),
            Self::Rectangle(b) => f.debug_tuple("Rectangle").field(b).finish(),
        }
    }
}

/// Fitting options.
///
/// # Example
///
/// ```
/// use zenfit::{FitOptions, HAlign, Rect};
///
/// let t = FitOptions::default()
///     .cover(true)
///     .h_align(HAlign::Left)
///     .compute(&Rect::from_size(200.0, 100.0), &Rect::from_size(100.0, 100.0));
///
/// assert_eq!(t.scale, 1.0);
/// assert_eq!(t.tx, 0.0);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct FitOptions {
    pub h_align: HAlign,
    pub v_align: VAlign,
    /// Fill the container, overflowing one axis, instead of fitting inside it.
    pub cover: bool,
    /// Apply the default applier for the target kind when no explicit one is set.
    pub apply: bool,
    /// Explicit applier. Runs regardless of `apply`.
    pub applier: Option<Applier>,
    pub top_fallback: TopFallback,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            h_align: HAlign::Center,
            v_align: VAlign::Center,
            cover: false,
            apply: true,
            applier: None,
            top_fallback: TopFallback::Top,
        }
    }
}

impl FitOptions {
    /// Set horizontal alignment.
    pub fn h_align(mut self, align: HAlign) -> Self {
        self.h_align = align;
        self
    }

    /// Set vertical alignment.
    pub fn v_align(mut self, align: VAlign) -> Self {
        self.v_align = align;
        self
    }

    /// Cover instead of contain.
    pub fn cover(mut self, cover: bool) -> Self {
        self.cover = cover;
        self
    }

    /// Enable or disable the default applier.
    pub fn apply(mut self, apply: bool) -> Self {
        self.apply = apply;
        self
    }

    /// Use a specific applier.
    pub fn applier(mut self, applier: Applier) -> Self {
        self.applier = Some(applier);
        self
    }

    /// Choose how a `top` fallback resolves on plain records.
    pub fn top_fallback(mut self, fallback: TopFallback) -> Self {
        self.top_fallback = fallback;
        self
    }

    /// Compute the transform placing `rect` inside `area`.
    ///
    /// When the target is relatively wider than the container (ties
    /// included), contain matches widths and cover matches heights;
    /// otherwise the other way round.
    pub fn compute(&self, rect: &Rect, area: &Rect) -> Transform {
        let (wa, ha) = (rect.width, rect.height);
        let (wb, hb) = (area.width, area.height);

        let sx = wb / wa;
        let sy = hb / ha;

        let ra = wa / ha;
        let rb = wb / hb;

        let (s_h, s_v) = if self.cover { (sy, sx) } else { (sx, sy) };
        let scale = if ra >= rb { s_h } else { s_v };

        let w = wa * scale;
        let h = ha * scale;

        let ox = self.h_align.offset(w, wb);
        let oy = self.v_align.offset(h, hb);

        let transform = Transform {
            tx: (area.x - ox) - rect.x,
            ty: (area.y - oy) - rect.y,
            x: (area.x - ox) - rect.x * scale,
            y: (area.y - oy) - rect.y * scale,
            width: rect.width * scale,
            height: rect.height * scale,
            scale,
        };

        if !scale.is_finite() {
            log::debug!("degenerate fit of {rect:?} into {area:?}: scale {scale}");
        }
        log::trace!("fit {rect:?} into {area:?} -> {transform:?}");
        transform
    }

    /// Fit `target` into `container`, applying the result.
    ///
    /// Fails only when either is absent, before anything is computed or
    /// mutated. An explicit applier always runs; otherwise elements get
    /// [`css_transform`](crate::css::css_transform) and records get
    /// [`rectangle`](crate::apply::rectangle) when `apply` is set.
    pub fn fit(
        &self,
        target: Option<Target<'_>>,
        container: Option<Container<'_>>,
    ) -> Result<Transform, FitError> {
        let (Some(mut target), Some(container)) = (target, container) else {
            return Err(FitError::MissingInput);
        };

        let rect = target.resolve(self.top_fallback);
        let area = container.normalized(self.top_fallback);
        let transform = self.compute(&rect, &area);

        match self.applier {
            Some(applier) => applier.apply(&transform, &mut target)?,
            None if self.apply => Applier::default_for(&target).apply(&transform, &mut target)?,
            None => {}
        }

        Ok(transform)
    }
}

/// Fit `target` into `container` with `options`.
///
/// Free-function form of [`FitOptions::fit`].
pub fn fit(
    target: Option<Target<'_>>,
    container: Option<Container<'_>>,
    options: &FitOptions,
) -> Result<Transform, FitError> {
    options.fit(target, container)
}

/// Fit error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FitError {
    /// Target or container was not supplied.
    MissingInput,
    /// The applier cannot act on this kind of target.
    IncompatibleApplier,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => f.write_str("You must supply a target and a container"),
            Self::IncompatibleApplier => {
                f.write_str("applier does not support this kind of target")
            }
        }
    }
}

impl core::error::Error for FitError {}
