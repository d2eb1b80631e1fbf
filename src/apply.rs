//! Applier selection and the in-place rectangle applier.

use crate::css;
use crate::fit::{FitError, Target, Transform};
use crate::rect::Bounds;

/// How a computed [`Transform`] is materialized on its target.
#[derive(Copy, Clone, Debug)]
pub enum Applier {
    /// Fold into the element's transform matrix. See [`css::css_transform`].
    CssTransform,
    /// Move through `left`/`top` and resize. See [`css::css_position`].
    CssPosition,
    /// Move through margins and resize. See [`css::css_margin`].
    CssMargin,
    /// Mutate a plain record in place. See [`rectangle`].
    Rectangle,
    /// Caller-supplied strategy. Receives any kind of target.
    ///
    /// A plain `fn` pointer, so it cannot capture state; keeps
    /// [`FitOptions`](crate::FitOptions) `Copy`. Stateful callers apply the
    /// returned [`Transform`] themselves with `apply(false)`.
    Custom(fn(&Transform, &mut Target<'_>)),
}

impl Applier {
    /// The applier used when none is given: CSS transform for elements,
    /// in-place mutation for records.
    pub fn default_for(target: &Target<'_>) -> Self {
        match target {
            Target::Element(_) => Self::CssTransform,
            Target::Rectangle(_) => Self::Rectangle,
        }
    }

    /// Apply `transform` to `target`.
    ///
    /// CSS appliers only act on elements and [`Applier::Rectangle`] only on
    /// records; any other pairing fails without touching the target.
    pub fn apply(self, transform: &Transform, target: &mut Target<'_>) -> Result<(), FitError> {
        match (self, target) {
            (Self::Custom(f), target) => f(transform, target),
            (Self::CssTransform, Target::Element(el)) => css::css_transform(transform, &mut **el),
            (Self::CssPosition, Target::Element(el)) => css::css_position(transform, &mut **el),
            (Self::CssMargin, Target::Element(el)) => css::css_margin(transform, &mut **el),
            (Self::Rectangle, Target::Rectangle(b)) => rectangle(transform, b),
            (applier, target) => {
                log::warn!("{applier:?} cannot be applied to {target:?}");
                return Err(FitError::IncompatibleApplier);
            }
        }
        Ok(())
    }
}

/// Scale and move a plain record in place.
///
/// An unresolved coordinate stays unresolved as NaN.
pub fn rectangle(transform: &Transform, target: &mut Bounds) {
    target.height *= transform.scale;
    target.width *= transform.scale;
    target.x = Some(target.x.unwrap_or(f64::NAN) + transform.tx);
    target.y = Some(target.y.unwrap_or(f64::NAN) + transform.ty);
}
