//! Rectangles and normalization of plain rectangle records.
//!
//! Everything the fit calculator consumes is first reduced to a [`Rect`].
//! Elements are normalized by the host integration (see
//! [`Element`](crate::css::Element)); plain records go through [`Bounds`].

use num_traits::Float;

/// Axis-aligned rectangle: top-left corner plus size.
///
/// All values share one caller-chosen coordinate space, typically CSS
/// pixels. Width and height are expected to be non-negative but this is
/// not enforced.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect of the given size at the origin.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Width divided by height. Infinite or NaN for zero height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Whether every field is within `eps` of `other`'s.
    pub fn approx_eq(&self, other: &Rect, eps: f64) -> bool {
        Float::abs(self.x - other.x) <= eps
            && Float::abs(self.y - other.y) <= eps
            && Float::abs(self.width - other.width) <= eps
            && Float::abs(self.height - other.height) <= eps
    }
}

/// Where a `top` fallback lands when a record has no numeric `y`.
///
/// The reference behavior assigns `top` into `x`, which clobbers the
/// horizontal position and leaves `y` unresolved. [`TopFallback::Top`]
/// is the corrected default; [`TopFallback::Legacy`] reproduces the old
/// output for callers that depend on it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TopFallback {
    /// `top` resolves `y`.
    #[default]
    Top,
    /// `top` overwrites `x`.
    Legacy,
}

/// A plain rectangle record, as handed in by callers that have no element.
///
/// Position may be given as `x`/`y` or as `left`/`top`. A field counts as
/// present only when it is `Some` and not NaN.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Record with `x`/`y` position.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            left: None,
            top: None,
            width,
            height,
        }
    }

    /// Record positioned through `left`/`top` only.
    pub const fn from_left_top(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            x: None,
            y: None,
            left: Some(left),
            top: Some(top),
            width,
            height,
        }
    }

    /// Record with a size and no position at all.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self {
            x: None,
            y: None,
            left: None,
            top: None,
            width,
            height,
        }
    }

    /// Resolve `x`/`y` fallbacks in place and return the normalized rect.
    ///
    /// Used for targets: the resolved position is kept so later in-place
    /// mutation offsets it rather than an absent value.
    pub fn resolve(&mut self, fallback: TopFallback) -> Rect {
        if numeric(self.x).is_none()
            && let Some(left) = numeric(self.left)
        {
            self.x = Some(left);
        }
        if numeric(self.y).is_none()
            && let Some(top) = numeric(self.top)
        {
            match fallback {
                TopFallback::Top => self.y = Some(top),
                TopFallback::Legacy => self.x = Some(top),
            }
        }
        self.to_rect()
    }

    /// Normalized rect without touching the record.
    pub fn normalized(&self, fallback: TopFallback) -> Rect {
        let mut copy = *self;
        copy.resolve(fallback)
    }

    /// Rect from the current `x`/`y`, NaN where unresolved.
    pub fn to_rect(&self) -> Rect {
        Rect {
            x: self.x.unwrap_or(f64::NAN),
            y: self.y.unwrap_or(f64::NAN),
            width: self.width,
            height: self.height,
        }
    }
}

impl From<Rect> for Bounds {
    fn from(r: Rect) -> Self {
        Self::new(r.x, r.y, r.width, r.height)
    }
}

fn numeric(v: Option<f64>) -> Option<f64> {
    v.filter(|v| !v.is_nan())
}
