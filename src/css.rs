//! Host integration and the CSS appliers.
//!
//! The library never talks to a DOM directly. A host implements
//! [`Element`] for whatever it renders (a browser binding, a retained
//! scene graph, a test double) and the appliers here drive it through
//! computed-style reads and inline-style writes. Property names use the
//! DOM's camelCase spelling (`marginLeft`, `WebkitTransform`).

use alloc::format;
use alloc::string::String;

use crate::fit::Transform;
use crate::rect::Rect;

/// A visual element the host can measure and restyle.
pub trait Element {
    /// Layout-box width, ignoring transforms.
    fn offset_width(&self) -> f64;

    /// Layout-box height, ignoring transforms.
    fn offset_height(&self) -> f64;

    /// Viewport-relative bounding box. Only `x`/`y` are used.
    fn bounding_client_rect(&self) -> Rect;

    /// Computed value of a style property, or `None` if the host does not
    /// know the property at all.
    fn computed_style(&self, property: &str) -> Option<String>;

    /// Write an inline style property.
    fn set_style(&mut self, property: &str, value: &str);

    /// Normalized rectangle for this element.
    ///
    /// Size comes from the layout box, position from the viewport bounds.
    /// The two disagree for transformed elements; the CSS appliers rely on
    /// exactly this pairing.
    fn rect(&self) -> Rect {
        let bounds = self.bounding_client_rect();
        Rect {
            x: bounds.x,
            y: bounds.y,
            width: self.offset_width(),
            height: self.offset_height(),
        }
    }
}

// ============================================================================
// Vendor prefix
// ============================================================================

const TRANSFORM: &str = "Transform";
const TRANSFORM_ORIGIN: &str = "TransformOrigin";

/// Lookup order. Each vendor is tried lowercase first, then capitalized.
const VENDORS: [(&str, &str); 4] = [
    ("moz", "Moz"),
    ("ms", "Ms"),
    ("o", "O"),
    ("webkit", "Webkit"),
];

#[cfg(feature = "std")]
static VENDOR: std::sync::OnceLock<&'static str> = std::sync::OnceLock::new();

/// Vendor prefix used for transform properties.
///
/// Resolved once per process on first use (std builds) and never reset;
/// `no_std` builds detect on every call. Every host element is expected to
/// answer the lookup the same way.
pub fn vendor_prefix<E: Element + ?Sized>(element: &E) -> &'static str {
    #[cfg(feature = "std")]
    {
        *VENDOR.get_or_init(|| detect_vendor(element))
    }
    #[cfg(not(feature = "std"))]
    {
        detect_vendor(element)
    }
}

/// First vendor whose `{vendor}Transform` the element knows, or `Webkit`.
pub fn detect_vendor<E: Element + ?Sized>(element: &E) -> &'static str {
    let mut vendor = VENDORS[VENDORS.len() - 1].1;
    for (lower, upper) in VENDORS {
        if supports(element, lower, TRANSFORM) {
            vendor = lower;
            break;
        }
        if supports(element, upper, TRANSFORM) {
            vendor = upper;
            break;
        }
    }
    log::debug!("resolved style vendor prefix {vendor:?}");
    vendor
}

fn supports<E: Element + ?Sized>(element: &E, vendor: &str, prop: &str) -> bool {
    element
        .computed_style(&format!("{vendor}{prop}"))
        .is_some()
}

fn prefixed<E: Element + ?Sized>(element: &E, prop: &str) -> String {
    format!("{}{prop}", vendor_prefix(element))
}

// ============================================================================
// Matrix
// ============================================================================

/// 2D affine matrix in CSS `matrix(a, b, c, d, e, f)` order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix(pub [f64; 6]);

impl Matrix {
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// Parse a computed `transform` value.
    ///
    /// Only `matrix(...)` with at least six components is understood.
    /// `none`, 3D matrices and anything malformed give the identity.
    /// Components beyond the sixth are ignored.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        let Some(args) = value
            .strip_prefix("matrix(")
            .and_then(|rest| rest.strip_suffix(')'))
        else {
            return Self::IDENTITY;
        };
        let mut m = [0.0; 6];
        let mut parts = args.split(',');
        for slot in m.iter_mut() {
            match parts.next() {
                Some(part) => *slot = parse_float(part).unwrap_or(f64::NAN),
                None => return Self::IDENTITY,
            }
        }
        Self(m)
    }

    /// Replace the scale components, keep skew, and add a translation.
    pub fn rescaled(self, scale: f64, tx: f64, ty: f64) -> Self {
        let mut m = self.0;
        m[0] = scale;
        m[3] = scale;
        m[4] += tx;
        m[5] += ty;
        Self(m)
    }

    /// CSS text, e.g. `matrix(0.5,0,0,0.5,-10,25)`.
    pub fn to_css(&self) -> String {
        let m = self.0.map(css_number);
        format!(
            "matrix({},{},{},{},{},{})",
            m[0], m[1], m[2], m[3], m[4], m[5]
        )
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ============================================================================
// Numbers
// ============================================================================

/// Parse the longest numeric prefix of a CSS value, like `parseFloat`.
///
/// `"12.5px"` gives 12.5, `"auto"` and `""` give `None`.
pub fn parse_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

/// Format a number for a style value. Negative zero prints as `0`.
pub fn css_number(v: f64) -> String {
    if v == 0.0 {
        String::from("0")
    } else {
        format!("{v}")
    }
}

fn px(v: f64) -> String {
    format!("{}px", css_number(v))
}

fn style_number<E: Element + ?Sized>(element: &E, property: &str) -> f64 {
    element
        .computed_style(property)
        .and_then(|v| parse_float(&v))
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

// ============================================================================
// Appliers
// ============================================================================

/// Fold the transform into the element's current transform matrix.
///
/// Scale components are replaced, translation is accumulated, skew and
/// rotation are left as they were. The origin moves to the top-left corner.
pub fn css_transform<E: Element + ?Sized>(transform: &Transform, element: &mut E) {
    let transform_prop = prefixed(&*element, TRANSFORM);
    let current = element
        .computed_style(&transform_prop)
        .map(|v| Matrix::parse(&v))
        .unwrap_or_default();
    let matrix = current.rescaled(transform.scale, transform.tx, transform.ty);

    let origin_prop = prefixed(&*element, TRANSFORM_ORIGIN);
    element.set_style(&origin_prop, "0 0");
    element.set_style(&transform_prop, &matrix.to_css());
}

/// Move the element through `left`/`top` and resize it.
///
/// Statically positioned elements are switched to `relative` first so
/// the offsets take effect without disturbing siblings.
pub fn css_position<E: Element + ?Sized>(transform: &Transform, element: &mut E) {
    let left = style_number(&*element, "left");
    let top = style_number(&*element, "top");

    if element.computed_style("position").as_deref() == Some("static") {
        log::debug!("switching static element to relative positioning");
        element.set_style("position", "relative");
    }

    element.set_style("left", &px(left + transform.tx));
    element.set_style("top", &px(top + transform.ty));
    set_size(transform, element);
}

/// Move the element through `marginLeft`/`marginTop` and resize it.
pub fn css_margin<E: Element + ?Sized>(transform: &Transform, element: &mut E) {
    let left = style_number(&*element, "marginLeft");
    let top = style_number(&*element, "marginTop");

    element.set_style("marginLeft", &px(left + transform.tx));
    element.set_style("marginTop", &px(top + transform.ty));
    set_size(transform, element);
}

fn set_size<E: Element + ?Sized>(transform: &Transform, element: &mut E) {
    element.set_style("height", &px(transform.height));
    element.set_style("width", &px(transform.width));
}
