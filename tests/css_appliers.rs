//! CSS appliers against an in-memory element.
//!
//! The mock keeps a single style map: inline writes are what later
//! computed-style reads see, which is how a browser behaves for the
//! properties touched here.

use std::collections::HashMap;

use zenfit::*;

#[derive(Debug, Default)]
struct MockElement {
    offset: (f64, f64),
    bounds: Rect,
    style: HashMap<String, String>,
    writes: Vec<(String, String)>,
}

impl MockElement {
    /// Element at `(x, y)` with the given layout size, statically positioned.
    fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut style = HashMap::new();
        style.insert("position".to_string(), "static".to_string());
        style.insert("left".to_string(), "auto".to_string());
        style.insert("top".to_string(), "auto".to_string());
        style.insert("marginLeft".to_string(), "0px".to_string());
        style.insert("marginTop".to_string(), "0px".to_string());
        style.insert("WebkitTransform".to_string(), "none".to_string());
        style.insert("WebkitTransformOrigin".to_string(), "50% 50%".to_string());
        Self {
            offset: (width, height),
            bounds: Rect::new(x, y, width, height),
            style,
            writes: Vec::new(),
        }
    }

    fn with_style(mut self, property: &str, value: &str) -> Self {
        self.style.insert(property.to_string(), value.to_string());
        self
    }

    fn get(&self, property: &str) -> &str {
        self.style.get(property).map(String::as_str).unwrap_or("")
    }
}

impl Element for MockElement {
    fn offset_width(&self) -> f64 {
        self.offset.0
    }

    fn offset_height(&self) -> f64 {
        self.offset.1
    }

    fn bounding_client_rect(&self) -> Rect {
        self.bounds
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        self.style.get(property).cloned()
    }

    fn set_style(&mut self, property: &str, value: &str) {
        self.style.insert(property.to_string(), value.to_string());
        self.writes.push((property.to_string(), value.to_string()));
    }
}

fn transform(tx: f64, ty: f64, width: f64, height: f64, scale: f64) -> Transform {
    Transform {
        tx,
        ty,
        x: 0.0,
        y: 0.0,
        width,
        height,
        scale,
    }
}

// ── Normalization ───────────────────────────────────────────────────────

#[test]
fn element_rect_pairs_offset_size_with_viewport_position() {
    let mut el = MockElement::new(10.0, 20.0, 200.0, 100.0);
    // A scaled element: viewport box differs from the layout box.
    el.bounds = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(el.rect(), Rect::new(10.0, 20.0, 200.0, 100.0));
}

// ── cssTransform ────────────────────────────────────────────────────────

#[test]
fn css_transform_from_identity() {
    let mut el = MockElement::new(0.0, 0.0, 200.0, 100.0);
    css_transform(&transform(-10.0, 25.0, 100.0, 50.0, 0.5), &mut el);
    assert_eq!(el.get("WebkitTransform"), "matrix(0.5,0,0,0.5,-10,25)");
    assert_eq!(el.get("WebkitTransformOrigin"), "0 0");
}

#[test]
fn css_transform_accumulates_translation_and_keeps_skew() {
    let mut el = MockElement::new(0.0, 0.0, 200.0, 100.0)
        .with_style("WebkitTransform", "matrix(2, 0.25, 0.5, 2, 4, 6)");
    css_transform(&transform(1.0, -1.0, 0.0, 0.0, 0.75), &mut el);
    assert_eq!(el.get("WebkitTransform"), "matrix(0.75,0.25,0.5,0.75,5,5)");
}

#[test]
fn css_transform_writes_origin_before_matrix() {
    let mut el = MockElement::new(0.0, 0.0, 10.0, 10.0);
    css_transform(&transform(0.0, 0.0, 10.0, 10.0, 1.0), &mut el);
    let props: Vec<&str> = el.writes.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(props, ["WebkitTransformOrigin", "WebkitTransform"]);
}

// ── cssPosition ─────────────────────────────────────────────────────────

#[test]
fn css_position_switches_static_to_relative() {
    let mut el = MockElement::new(0.0, 0.0, 200.0, 100.0);
    css_position(&transform(-10.0, 25.0, 100.0, 50.0, 0.5), &mut el);
    assert_eq!(el.get("position"), "relative");
    assert_eq!(el.get("left"), "-10px");
    assert_eq!(el.get("top"), "25px");
    assert_eq!(el.get("width"), "100px");
    assert_eq!(el.get("height"), "50px");
}

#[test]
fn css_position_keeps_absolute_and_adds_offsets() {
    let mut el = MockElement::new(0.0, 0.0, 200.0, 100.0)
        .with_style("position", "absolute")
        .with_style("left", "12.5px")
        .with_style("top", "-3px");
    css_position(&transform(2.5, 3.0, 100.0, 50.0, 0.5), &mut el);
    assert_eq!(el.get("position"), "absolute");
    assert_eq!(el.get("left"), "15px");
    assert_eq!(el.get("top"), "0px");
    assert!(!el.writes.iter().any(|(p, _)| p == "position"));
}

// ── cssMargin ───────────────────────────────────────────────────────────

#[test]
fn css_margin_offsets_margins_only() {
    let mut el = MockElement::new(0.0, 0.0, 200.0, 100.0).with_style("marginLeft", "8px");
    css_margin(&transform(-10.0, 25.0, 100.0, 50.0, 0.5), &mut el);
    assert_eq!(el.get("marginLeft"), "-2px");
    assert_eq!(el.get("marginTop"), "25px");
    assert_eq!(el.get("width"), "100px");
    assert_eq!(el.get("height"), "50px");
    assert_eq!(el.get("position"), "static");
    assert_eq!(el.get("left"), "auto");
}

// ── fit() with elements ─────────────────────────────────────────────────

#[test]
fn fit_element_defaults_to_matrix() {
    let mut el = MockElement::new(0.0, 0.0, 200.0, 100.0);
    let frame = MockElement::new(0.0, 0.0, 100.0, 100.0);
    let t = FitOptions::default()
        .fit(Some(Target::Element(&mut el)), Some(Container::Element(&frame)))
        .unwrap();
    assert_eq!(t.scale, 0.5);
    assert_eq!(el.get("WebkitTransform"), "matrix(0.5,0,0,0.5,0,25)");
}

#[test]
fn fit_element_with_position_applier() {
    let mut el = MockElement::new(0.0, 0.0, 200.0, 100.0);
    let frame = Bounds::new(0.0, 0.0, 100.0, 100.0);
    FitOptions::default()
        .applier(Applier::CssPosition)
        .fit(Some(Target::Element(&mut el)), Some((&frame).into()))
        .unwrap();
    assert_eq!(el.get("top"), "25px");
    assert_eq!(el.get("width"), "100px");
    assert!(el.get("WebkitTransform") == "none");
}

#[test]
fn explicit_applier_runs_even_without_apply() {
    let mut el = MockElement::new(0.0, 0.0, 200.0, 100.0);
    let frame = Bounds::new(0.0, 0.0, 100.0, 100.0);
    FitOptions::default()
        .apply(false)
        .applier(Applier::CssMargin)
        .fit(Some(Target::Element(&mut el)), Some((&frame).into()))
        .unwrap();
    assert_eq!(el.get("marginTop"), "25px");
}

#[test]
fn apply_false_leaves_element_untouched() {
    let mut el = MockElement::new(0.0, 0.0, 200.0, 100.0);
    let frame = Bounds::new(0.0, 0.0, 100.0, 100.0);
    FitOptions::default()
        .apply(false)
        .fit(Some(Target::Element(&mut el)), Some((&frame).into()))
        .unwrap();
    assert!(el.writes.is_empty());
}

#[test]
fn missing_container_does_not_touch_element() {
    let mut el = MockElement::new(0.0, 0.0, 200.0, 100.0);
    let err = fit(Some(Target::Element(&mut el)), None, &FitOptions::default());
    assert_eq!(err, Err(FitError::MissingInput));
    assert!(el.writes.is_empty());
}

#[test]
fn rectangle_applier_rejects_element() {
    let mut el = MockElement::new(0.0, 0.0, 200.0, 100.0);
    let frame = Bounds::new(0.0, 0.0, 100.0, 100.0);
    let err = FitOptions::default()
        .applier(Applier::Rectangle)
        .fit(Some(Target::Element(&mut el)), Some((&frame).into()));
    assert_eq!(err, Err(FitError::IncompatibleApplier));
    assert!(el.writes.is_empty());
}

#[test]
fn custom_applier_receives_element() {
    fn mark(t: &Transform, target: &mut Target<'_>) {
        if let Target::Element(el) = target {
            el.set_style("data-scale", &t.scale.to_string());
        }
    }
    let mut el = MockElement::new(0.0, 0.0, 200.0, 100.0);
    let frame = Bounds::new(0.0, 0.0, 100.0, 100.0);
    FitOptions::default()
        .applier(Applier::Custom(mark))
        .fit(Some(Target::Element(&mut el)), Some((&frame).into()))
        .unwrap();
    assert_eq!(el.get("data-scale"), "0.5");
    assert_eq!(el.writes.len(), 1);
}
