//! Markup scanner: pulls path and circle primitives out of SVG fragments
//!
//! This is not an XML parser. It looks for `<path ...>` and `<circle ...>`
//! tags and reads the attributes it needs; everything else is inert.
//! Path data is read as a flat list of numbers taken in x/y alternation,
//! with no knowledge of which command produced them.

use lazy_static::lazy_static;
use regex::Regex;

use super::shapes::{Point, Primitive};

lazy_static! {
    /// `<path ...>` and `<circle ...>` tags, capturing the element name and attribute text
    static ref TAG_RE: Regex = Regex::new(r"(?i)<(path|circle)\b([^>]*)>").unwrap();

    /// `name="value"` or `name='value'`
    static ref ATTR_RE: Regex =
        Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();

    /// A decimal number as it appears in SVG path data (`-1.5`, `.5`, `2e-3`)
    static ref NUMBER_RE: Regex =
        Regex::new(r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?").unwrap();
}

/// Scan markup for every recognized primitive, in document order
pub fn scan(markup: &str) -> Vec<Primitive> {
    TAG_RE
        .captures_iter(markup)
        .filter_map(|caps| {
            let attrs = caps.get(2).map_or("", |m| m.as_str());
            let primitive = if caps[1].eq_ignore_ascii_case("path") {
                path_primitive(attrs)
            } else {
                circle_primitive(attrs)
            };
            if primitive.is_none() {
                tracing::trace!("Skipping unusable <{}> fragment", &caps[1]);
            }
            primitive
        })
        .collect()
}

/// Look up an attribute value in a tag's attribute text
fn attribute<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    ATTR_RE.captures_iter(attrs).find_map(|caps| {
        if &caps[1] == name {
            caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str())
        } else {
            None
        }
    })
}

/// All finite numbers in a string, in order
pub fn numbers(data: &str) -> Vec<f64> {
    NUMBER_RE
        .find_iter(data)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .collect()
}

/// Pair up path-data numbers as `(x, y)`; a trailing unpaired value is dropped
pub fn path_points(data: &str) -> Vec<Point> {
    numbers(data)
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect()
}

/// Number at the start of an attribute value (`"12"`, `" 12px"`)
fn leading_number(value: &str) -> Option<f64> {
    let value = value.trim_start();
    NUMBER_RE
        .find(value)
        .filter(|m| m.start() == 0)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

fn path_primitive(attrs: &str) -> Option<Primitive> {
    let data = attribute(attrs, "d")?;
    let points = path_points(data);
    (!points.is_empty()).then_some(Primitive::Path(points))
}

fn circle_primitive(attrs: &str) -> Option<Primitive> {
    let cx = leading_number(attribute(attrs, "cx")?)?;
    let cy = leading_number(attribute(attrs, "cy")?)?;
    let radius = leading_number(attribute(attrs, "r")?)?;
    // A negative radius is an SVG error and renders nothing
    if radius < 0.0 {
        return None;
    }
    Some(Primitive::Circle {
        center: Point::new(cx, cy),
        radius,
    })
}
