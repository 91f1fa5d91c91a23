//! Icon records as served by the icon search API, plus a loader for
//! JSON responses and standalone SVG documents.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{PreviewError, Result};

/// Side length assumed for a view box dimension that is missing or unusable
pub const DEFAULT_SPACE_SIZE: f64 = 24.0;

lazy_static! {
    static ref SVG_OPEN_RE: Regex = Regex::new(r"(?is)<svg\b([^>]*)>").unwrap();
    static ref SVG_CLOSE_RE: Regex = Regex::new(r"(?i)</svg\s*>").unwrap();
    static ref VIEW_BOX_RE: Regex =
        Regex::new(r#"(?i)\bviewBox\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
}

/// Icon stroke width; the API emits it as a string or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrokeWidth {
    Number(f64),
    Text(String),
}

/// An icon record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub normalized_name: Option<String>,
    /// Icon set the record came from (`lucide`, `phosphor`, ...)
    #[serde(default)]
    pub source_id: Option<String>,
    /// Raw `viewBox` declaration, e.g. `"0 0 24 24"`
    pub view_box: String,
    /// Inner SVG markup
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub stroke_width: Option<StrokeWidth>,
}

impl Icon {
    /// Minimal icon from a view box and markup
    pub fn new(view_box: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            view_box: view_box.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Builder-style name setter
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parsed view box
    pub fn view_box(&self) -> ViewBox {
        ViewBox::parse(&self.view_box)
    }

    /// Best human-readable name for headers and filtering
    pub fn display_name(&self) -> &str {
        self.normalized_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.id.as_deref())
            .unwrap_or("icon")
    }
}

/// Coordinate space primitives are authored in
///
/// `min_x`/`min_y` are kept for completeness but the rasterizer does not
/// offset by them; icon primitives are assumed to start at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: DEFAULT_SPACE_SIZE,
            height: DEFAULT_SPACE_SIZE,
        }
    }
}

impl ViewBox {
    /// Parse `"minX minY width height"` (whitespace and/or comma separated).
    ///
    /// Each missing, unparseable, or non-positive component falls back on
    /// its own: offsets to 0, dimensions to [`DEFAULT_SPACE_SIZE`].
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>().ok().filter(|n| n.is_finite()));

        let mut next = || parts.next().flatten();
        let min_x = next().unwrap_or(0.0);
        let min_y = next().unwrap_or(0.0);
        let width = next().filter(|w| *w > 0.0).unwrap_or(DEFAULT_SPACE_SIZE);
        let height = next().filter(|h| *h > 0.0).unwrap_or(DEFAULT_SPACE_SIZE);

        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

/// Response body of the icon search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub icons: Vec<Icon>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub search_type: Option<String>,
    #[serde(default)]
    pub expanded_query: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IconPayload {
    Response(SearchResponse),
    List(Vec<Icon>),
    Single(Box<Icon>),
}

/// Load icons from a JSON payload or a standalone SVG document.
///
/// `fallback_name` names an SVG icon, which carries no name of its own.
pub fn load_icons(input: &str, fallback_name: Option<&str>) -> Result<Vec<Icon>> {
    let trimmed = input.trim_start_matches('\u{feff}').trim_start();
    if is_markup(trimmed) {
        let icon = parse_svg(trimmed)?;
        return Ok(vec![match fallback_name {
            Some(name) => icon.with_name(name),
            None => icon,
        }]);
    }

    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return Err(PreviewError::invalid_input(
            "expected a JSON icon record, a JSON array, a search response, or an <svg> document",
        ));
    }

    let payload: IconPayload = serde_json::from_str(trimmed)?;
    let icons = match payload {
        IconPayload::Response(response) => {
            tracing::debug!(
                "Loaded search response with {} icons (has_more: {})",
                response.icons.len(),
                response.has_more
            );
            response.icons
        }
        IconPayload::List(icons) => icons,
        IconPayload::Single(icon) => vec![*icon],
    };
    Ok(icons)
}

/// True for input that opens like an SVG/XML document (any case)
fn is_markup(input: &str) -> bool {
    ["<svg", "<?xml", "<!--"].iter().any(|prefix| {
        input
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Split an `<svg>` document into view box and inner markup
pub fn parse_svg(document: &str) -> Result<Icon> {
    let open = SVG_OPEN_RE
        .captures(document)
        .ok_or_else(|| PreviewError::invalid_input("no <svg> element found"))?;
    let whole = open.get(0).map_or(0..0, |m| m.range());
    let attrs = open.get(1).map_or("", |m| m.as_str());

    let view_box = VIEW_BOX_RE
        .captures(attrs)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let rest = &document[whole.end..];
    // A self-closing <svg/> has no content
    let content = if attrs.trim_end().ends_with('/') {
        ""
    } else {
        SVG_CLOSE_RE
            .find(rest)
            .map_or(rest, |close| &rest[..close.start()])
    };

    Ok(Icon::new(view_box, content.trim()))
}
