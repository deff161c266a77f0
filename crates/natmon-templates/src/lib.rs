//! Static HTML page templates with literal token replacement
//!
//! Pages are complete HTML documents embedded at compile time. The routing
//! layer supplies computed values only; everything markup-shaped lives here.

use std::fmt::Write as _;

use natmon_core::{Dimension, Key, Monument, TimelinePoint};

/// A page template with `{{token}}` placeholders
pub struct Template {
    name: &'static str,
    body: &'static str,
}

/// Front page with the full-dataset timeline chart
pub const INDEX: Template = Template {
    name: "index",
    body: include_str!("../assets/index.html"),
};

/// Key list for one dimension
pub const KEY_LIST: Template = Template {
    name: "key_list",
    body: include_str!("../assets/key_list.html"),
};

/// Detail page: record table, prev/next pager and chart
pub const DETAIL: Template = Template {
    name: "detail",
    body: include_str!("../assets/detail.html"),
};

/// 404 page
pub const NOT_FOUND: Template = Template {
    name: "not_found",
    body: include_str!("../assets/not_found.html"),
};

impl Template {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Substitute each `(token, value)` pair into the page body
    ///
    /// Replacement is literal: tokens not named in `vars` are left in place.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut page = self.body.to_string();
        for (token, value) in vars {
            page = page.replace(&format!("{{{{{token}}}}}"), value);
        }
        page
    }
}

/// Escape text for inclusion in HTML element or attribute content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a single path segment (RFC 3986 unreserved set kept as-is)
pub fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Href for a key's detail page
pub fn key_href(dimension: Dimension, key: &Key) -> String {
    format!(
        "/{}/{}",
        dimension.as_str(),
        encode_path_segment(&key.to_string())
    )
}

/// Render the `<li>` links for a dimension's key list page
pub fn link_list(dimension: Dimension, keys: &[Key]) -> String {
    let mut out = String::new();
    for key in keys {
        let _ = writeln!(
            out,
            "    <li><a href=\"{}\">{}</a></li>",
            key_href(dimension, key),
            escape_html(&key.to_string())
        );
    }
    out
}

/// Render the `<tr>` rows of the monuments table
pub fn monument_table(records: &[Monument]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"num\">{}</td></tr>",
            escape_html(&record.name),
            escape_html(&record.president),
            escape_html(&record.states),
            escape_html(&record.agency),
            escape_html(&display_date(record)),
            format_acres(record.acres),
        );
    }
    out
}

/// Human-readable proclamation date: "9/24/1906", "1906", or "unknown"
pub fn display_date(record: &Monument) -> String {
    match (record.date.trim(), record.year) {
        (_, 0) => "unknown".to_string(),
        ("", year) => year.to_string(),
        (date, year) => format!("{date}/{year}"),
    }
}

fn format_acres(acres: f64) -> String {
    if acres <= 0.0 {
        "-".to_string()
    } else if acres.fract() == 0.0 {
        format!("{acres:.0}")
    } else {
        format!("{acres:.2}")
    }
}

/// Serialize chart labels and values for the inline script block
pub fn chart_series(points: &[TimelinePoint]) -> (String, String) {
    let labels: Vec<String> = points.iter().map(|p| p.year.to_string()).collect();
    let values: Vec<usize> = points.iter().map(|p| p.total).collect();
    (
        serde_json::to_string(&labels).unwrap_or_else(|_| "[]".to_string()),
        serde_json::to_string(&values).unwrap_or_else(|_| "[]".to_string()),
    )
}
