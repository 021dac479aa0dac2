//! Splits a lens body into titled sections on `###` heading markers.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub body: String,
}

fn heading_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"###\s+").expect("static heading regex is valid"))
}

/// Derives the ordered sections of a lens body.
///
/// Segments that are blank after splitting are dropped. For every other
/// segment the first line is the title and the remaining lines are the body,
/// both trimmed. Text before the first marker (or a body with no markers at
/// all) still forms a section whose title is its first line.
pub fn split_sections(content: &str) -> Vec<Section> {
    heading_marker()
        .split(content)
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| {
            let (title, body) = segment.split_once('\n').unwrap_or((segment, ""));
            Section {
                title: title.trim().to_string(),
                body: body.trim().to_string(),
            }
        })
        .collect()
}
