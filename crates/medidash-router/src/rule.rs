//! Route rule types and the route table schema.
//!
//! A `RouteConfig` is deserialized from TOML and holds an ordered list of
//! `RouteRule`s. Rules are matched in declaration order; the first rule whose
//! pattern matches the path wins.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use medidash_contracts::navigation::View;

/// Who may see a route.
///
/// ```toml
/// access = "public"
/// access = "protected"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
    /// Anyone, signed in or not.
    Public,
    /// A signed-in identity or guest mode is required.
    Protected,
}

/// A single route loaded from TOML.
///
/// Pattern syntax, segment by segment:
/// - a literal (`patients`) matches the same segment, ignoring ASCII case;
/// - `:name` matches any one non-empty segment and captures it as `name`;
/// - `*` as the last segment matches the rest of the path (including
///   nothing), so a bare `"*"` is a catch-all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRule {
    /// Stable identifier used in logs.
    pub id: String,

    /// Human-readable note on what the route shows.
    #[serde(default)]
    pub description: String,

    /// Path pattern, e.g. `/patients/:id`.
    pub pattern: String,

    /// The view rendered when this rule matches and access is granted.
    pub view: View,

    pub access: Access,
}

impl RouteRule {
    /// Match `segments` (a normalized path split on `/`, without empty
    /// segments) against this rule's pattern.
    ///
    /// Returns the captured parameters on a match.
    pub fn matches(&self, segments: &[&str]) -> Option<BTreeMap<String, String>> {
        let pattern: Vec<&str> = split_segments(&self.pattern);
        let mut params = BTreeMap::new();

        for (i, part) in pattern.iter().enumerate() {
            if *part == "*" {
                return Some(params);
            }

            let segment = segments.get(i)?;
            if let Some(name) = part.strip_prefix(':') {
                params.insert(name.to_string(), (*segment).to_string());
            } else if !part.eq_ignore_ascii_case(segment) {
                return None;
            }
        }

        (pattern.len() == segments.len()).then_some(params)
    }
}

/// The top-level structure deserialized from a TOML route table.
///
/// ```toml
/// login_path = "/login"
///
/// [[routes]]
/// id = "patients"
/// pattern = "/patients"
/// view = "patients"
/// access = "protected"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Where gated requests are redirected.
    pub login_path: String,

    /// Ordered list of routes. First match wins.
    pub routes: Vec<RouteRule>,
}

/// Split a path or pattern into its non-empty segments.
pub(crate) fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Reduce a requested path to its routable form: query string and fragment
/// dropped, leading slash ensured, trailing slash removed (except for `/`).
pub fn normalize_path(path: &str) -> String {
    let end = path
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(path.len());
    let segments = split_segments(&path[..end]);
    format!("/{}", segments.join("/"))
}
