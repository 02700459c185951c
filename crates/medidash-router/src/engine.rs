//! TOML-driven route table.
//!
//! `TomlRouteTable` loads a `RouteConfig` from a TOML string or file and
//! implements the `RouteResolver` trait from medidash-core.
//!
//! Resolution algorithm:
//!
//! 1. Normalize the path (drop query/fragment, trailing slash).
//! 2. Iterate rules in declaration order; take the first whose pattern
//!    matches.
//! 3. A `protected` rule with neither an identity nor the guest flag on the
//!    request → `Redirect` to `login_path`. Otherwise → `Render` the rule's
//!    view with the captured parameters.
//! 4. No rule matched → `Render(NotFound)`. The not-found view is public.

use std::path::Path;

use tracing::{debug, info};

use medidash_contracts::{
    error::{MedidashError, MedidashResult},
    navigation::{Navigation, NavigationRequest, View},
};
use medidash_core::traits::RouteResolver;

use crate::rule::{normalize_path, split_segments, Access, RouteConfig};

/// The route table compiled into the dashboard.
pub const BUILTIN_ROUTES: &str = include_str!("../routes/dashboard.toml");

/// A `RouteResolver` implementation that reads routes from a TOML document.
///
/// ```rust,ignore
/// use medidash_router::TomlRouteTable;
///
/// let routes = TomlRouteTable::builtin()?;
/// let nav = routes.resolve(&session.navigation_request("/patients/4"))?;
/// ```
#[derive(Debug)]
pub struct TomlRouteTable {
    config: RouteConfig,
}

impl TomlRouteTable {
    /// Parse `s` as TOML and build a route table.
    ///
    /// Returns `MedidashError::RouteTable` if the TOML is malformed, a
    /// pattern is not absolute, or `login_path` does not lead to a public
    /// route (which would redirect forever).
    pub fn from_toml_str(s: &str) -> MedidashResult<Self> {
        let config: RouteConfig = toml::from_str(s).map_err(|e| MedidashError::RouteTable {
            reason: format!("failed to parse route TOML: {}", e),
        })?;

        for rule in &config.routes {
            if rule.pattern != "*" && !rule.pattern.starts_with('/') {
                return Err(MedidashError::RouteTable {
                    reason: format!(
                        "route '{}' has pattern '{}'; patterns must start with '/' or be '*'",
                        rule.id, rule.pattern
                    ),
                });
            }
        }

        let table = Self { config };
        let login = normalize_path(&table.config.login_path);
        let segments = split_segments(&login);
        let login_rule = table.config.routes.iter().find(|r| r.matches(&segments).is_some());
        match login_rule {
            Some(rule) if rule.access == Access::Public => {}
            Some(rule) => {
                return Err(MedidashError::RouteTable {
                    reason: format!(
                        "login path '{}' resolves to protected route '{}'",
                        table.config.login_path, rule.id
                    ),
                })
            }
            None => {
                return Err(MedidashError::RouteTable {
                    reason: format!("login path '{}' matches no route", table.config.login_path),
                })
            }
        }

        debug!(routes = table.config.routes.len(), login_path = %login, "route table loaded");
        Ok(table)
    }

    /// Read the file at `path` and parse it as a route table.
    pub fn from_file(path: &Path) -> MedidashResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MedidashError::RouteTable {
            reason: format!("failed to read route file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The built-in table.
    pub fn builtin() -> MedidashResult<Self> {
        Self::from_toml_str(BUILTIN_ROUTES)
    }

    /// `from_file` when an override is configured, `builtin` otherwise.
    pub fn load(path: Option<&Path>) -> MedidashResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Self::builtin(),
        }
    }
}

impl RouteResolver for TomlRouteTable {
    fn login_path(&self) -> &str {
        &self.config.login_path
    }

    fn resolve(&self, request: &NavigationRequest) -> MedidashResult<Navigation> {
        let path = normalize_path(&request.path);
        let segments = split_segments(&path);

        for rule in &self.config.routes {
            let Some(params) = rule.matches(&segments) else {
                continue;
            };

            debug!(rule_id = %rule.id, path = %path, "route matched");

            if rule.access == Access::Protected && !request.may_enter_protected() {
                info!(
                    rule_id = %rule.id,
                    path = %path,
                    to = %self.config.login_path,
                    "gated route; redirecting"
                );
                return Ok(Navigation::Redirect {
                    to: self.config.login_path.clone(),
                });
            }

            return Ok(Navigation::Render {
                view: rule.view,
                params,
            });
        }

        debug!(path = %path, "no route matched; rendering not-found");
        Ok(Navigation::render(View::NotFound))
    }
}
