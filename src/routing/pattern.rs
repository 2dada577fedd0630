//! The default route pattern: `{controller}/{action}/{id?}`.
//!
//! # Responsibilities
//! - Resolve a request path into controller/action/id values
//! - Fill missing segments with the pattern defaults (Home, Index)
//! - Reject paths with more segments than the pattern has
//!
//! # Design Decisions
//! - Resolution is a pure function over the path, independent of the
//!   request method or headers
//! - Segments are taken verbatim (no percent-decoding)
//! - Empty inner segments fall back to the segment default

/// Default controller when the path names none.
pub const DEFAULT_CONTROLLER: &str = "Home";

/// Default action when the path names none.
pub const DEFAULT_ACTION: &str = "Index";

/// Values resolved from a request path against the default route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteValues {
    pub controller: String,
    pub action: String,
    pub id: Option<String>,
}

impl RouteValues {
    /// Resolve a request path.
    ///
    /// Returns `None` when the path has more segments than the pattern,
    /// which the dispatcher surfaces as a 404.
    pub fn resolve(path: &str) -> Option<RouteValues> {
        // Strip only the leading slash; inner empty segments still count
        // and fall back to their defaults below.
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

        let mut segments = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect::<Vec<_>>()
        };

        if segments.len() > 3 {
            return None;
        }
        segments.resize(3, "");

        let pick = |segment: &str, default: &str| {
            if segment.is_empty() {
                default.to_string()
            } else {
                segment.to_string()
            }
        };

        Some(RouteValues {
            controller: pick(segments[0], DEFAULT_CONTROLLER),
            action: pick(segments[1], DEFAULT_ACTION),
            id: (!segments[2].is_empty()).then(|| segments[2].to_string()),
        })
    }
}

impl std::fmt::Display for RouteValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.controller, self.action)?;
        if let Some(id) = &self.id {
            write!(f, "/{}", id)?;
        }
        Ok(())
    }
}
