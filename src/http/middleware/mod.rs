//! Request pipeline stages.
//!
//! # Stage order (outermost first)
//! ```text
//! request id / trace            (ambient)
//! HSTS header                   (production only)
//! panic recovery
//! https_redirect.rs             (insecure → 307)
//! [static files]                (tower-http ServeDir, wired in server.rs)
//! resolve.rs                    (route pattern → RouteValues extension)
//! authorize.rs                  (policy hook, deny short-circuits)
//! dispatch                      (controller/action lookup)
//! ```
//!
//! The order is fixed at startup by layer composition in
//! [`crate::http::server`]; nothing re-orders stages at request time.

pub mod authorize;
pub mod https_redirect;
pub mod resolve;

pub use authorize::{AllowAll, AuthorizationPolicy, Decision};
pub use https_redirect::SecureConnection;
