//! Controller stubs.
//!
//! The skeleton contains no business logic; controllers exist only so the
//! default route has somewhere to land. Adding a controller means adding a
//! module here and calling its `register` from [`register_all`].

pub mod home;

use crate::routing::ControllerRegistry;

/// Build the registry with every controller the application ships.
pub fn register_all() -> ControllerRegistry {
    let mut registry = ControllerRegistry::new();
    home::register(&mut registry);
    registry
}
