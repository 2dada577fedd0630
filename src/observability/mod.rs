//! Observability subsystem.
//!
//! Structured logging only; every request additionally carries an
//! `x-request-id` set by the pipeline's outermost layer.

pub mod logging;
