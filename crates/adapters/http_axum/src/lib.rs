//! # servicios-adapter-http-axum
//!
//! HTTP adapter — hosts the compiled front-end bundle.
//!
//! ## Responsibilities
//! - Serve static assets (`index.html`, JS glue, WASM, CSS) from a bundle
//!   directory
//! - Fall back to `index.html` for unknown paths so in-page anchors such as
//!   `/#servicios` always land on the page
//! - Expose `/health` for liveness probes
//!
//! ## Dependency rule
//! Contains no domain logic. The bundle itself is built from the Leptos
//! adapter; this crate only ships bytes.

pub mod router;
pub mod state;
