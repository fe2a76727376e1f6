//! Application services — use-case implementations.
//!
//! Services take domain values and settings and produce plans that adapters
//! render, keeping this layer decoupled from the browser.

pub mod showcase;
