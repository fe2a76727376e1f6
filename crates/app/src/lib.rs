//! # servicios-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Scheduler` — cancellable one-shot delayed tasks
//!   - `ViewportObserver` — intersection observation of one element
//! - Provide the **reveal controller** that turns viewport events into a
//!   one-shot visibility latch with a stagger delay
//! - Provide the **showcase planner** that assigns reveal plans to the
//!   service catalogue
//!
//! ## Dependency rule
//! Depends on `servicios-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod reveal;
pub mod services;
