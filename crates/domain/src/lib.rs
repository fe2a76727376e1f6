//! # servicios-domain
//!
//! Pure domain model for the "servicios" marketing section.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, site configuration
//! - Define the fixed **service catalogue** and its **icons**
//! - Define the **section copy** and the **contact link**
//! - Define the **visibility latch** (`RevealTracker`), thresholds and the
//!   stagger delay
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! Timers and viewport observers are expressed as traits in the `app`
//! crate (ports).

pub mod config;
pub mod error;

pub mod contact;
pub mod icon;
pub mod section;
pub mod service;
pub mod visibility;
