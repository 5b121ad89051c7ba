//! DevOps Lab Page Controller Library
//!
//! This library reimplements the "DevOps Lab" demo page behavior: smooth
//! navigation-link scrolling, a simulated status check that marks the panel
//! active after a fixed delay, and a system-info modal. The document and the
//! platform primitives are modeled in-crate so hosts and tests drive them
//! explicitly.

pub mod config;
pub mod controller;
pub mod document;
pub mod errors;
pub mod platform;
pub mod schedule;
pub mod status;

pub use config::Config;
pub use controller::{ClickOutcome, PageController};
pub use document::{Document, DocumentBuilder, Element};
pub use errors::{PanelError, Result};
pub use platform::{HostPlatform, Platform, ScrollBehavior};
pub use schedule::ScheduledUpdate;
pub use status::StatusField;
