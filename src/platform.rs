//! Platform services consumed by the page controller
//!
//! Scrolling, the modal alert, and the wall clock are host primitives, so
//! they sit behind a trait. The host implementation logs and prints; tests
//! swap in a recording double with a fixed clock.

use crate::document::Element;
use chrono::{Local, NaiveDateTime};
use tracing::info;

/// How a scroll request should be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Auto,
}

/// Host services the controller depends on
pub trait Platform: Send + Sync {
    /// Bring an element into view
    fn scroll_into_view(&self, element: &Element, behavior: ScrollBehavior);

    /// Present a blocking modal dialog with the given text
    fn alert(&self, message: &str);

    /// Current wall-clock time
    fn now(&self) -> NaiveDateTime;
}

/// Platform backed by the real host: scrolls are logged, alerts go to
/// stdout, time comes from the local clock
#[derive(Debug, Default)]
pub struct HostPlatform;

impl HostPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for HostPlatform {
    fn scroll_into_view(&self, element: &Element, behavior: ScrollBehavior) {
        info!(
            "Scrolling to element #{} ({:?})",
            element.id().unwrap_or("<anonymous>"),
            behavior
        );
    }

    fn alert(&self, message: &str) {
        println!("{}", message);
    }

    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
