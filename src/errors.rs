//! Error types for the page controller

use std::fmt;

pub type Result<T> = std::result::Result<T, PanelError>;

#[derive(Debug)]
pub enum PanelError {
    /// A required document element is absent
    MissingElement(String),

    /// Configuration error
    Config(String),

    /// A scheduled update was cancelled before it ran
    Cancelled,

    /// Generic error with message
    Other(String),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::MissingElement(id) => write!(f, "Missing element: #{}", id),
            PanelError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PanelError::Cancelled => write!(f, "Scheduled update cancelled"),
            PanelError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for PanelError {}
