//! Status panel entries and the system-info summary

use crate::document::Document;
use crate::errors::{PanelError, Result};
use chrono::NaiveDateTime;
use tracing::debug;

/// Class applied to a status entry once the simulated check completes
pub const ACTIVE_CLASS: &str = "status-value active";

/// Timestamp shape matching pt-BR locale formatting
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// The three entries of the status panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusField {
    Container,
    Server,
    Environment,
}

impl StatusField {
    pub const ALL: [StatusField; 3] = [
        StatusField::Container,
        StatusField::Server,
        StatusField::Environment,
    ];

    /// Identifier of the element displaying this entry
    pub fn element_id(&self) -> &'static str {
        match self {
            StatusField::Container => "container-status",
            StatusField::Server => "server-status",
            StatusField::Environment => "environment",
        }
    }

    /// Text shown once the entry is active
    pub fn active_text(&self) -> &'static str {
        match self {
            StatusField::Container => "Docker Ativo",
            StatusField::Server => "Nginx Online",
            StatusField::Environment => "AWS EC2 - Rodando",
        }
    }
}

impl std::fmt::Display for StatusField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusField::Container => write!(f, "container"),
            StatusField::Server => write!(f, "server"),
            StatusField::Environment => write!(f, "environment"),
        }
    }
}

/// Flip every panel entry to its active text and class
///
/// Entries are written in order; a missing element fails the update at that
/// entry and earlier writes stand, so the error names the absent id.
pub async fn apply_active_status(document: &Document) -> Result<()> {
    for field in StatusField::ALL {
        let element = document
            .element_by_id(field.element_id())
            .ok_or_else(|| PanelError::MissingElement(field.element_id().to_string()))?;

        element.set_text_content(field.active_text()).await;
        element.set_class_name(ACTIVE_CLASS).await;
        debug!("Marked {} status active", field);
    }

    Ok(())
}

/// Render the system-info block shown by the info action
pub fn render_info(now: NaiveDateTime) -> String {
    format!(
        "\n🐳 Container Docker: Ativo\n\
         ⚡ Servidor: Nginx\n\
         🌐 Porta: 80\n\
         📅 Deploy: {}\n\
         ☁️ Cloud: AWS EC2\n\
         🔄 Status: Online\n",
        now.format(TIMESTAMP_FORMAT)
    )
}
