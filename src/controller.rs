//! Page controller binding behavior to a document

use crate::config::Config;
use crate::document::{Document, Element};
use crate::errors::{PanelError, Result};
use crate::platform::{Platform, ScrollBehavior};
use crate::schedule::ScheduledUpdate;
use crate::status::{apply_active_status, render_info};

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};
use uuid::Uuid;

/// What happened when a click was dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Whether default navigation was suppressed
    pub default_prevented: bool,

    /// Identifier of the element scrolled into view, if any
    pub scrolled_to: Option<String>,
}

/// Controller owning the navigation bindings and the pending status update
///
/// Created once the document is ready; dropping it (or calling `teardown`)
/// releases the bindings, so hosts and tests control the lifecycle
/// explicitly instead of relying on a global load event.
pub struct PageController {
    config: Config,
    document: Document,
    platform: Arc<dyn Platform>,
    controller_id: String,
    nav_links: Vec<Element>,
    pending_update: Mutex<Option<ScheduledUpdate>>,
}

impl PageController {
    /// Bind the controller to a ready document
    pub async fn initialize(
        document: Document,
        platform: Arc<dyn Platform>,
        config: Config,
    ) -> Result<Self> {
        config.validate().map_err(PanelError::Config)?;

        info!("🚀 DevOps Lab - Site carregado com sucesso!");
        info!("🐳 Container Docker ativo");
        info!("⚡ Servidor web rodando na porta 80");

        let nav_links = document.elements_by_class(&config.nav_link_class).await;
        let controller_id = Uuid::new_v4().to_string();

        info!(
            "Page controller {} bound {} navigation links",
            controller_id,
            nav_links.len()
        );

        Ok(Self {
            config,
            document,
            platform,
            controller_id,
            nav_links,
            pending_update: Mutex::new(None),
        })
    }

    /// Route a click through the navigation bindings
    ///
    /// Clicks on unbound elements pass through untouched. A bound link
    /// always suppresses default navigation; the scroll only happens when
    /// its fragment target resolves to an element.
    pub fn dispatch_click(&self, element: &Element) -> ClickOutcome {
        if !self.nav_links.contains(element) {
            return ClickOutcome {
                default_prevented: false,
                scrolled_to: None,
            };
        }

        let target = element
            .href()
            .and_then(fragment_target)
            .and_then(|id| self.document.element_by_id(id));

        match target {
            Some(target) => {
                self.platform
                    .scroll_into_view(&target, ScrollBehavior::Smooth);
                ClickOutcome {
                    default_prevented: true,
                    scrolled_to: target.id().map(String::from),
                }
            }
            None => {
                debug!(
                    "Navigation target missing for href {:?}, skipping scroll",
                    element.href()
                );
                ClickOutcome {
                    default_prevented: true,
                    scrolled_to: None,
                }
            }
        }
    }

    /// Scroll to the status section and kick off the simulated check
    ///
    /// A still-pending update from an earlier call is cancelled and
    /// replaced, so at most one update is ever outstanding.
    pub async fn show_status(&self) -> Result<()> {
        let section = self
            .document
            .element_by_id(&self.config.status_section_id)
            .ok_or_else(|| PanelError::MissingElement(self.config.status_section_id.clone()))?;

        self.platform
            .scroll_into_view(&section, ScrollBehavior::Smooth);

        let update = self.update_status();

        let mut pending = self.pending_update.lock().await;
        if let Some(previous) = pending.take() {
            if !previous.is_finished() {
                debug!("Replacing pending status update");
                previous.cancel();
            }
        }
        *pending = Some(update);

        Ok(())
    }

    /// Schedule the one-shot status mutation
    ///
    /// The check is simulated: after the configured delay every panel entry
    /// flips to its fixed active value. A missing panel element fails the
    /// task; the failure is logged and surfaced through the join result.
    pub fn update_status(&self) -> ScheduledUpdate {
        let document = self.document.clone();

        ScheduledUpdate::spawn(self.config.update_delay, async move {
            let result = apply_active_status(&document).await;
            if let Err(ref err) = result {
                error!("Status update failed: {}", err);
            }
            result
        })
    }

    /// Present the system-info block through the modal primitive
    pub fn show_info(&self) {
        let info = render_info(self.platform.now());
        self.platform.alert(&info);
    }

    /// Take the pending update, if any, and wait for it to run
    ///
    /// Returns whether an update was pending.
    pub async fn await_pending_update(&self) -> Result<bool> {
        let update = self.pending_update.lock().await.take();
        match update {
            Some(update) => update.join().await.map(|_| true),
            None => Ok(false),
        }
    }

    /// Release the navigation bindings and cancel any pending update
    pub async fn teardown(&mut self) {
        if let Some(update) = self.pending_update.lock().await.take() {
            update.cancel();
        }
        self.nav_links.clear();

        info!("Page controller {} torn down", self.controller_id);
    }

    pub fn controller_id(&self) -> &str {
        &self.controller_id
    }

    pub fn nav_link_count(&self) -> usize {
        self.nav_links.len()
    }
}

/// Extract the fragment identifier from an href, if it names one
fn fragment_target(href: &str) -> Option<&str> {
    href.split_once('#')
        .map(|(_, fragment)| fragment)
        .filter(|fragment| !fragment.is_empty())
}
