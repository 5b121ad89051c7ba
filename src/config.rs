//! Configuration management for the page controller

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Class name marking navigation links
    pub nav_link_class: String,

    /// Identifier of the status section element
    pub status_section_id: String,

    /// Delay before the simulated status check completes
    pub update_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nav_link_class: "nav-link".to_string(),
            status_section_id: "status".to_string(),
            update_delay: Duration::from_millis(1000),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(nav_link_class) = env::var("PANEL_NAV_LINK_CLASS") {
            config.nav_link_class = nav_link_class;
        }

        if let Ok(status_section_id) = env::var("PANEL_STATUS_SECTION_ID") {
            config.status_section_id = status_section_id;
        }

        if let Ok(delay) = env::var("PANEL_UPDATE_DELAY_MS") {
            if let Ok(ms) = delay.parse::<u64>() {
                config.update_delay = Duration::from_millis(ms);
            }
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.nav_link_class.is_empty() {
            return Err("nav_link_class cannot be empty".to_string());
        }

        if self.status_section_id.is_empty() {
            return Err("status_section_id cannot be empty".to_string());
        }

        if self.update_delay.is_zero() {
            return Err("update_delay must be greater than 0".to_string());
        }

        Ok(())
    }
}
