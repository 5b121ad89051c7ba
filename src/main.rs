//! DevOps Lab Status Panel Demo Binary

use clap::Parser;
use devlab_panel::{
    Config, Document, Element, HostPlatform, PageController, Result, StatusField,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "devlab_panel", about = "DevOps Lab status panel demo")]
struct Cli {
    /// Delay before the simulated status check completes, in milliseconds
    #[arg(long, env = "PANEL_UPDATE_DELAY_MS")]
    update_delay_ms: Option<u64>,

    /// Skip the system-info modal at the end of the demo
    #[arg(long)]
    skip_info: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    initialize_tracing();

    info!("Starting DevOps Lab panel demo v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(ms) = cli.update_delay_ms {
        config.update_delay = Duration::from_millis(ms);
    }

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    info!(
        "Panel configuration - Nav class: {}, Status section: {}, Update delay: {}ms",
        config.nav_link_class,
        config.status_section_id,
        config.update_delay.as_millis()
    );

    let update_delay = config.update_delay;
    let document = demo_page();

    let mut controller =
        PageController::initialize(document.clone(), Arc::new(HostPlatform::new()), config)
            .await?;

    // Visitor clicks the status navigation link, then triggers the check
    if let Some(status_link) = document.element_by_id("nav-status") {
        let outcome = controller.dispatch_click(&status_link);
        info!(
            "Navigation click - default prevented: {}, scrolled to: {:?}",
            outcome.default_prevented, outcome.scrolled_to
        );
    }

    if let Err(e) = controller.show_status().await {
        error!("Status check failed: {}", e);
        std::process::exit(1);
    }

    sleep(update_delay + Duration::from_millis(100)).await;
    controller.await_pending_update().await?;

    for field in StatusField::ALL {
        if let Some(element) = document.element_by_id(field.element_id()) {
            info!("Panel entry {}: {}", field, element.text_content().await);
        }
    }

    if !cli.skip_info {
        controller.show_info();
    }

    controller.teardown().await;
    Ok(())
}

/// Assemble the demo page: navigation bar, sections, and the status panel
fn demo_page() -> Document {
    let mut builder = Document::builder()
        .element(
            Element::new()
                .with_id("nav-home")
                .with_class("nav-link")
                .with_attribute("href", "#home")
                .with_text("Home"),
        )
        .element(
            Element::new()
                .with_id("nav-status")
                .with_class("nav-link")
                .with_attribute("href", "#status")
                .with_text("Status"),
        )
        .element(
            Element::new()
                .with_id("nav-about")
                .with_class("nav-link")
                .with_attribute("href", "#about")
                .with_text("Sobre"),
        )
        .element(Element::new().with_id("home").with_text("DevOps Lab"))
        .element(Element::new().with_id("status").with_text("Status do Sistema"))
        .element(Element::new().with_id("about").with_text("Sobre o projeto"));

    for field in StatusField::ALL {
        builder = builder.element(
            Element::new()
                .with_id(field.element_id())
                .with_class("status-value")
                .with_text("Verificando..."),
        );
    }

    builder.build()
}

/// Initialize structured logging
fn initialize_tracing() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .json();

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))
        .unwrap();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
