use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use kunai_app::contact::Contact;
use kunai_app::render::RenderOptions;
use kunai_core::config::load_config;
use kunai_core::constants::{PRODUCT_NAME, PRODUCT_VERSION};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

const USAGE: &str = "usage: kunai [contact.json | -]";

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    // stdout carries the vCard, so logs go to stderr.
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let mut args = std::env::args_os().skip(1);
    let path = args.next().map(PathBuf::from);
    let wants_help = path
        .as_deref()
        .is_some_and(|p| p.as_os_str() == "-h" || p.as_os_str() == "--help");
    if wants_help || args.next().is_some() {
        eprintln!("{PRODUCT_NAME} {PRODUCT_VERSION}\n{USAGE}");
        return Ok(());
    }

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let contact = Contact::read(path.as_deref()).context("Failed to load contact")?;
    let options = RenderOptions::from_config(&config.card, Utc::now())?;

    let card = contact.to_vcard(&options);
    print!("{}\r\n", card.build());

    Ok(())
}
