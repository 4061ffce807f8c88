//! Shared setup for the command-line apps: logging and store wiring from
//! configuration.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use mindcare_core::config::Config;
use mindcare_dialog::DialogRouter;
use mindcare_store::{JsonlAppointmentStore, JsonlFaqStore};

pub type FileRouter = DialogRouter<JsonlFaqStore, JsonlAppointmentStore>;

/// Logs go to stderr so stdout carries only the reply. `RUST_LOG` wins over
/// the configured filter.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn open_router(config: &Config) -> anyhow::Result<FileRouter> {
    let faq_path = config.faq_path().context("resolve data.faq_path")?;
    let appointments_path = config.appointments_path().context("resolve data.appointments_path")?;
    tracing::debug!(faq = %faq_path.display(), appointments = %appointments_path.display(), "stores configured");
    Ok(DialogRouter::new(JsonlFaqStore::new(faq_path), JsonlAppointmentStore::new(appointments_path)))
}

/// Load config, start logging and wire the stores.
pub fn bootstrap() -> anyhow::Result<FileRouter> {
    let config = Config::load().context("load configuration")?;
    let settings = config.settings()?;
    init_tracing(&settings.logging.filter);
    open_router(&config)
}
