//! mailman - entry point for the digest mailer
//!
//! Wires the concrete providers into a [`DigestService`], runs one digest
//! pass, and reports the summary. Scheduling (cron or otherwise) is up to
//! whatever invokes this binary.

use std::path::Path;

use anyhow::Result;
use mailman::config::Settings;
use mailman::providers::articles::SpaceflightNewsSource;
use mailman::providers::delivery::SmtpDeliverer;
use mailman::providers::subscribers::JsonFileDirectory;
use mailman::DigestService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting mailman");

    let settings = match std::env::var_os("MAILMAN_CONFIG") {
        Some(path) => Settings::load(Path::new(&path))?,
        None => Settings::default(),
    };

    let service = DigestService::new(
        SpaceflightNewsSource::new(&settings.source.endpoint),
        JsonFileDirectory::new(&settings.subscribers.path),
        SmtpDeliverer::new(&settings.smtp.host, settings.smtp.port, &settings.smtp.subject),
        &settings.smtp.sender,
    );

    match service.run().await {
        Ok(summary) => {
            tracing::info!("digest run complete: {summary}");
            println!("{summary}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("digest run failed: {e}");
            std::process::exit(1);
        }
    }
}
