//! rota-runner: one scheduled invocation of the duty rotation.
//!
//! Usage:
//!   rota-runner            # no-op outside the trigger window
//!   rota-runner --force    # run regardless of the window
//!
//! All behavior is configured through the environment; see
//! `RotaConfig::from_env` for the recognized keys.

use anyhow::Result;
use rota_core::{
    config::RotaConfig,
    history::HistoryStore,
    rng::RngBank,
    run,
    schedule,
    sink::{LogSink, MessageSink, WebhookSink},
    types::Person,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut config = RotaConfig::from_env();
    if std::env::args().any(|arg| arg == "--force") {
        config.force_run = true;
    }

    let now = chrono::Local::now();
    if !schedule::should_run_now(&config, now) {
        log::info!("skipping run; outside the scheduled trigger window. Set FORCE_RUN=1 to override.");
        return Ok(());
    }

    let seed = config.master_seed.unwrap_or_else(rand::random);
    log::debug!("master seed: {seed}");
    let bank = RngBank::new(seed);
    let store = HistoryStore::new(&config.history_path);

    let webhook;
    let log_only;
    let sink: &dyn MessageSink = match &config.webhook_url {
        Some(url) => {
            webhook = WebhookSink::new(url)?;
            &webhook
        }
        None => {
            log_only = LogSink;
            &log_only
        }
    };

    match run::run_once(&config, &store, sink, &bank, now) {
        Ok(report) => {
            log::info!(
                "{}: help desk [{}], {} operations assignees, {} onboarding",
                report.day,
                names(&report.selected),
                report.assignments.len(),
                report.onboarding.len(),
            );
            log::debug!("rendered message:\n{}", report.message);
            Ok(())
        }
        Err(err) if err.is_config() => {
            // Abort this trigger without failing the process: the
            // external timer retries on its own schedule.
            log::error!("configuration error: {err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn names(people: &[Person]) -> String {
    people
        .iter()
        .map(Person::name)
        .collect::<Vec<_>>()
        .join(", ")
}
