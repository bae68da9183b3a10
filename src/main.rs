//! storymap - a terminal story-map planning board.
//!
//! Connects to the configured backend when one is set; otherwise runs
//! against a bundled read-only demo project.

use std::fs::File;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use storymap_api::ApiClient;
use storymap_config::{Config, auth::resolve_token};
use storymap_protocol::dummy_project;
use storymap_tui::{App, terminal};
use tracing::info;

/// Environment variable holding the tracing filter (e.g. `debug` or
/// `storymap_api=trace`). Unset means no logging at all.
const ENV_LOG: &str = "STORYMAP_LOG";

/// Log destination. Logs go to a file since stderr would fight the TUI
/// for the terminal.
const LOG_FILE: &str = "storymap.log";

fn init_tracing() -> anyhow::Result<()> {
    if std::env::var_os(ENV_LOG).is_none() {
        return Ok(());
    }
    let file = File::create(LOG_FILE).with_context(|| format!("failed to create {LOG_FILE}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env(ENV_LOG))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let config = Config::load().await?;

    let (project, client) = if config.has_backend() {
        let base_url = config
            .api
            .base_url
            .clone()
            .context("backend configured without a base URL")?;
        let token = resolve_token(config.api.token.as_deref());
        let client = Arc::new(ApiClient::new(&base_url, token)?);
        let project_id = config.api.project_id.context(
            "no project selected; set STORYMAP_PROJECT_ID or api.project_id in the config file",
        )?;
        let project = client
            .fetch_project(project_id)
            .await
            .context("failed to load the project")?;
        info!(project = %project.name, "loaded project from backend");
        (project, Some(client))
    } else {
        info!("no backend configured, using the bundled demo project");
        (dummy_project(), None)
    };

    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(project, config, client);
    let result = app.run(&mut terminal).await;

    // Restore even when the loop failed.
    terminal::restore_terminal(&mut terminal)?;
    result
}
