//! opsdeck terminal console
//!
//! ```sh
//! opsdeck --url https://tower.example.com --token "$TOKEN" \
//!     --credential-type 1 --credential-type 18 --auto-populate \
//!     --survey demos/deploy-survey.json --log-file opsdeck.log
//! ```

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use opsdeck::app::{reducer, Action, AppEffects, AppState, AppUi};
use opsdeck::lookup::LookupAction;
use opsdeck::{Args, ConsoleConfig, CredentialProvider, HttpCredentials};
use opsdeck_core::{EffectRuntime, EffectStoreWithMiddleware, LoggingMiddleware};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref(), args.verbose)?;

    let config = ConsoleConfig::from_args(&args)?;
    let mut api = HttpCredentials::new(&config.base_url)?;
    if let Some(token) = &config.token {
        api = api.with_token(token.clone());
    }
    tracing::info!(
        url = api.url(),
        types = config.credential_types.len(),
        "starting console"
    );

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config, Arc::new(api)).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("console loop failed")
}

/// Log to `log_file` when given; otherwise logging stays off so the UI owns the terminal.
fn init_logging(log_file: Option<&Path>, verbose: bool) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("opsdeck=debug,opsdeck_core=debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &ConsoleConfig,
    provider: Arc<dyn CredentialProvider>,
) -> io::Result<()> {
    let state = AppState::from_config(config);
    let first_type = state.current_type().cloned();

    let store = EffectStoreWithMiddleware::new(state, reducer, LoggingMiddleware::new());
    let mut runtime = EffectRuntime::from_store(store);

    // Mount: fetch for the first credential type
    if let Some(id) = first_type {
        runtime.enqueue(Action::Lookup(LookupAction::LookupTypeChange(id)));
    }

    let effects = AppEffects::new(provider);
    let ui = RefCell::new(AppUi::new());

    runtime
        .run(
            terminal,
            |frame, area, state| ui.borrow_mut().render(frame, area, state),
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| effects.handle(effect, ctx),
        )
        .await
}
