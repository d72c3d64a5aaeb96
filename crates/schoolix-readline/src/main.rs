mod helper;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use helper::{CliHelper, QUIT_COMMANDS, RETRY_COMMAND};
use render::TranscriptView;
use schoolix_application::{ChatSession, RejectReason, SendOutcome};
use schoolix_core::notify::{NoopNotifier, Notifier};
use schoolix_core::session::Mode;
use schoolix_infrastructure::{ConfigService, SchoolixPaths, SecretServiceImpl, WebhookNotifier};
use schoolix_interaction::GeminiApiClient;

const LOG_ENV: &str = "SCHOOLIX_LOG";

/// Schoolix student verification chat.
#[derive(Debug, Parser)]
#[command(name = "schoolix", version, about)]
struct Args {
    /// Directory holding config.toml, secret.json and logs (default: ~/.config/schoolix)
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Write logs to stderr instead of the daily log file
    #[arg(long)]
    log_stderr: bool,
}

fn init_tracing(paths: &SchoolixPaths, to_stderr: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let logs_dir = paths.logs_dir();
    std::fs::create_dir_all(&logs_dir)?;
    let appender = tracing_appender::rolling::daily(logs_dir, "schoolix.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}

async fn build_session(paths: &SchoolixPaths) -> Result<ChatSession> {
    let config = ConfigService::new(paths).load()?;
    let api_key = SecretServiceImpl::new(paths).gemini_api_key().await?;

    let verifier = Arc::new(GeminiApiClient::new(&api_key, &config.verifier.model));
    let assistant = Arc::new(GeminiApiClient::new(&api_key, &config.assistant.model));
    tracing::info!(
        "Using verifier model {} and assistant model {}",
        verifier.model(),
        assistant.model()
    );

    let notifier: Arc<dyn Notifier> = match config.webhook_url.as_deref() {
        Some(url) if !url.trim().is_empty() => Arc::new(WebhookNotifier::new(url)),
        _ => {
            tracing::warn!("No webhook configured, verified records will not be delivered");
            Arc::new(NoopNotifier)
        }
    };

    Ok(ChatSession::from_config(&config, verifier, assistant, notifier))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let paths = SchoolixPaths::new(args.config_dir.as_deref())?;
    let _guard = init_tracing(&paths, args.log_stderr)?;

    let mut session = match build_session(&paths).await {
        Ok(session) => session,
        Err(err) => {
            tracing::error!("Startup failed: {:#}", err);
            eprintln!("{}", format!("Error: {:#}", err).red());
            return Err(err);
        }
    };

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Schoolix ===".bright_magenta().bold());
    println!(
        "{}",
        format!("Type 'restart' to start over, '{RETRY_COMMAND}' after a failed request, or 'quit' to exit.")
            .bright_black()
    );
    println!();

    let mut view = TranscriptView::new();
    view.render_new(&session);

    loop {
        let state = session.state().clone();
        if let Some(helper) = rl.helper_mut() {
            helper.masking = state.mode == Mode::Auth;
        }

        let line = match rl.readline(&render::prompt(&state)) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };
        let trimmed = line.trim();

        if QUIT_COMMANDS.contains(&trimmed) {
            println!("{}", "Goodbye!".bright_green());
            break;
        }
        if trimmed.is_empty() {
            continue;
        }
        if state.mode != Mode::Auth {
            let _ = rl.add_history_entry(trimmed);
        }

        if trimmed == RETRY_COMMAND {
            if session.can_retry() {
                render::print_busy(state.mode);
                session.retry().await;
            } else {
                println!("{}", "Nothing to retry.".bright_black());
                continue;
            }
        } else {
            if render::will_call_remote(&state, trimmed) {
                render::print_busy(state.mode);
            }
            match session.send(&line).await {
                SendOutcome::Accepted => {}
                SendOutcome::Rejected(RejectReason::Locked) => {
                    println!(
                        "{}",
                        "This session is locked. Type 'restart' to begin again.".red()
                    );
                    continue;
                }
                SendOutcome::Rejected(RejectReason::Empty) => continue,
            }
        }

        view.render_new(&session);

        let next = session.state();
        if next.locked && !state.locked {
            render::print_lock_banner();
        }
        if state.mode == Mode::Registration && next.mode == Mode::Assistant {
            render::print_success_banner();
        }
    }

    Ok(())
}
