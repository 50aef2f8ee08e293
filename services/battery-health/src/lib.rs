//! Battery Health - terminal client for the battery health prediction service
//!
//! Validates telemetry, submits it for classification, renders the verdict, and
//! keeps an eye on whether the service is reachable.

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod io;
pub mod session;

pub use config::{load_config, Config};
pub use error::{BatteryHealthError, Result};
pub use session::{Session, SessionBuilder};

use battery_core::{ApiStatus, RawFields, ResultView};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Submit one set of readings and return the settled result area
pub async fn predict(config: Config, fields: RawFields) -> Result<ResultView> {
    let mut session = SessionBuilder::new(config).build()?;
    Ok(session.submit(fields).await)
}

/// Probe the service once
pub async fn status(config: Config) -> Result<ApiStatus> {
    let mut session = SessionBuilder::new(config).build()?;
    Ok(session.check_status().await)
}

/// Interactive session: one submission per input line, with background polling.
///
/// After `quit` or end of input, the session finishes the attempt in flight and
/// stops. Ctrl-c stops immediately.
pub async fn watch<R>(config: Config, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let cancel = CancellationToken::new();
    let mut session = SessionBuilder::new(config)
        .with_cancellation_token(cancel.clone())
        .build()?;

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            cancel_for_signal.cancel();
        }
    });

    let (submissions, pending) = mpsc::unbounded_channel();
    let cancel_for_input = cancel.clone();
    tokio::spawn(async move {
        let mut lines = input.lines();
        loop {
            let line = tokio::select! {
                _ = cancel_for_input.cancelled() => break,
                line = lines.next_line() => line,
            };
            match line {
                Ok(Some(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if line == "quit" || line == "exit" {
                        break;
                    }
                    if submissions.send(parse_line(line)).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::error!("Failed to read input: {}", e);
                    break;
                }
            }
        }
        tracing::debug!("Input closed");
    });

    println!("Enter: voltage current temperature age_months resistance (or 'quit')");
    session.start();
    session.run_with_input(pending).await;
    tracing::info!("Session ended");
    Ok(())
}

/// Split a whitespace-separated input line into form fields.
///
/// Missing trailing fields are left empty so they fail validation like an empty
/// form field would. Extra tokens are ignored.
pub fn parse_line(line: &str) -> RawFields {
    let mut tokens = line.split_whitespace();
    let mut next = || tokens.next().unwrap_or_default().to_string();
    RawFields {
        voltage: next(),
        current: next(),
        temperature: next(),
        age_months: next(),
        resistance: next(),
    }
}
