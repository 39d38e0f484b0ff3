//! Deskmate - terminal dashboard for the personal assistant backend
//!
//! Main entry point.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use deskmate_app::render::{render_notification, render_screen};
use deskmate_app::utils::logging::init_tracing;
use deskmate_app::{commands, AppContext, Cli, Shell, WatchKey};
use deskmate_core::NotificationCenter;
use deskmate_infra::config;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_tracing(cli.log_json) {
        eprintln!("deskmate: logging unavailable: {err}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "deskmate exited with an error");
            eprintln!("deskmate: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(mut cli: Cli) -> anyhow::Result<()> {
    let mut settings = config::resolve(cli.config.clone()).context("loading configuration")?;
    cli.apply_overrides(&mut settings);
    let ctx = Arc::new(AppContext::new(settings).context("starting session")?);

    if let Some(command) = cli.command.take() {
        let result = commands::execute(&ctx, command).await;
        flush_notifications(&ctx.notifications);
        let output = result?;
        println!("{output}");
        return Ok(());
    }

    let mut shell = Shell::new(Arc::clone(&ctx));
    shell.navigate(cli.route()).await?;
    draw(&shell);

    if cli.watch {
        watch(&shell).await?;
    }

    shell.unmount().await;
    Ok(())
}

/// Re-render on every poll tick until Ctrl-C or `q`.
///
/// Reads one [`WatchKey`] per stdin line.
async fn watch(shell: &Shell) -> anyhow::Result<()> {
    let polling = &shell.context().config.polling;
    let tick = polling.logs_interval().min(polling.feed_interval()).max(Duration::from_secs(1));
    let mut interval = tokio::time::interval(tick);
    interval.tick().await;

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    info!(tick_ms = u64::try_from(tick.as_millis()).unwrap_or(u64::MAX), "watching");
    eprintln!("{}", WatchKey::HELP);
    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal.context("listening for Ctrl-C")?;
                info!("interrupted");
                return Ok(());
            }
            line = input.next_line(), if input_open => {
                match line.context("reading stdin")? {
                    Some(line) => match WatchKey::parse(&line) {
                        Some(WatchKey::ToggleLanguage) => {
                            let language = shell.toggle_language();
                            info!(%language, "language toggled");
                            draw(shell);
                        }
                        Some(WatchKey::Quit) => return Ok(()),
                        None => {}
                    },
                    None => input_open = false,
                }
            }
            _ = interval.tick() => draw(shell),
        }
    }
}

fn draw(shell: &Shell) {
    flush_notifications(&shell.context().notifications);
    if let Some(page) = shell.current() {
        println!("{}", render_screen(&shell.nav(), page, shell.context().i18n.translator()));
    }
}

fn flush_notifications(center: &NotificationCenter) {
    for notification in center.drain() {
        eprintln!("{}", render_notification(&notification));
    }
}
