//! Hotel Concierge Widget
//!
//! Entry point for the terminal chat client.

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::manual_let_else)]

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use hotel_concierge_widget::client::{ConciergeApi, HttpConciergeClient};
use hotel_concierge_widget::config::{Cli, Command, InfoFormat, LogConfig, LogFormat, WidgetConfig};
use hotel_concierge_widget::hotel_info::HotelInfo;
use hotel_concierge_widget::render::{HtmlRenderer, SectionRenderer, TextRenderer, render_hotel_info};
use hotel_concierge_widget::ui::{TerminalView, run_repl};
use hotel_concierge_widget::widget::{
    ChatWidget, FALLBACK_MESSAGE, SendOutcome, WidgetOptions, WidgetView,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env (if present)
    let _ = dotenv();

    let cli = Cli::parse();
    let config = match WidgetConfig::load_from_cli(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log);

    info!(
        name: "config.loaded",
        base_url = %config.endpoint.base_url,
        chat_path = %config.endpoint.chat_path,
        hotel_info_path = %config.endpoint.hotel_info_path,
        "Configuration loaded"
    );

    match run(cli.command.unwrap_or(Command::Chat), config).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout belongs to the transcript. `RUST_LOG` wins over
/// the configured level.
fn init_tracing(log: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry().with(filter);

    match log.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
    }
}

async fn run(command: Command, config: WidgetConfig) -> anyhow::Result<ExitCode> {
    match command {
        Command::Chat => {
            let view: Arc<dyn WidgetView> =
                Arc::new(TerminalView::new(config.widget.assistant_name.clone()));
            let widget = ChatWidget::new(api(&config)?, WidgetOptions::from(&config.widget))
                .with_view(view)
                .with_renderer(Arc::new(TextRenderer));

            widget.initialize().await;
            run_repl(&widget).await.context("reading terminal input")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Ask { message } => {
            let widget = ChatWidget::new(api(&config)?, WidgetOptions::default());
            widget.set_input(message);

            match widget.send_message(None).await {
                SendOutcome::Replied(reply) => {
                    println!("{reply}");
                    Ok(ExitCode::SUCCESS)
                }
                SendOutcome::Fallback => {
                    eprintln!("{FALLBACK_MESSAGE}");
                    Ok(ExitCode::FAILURE)
                }
                SendOutcome::Ignored(reason) => {
                    eprintln!("Nothing sent ({reason:?})");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Info { format, file } => {
            let info = match file {
                Some(path) => {
                    let raw = tokio::fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("reading {}", path.display()))?;
                    serde_json::from_str::<HotelInfo>(&raw)
                        .with_context(|| format!("parsing {}", path.display()))?
                }
                None => HttpConciergeClient::from_config(&config.endpoint)?
                    .fetch_hotel_info()
                    .await
                    .context("fetching hotel info")?,
            };

            let renderer: Box<dyn SectionRenderer> = match format {
                InfoFormat::Text => Box::new(TextRenderer),
                InfoFormat::Html => Box::new(HtmlRenderer),
            };
            print!("{}", render_hotel_info(&info, renderer.as_ref()));
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => {
            print!("{}", serde_yaml::to_string(&config)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn api(config: &WidgetConfig) -> anyhow::Result<Arc<dyn ConciergeApi>> {
    let client = HttpConciergeClient::from_config(&config.endpoint)
        .with_context(|| format!("invalid endpoint {}", config.endpoint.base_url))?;
    Ok(Arc::new(client))
}
