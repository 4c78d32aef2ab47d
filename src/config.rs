use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "concierge.yaml";

/// Environment variable prefix, e.g. `CONCIERGE_ENDPOINT__BASE_URL`.
pub const ENV_PREFIX: &str = "CONCIERGE";

pub const DEFAULT_WELCOME_MESSAGE: &str = "¡Bienvenido a Hotel Costa Azul! 👋\n\nSoy Costy, tu asistente virtual. Estaré encantado de ayudarte con cualquier duda sobre nuestro hotel, servicios, habitaciones y recomendaciones.\n\n¿En qué puedo ayudarte hoy?";

pub const DEFAULT_QUICK_REPLIES: &[&str] = &[
    "¿A qué hora es el check-in?",
    "¿Tienen parking?",
    "¿Se admiten mascotas?",
    "¿Qué me recomiendas visitar?",
];

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal client for the hotel concierge assistant", long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE", global = true)]
    pub config: Option<String>,

    /// Backend origin, overrides `endpoint.base_url`
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat session (default)
    Chat,
    /// Send a single message and print the reply
    Ask {
        /// Message text
        message: String,
    },
    /// Print the hotel info panel
    Info {
        /// Output format
        #[arg(long, value_enum, default_value_t = InfoFormat::Text)]
        format: InfoFormat,
        /// Read the record from a JSON file instead of the backend
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the effective configuration
    Config,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoFormat {
    Text,
    Html,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WidgetConfig {
    pub endpoint: EndpointConfig,
    pub widget: WidgetSettings,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EndpointConfig {
    pub base_url: String,
    pub chat_path: String,
    pub hotel_info_path: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WidgetSettings {
    pub assistant_name: String,
    pub welcome_message: String,
    pub quick_replies: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl WidgetConfig {
    pub fn load_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| ConfigError::Message(e.to_string()))?;
        Self::load_from_cli(&cli)
    }

    /// Priority: CLI flag > `CONCIERGE_` env var > config file > defaults.
    pub fn load_from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let quick_replies: Vec<String> = DEFAULT_QUICK_REPLIES
            .iter()
            .map(|s| (*s).to_string())
            .collect();

        let mut builder = Config::builder()
            .set_default("endpoint.base_url", "http://127.0.0.1:8000")?
            .set_default("endpoint.chat_path", crate::client::DEFAULT_CHAT_PATH)?
            .set_default(
                "endpoint.hotel_info_path",
                crate::client::DEFAULT_HOTEL_INFO_PATH,
            )?
            .set_default("widget.assistant_name", "Costy")?
            .set_default("widget.welcome_message", DEFAULT_WELCOME_MESSAGE)?
            .set_default("widget.quick_replies", quick_replies)?
            .set_default("log.level", "warn")?
            .set_default("log.format", "pretty")?;

        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        // E.g. CONCIERGE_ENDPOINT__BASE_URL=http://10.0.0.5:8000
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("widget.quick_replies")
                .try_parsing(true),
        );

        if let Some(base_url) = &cli.base_url {
            builder = builder.set_override("endpoint.base_url", base_url.as_str())?;
        }

        builder.build()?.try_deserialize()
    }
}
