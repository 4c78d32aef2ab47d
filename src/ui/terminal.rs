//! Line-oriented chat front-end.

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::session::{Message, Sender};
use crate::widget::{ChatWidget, IgnoreReason, PanelState, SendOutcome, WidgetView};

const USER_LABEL: &str = "Tú";

const HELP: &str = "Comandos:\n  /info      mostrar u ocultar la información del hotel\n  /quick     listar respuestas rápidas\n  /quick N   enviar la respuesta rápida N\n  /help      mostrar esta ayuda\n  /quit      salir";

/// Prints widget updates to stdout.
#[derive(Debug, Clone)]
pub struct TerminalView {
    assistant_name: String,
}

impl TerminalView {
    pub fn new(assistant_name: impl Into<String>) -> Self {
        Self {
            assistant_name: assistant_name.into(),
        }
    }

    /// One transcript entry, continuation lines indented under the label.
    pub fn format_message(&self, message: &Message) -> String {
        let label = match message.sender {
            Sender::User => USER_LABEL,
            Sender::Bot => self.assistant_name.as_str(),
        };
        let separator = format!("\n{}", " ".repeat(label.chars().count() + 3));
        let body = message
            .text
            .lines()
            .collect::<Vec<_>>()
            .join(separator.as_str());
        format!("{label} › {body}")
    }

    pub fn typing_line(&self) -> String {
        format!("{} está escribiendo…", self.assistant_name)
    }
}

impl WidgetView for TerminalView {
    fn message_appended(&self, message: &Message) {
        println!("{}\n", self.format_message(message));
    }

    fn typing_changed(&self, typing: bool) {
        if typing {
            println!("{}", self.typing_line());
        }
    }

    fn panel_changed(&self, state: PanelState, content: Option<&str>) {
        match (state, content) {
            (PanelState::Expanded, Some(content)) => println!("{content}"),
            (PanelState::Expanded, None) => println!("Cargando información del hotel…\n"),
            (PanelState::Collapsed, _) => println!("(información del hotel oculta)\n"),
        }
    }
}

/// A parsed REPL input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Plain text to send.
    Send(String),
    ToggleInfo,
    ListQuick,
    /// 1-based quick-reply index.
    Quick(usize),
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix('/') else {
            return Self::Send(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("info"), None) => Self::ToggleInfo,
            (Some("quick"), None) => Self::ListQuick,
            (Some("quick"), Some(n)) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Self::Quick(n),
                _ => Self::Unknown(trimmed.to_string()),
            },
            (Some("help"), None) => Self::Help,
            (Some("quit" | "exit"), None) => Self::Quit,
            _ => Self::Unknown(trimmed.to_string()),
        }
    }
}

/// Read stdin until EOF or `/quit`, driving `widget`.
pub async fn run_repl(widget: &ChatWidget) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{HELP}\n");

    while let Some(line) = lines.next_line().await? {
        match ReplCommand::parse(&line) {
            ReplCommand::Send(text) => {
                widget.set_input(text);
                report(widget.send_message(None).await);
            }
            ReplCommand::ToggleInfo => {
                widget.toggle_info();
            }
            ReplCommand::ListQuick => {
                for (idx, text) in widget.quick_replies().iter().enumerate() {
                    println!("  {}. {text}", idx + 1);
                }
                println!();
            }
            ReplCommand::Quick(n) => match widget.quick_replies().get(n - 1) {
                Some(text) => {
                    let text = text.clone();
                    report(widget.send_quick(&text).await);
                }
                None => println!("No hay respuesta rápida número {n}.\n"),
            },
            ReplCommand::Help => println!("{HELP}\n"),
            ReplCommand::Quit => break,
            ReplCommand::Unknown(command) => {
                println!("Comando desconocido: {command}. Escribe /help.\n");
            }
        }
    }

    tracing::debug!(session_id = %widget.session_id(), "REPL finished");
    Ok(())
}

fn report(outcome: SendOutcome) {
    if let SendOutcome::Ignored(IgnoreReason::Busy) = outcome {
        println!("Espera a que termine la respuesta anterior.\n");
    }
}
