//! stdin commands understood in headless mode
//!
//! One command per line: `framework <id>`, `orm <id>`, `endpoint <path>`,
//! `run`, `status`, `list`, `quit` (or `q`). Blank lines are ignored.

use std::io::BufRead;

use bananas_app::message::Message;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Framework(String),
    Orm(String),
    Endpoint(String),
    Run,
    Status,
    List,
    Quit,
    /// Anything else; carries the reason for the `error` event
    Invalid(String),
}

impl Command {
    /// Parse one input line. `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };

        let command = match (verb, arg) {
            ("framework", v) if !v.is_empty() => Command::Framework(v.to_string()),
            ("orm", v) if !v.is_empty() => Command::Orm(v.to_string()),
            ("endpoint", v) if !v.is_empty() => Command::Endpoint(v.to_string()),
            ("framework" | "orm" | "endpoint", _) => {
                Command::Invalid(format!("missing value for '{}'", verb))
            }
            ("run", "") => Command::Run,
            ("status", "") => Command::Status,
            ("list", "") => Command::List,
            ("quit" | "q", "") => Command::Quit,
            _ => Command::Invalid(format!("unknown command: {}", line)),
        };
        Some(command)
    }

    /// The engine message this command maps to, if any
    pub fn to_message(&self) -> Option<Message> {
        match self {
            Command::Framework(v) => Some(Message::SelectFramework(v.clone())),
            Command::Orm(v) => Some(Message::SelectOrm(v.clone())),
            Command::Endpoint(v) => Some(Message::SelectEndpoint(v.clone())),
            Command::Run => Some(Message::RunTest),
            Command::Quit => Some(Message::Quit),
            Command::Status | Command::List | Command::Invalid(_) => None,
        }
    }
}

/// Read stdin until EOF or `quit`, forwarding parsed commands.
///
/// Blocking; run it on its own thread.
pub fn read_commands_blocking(cmd_tx: mpsc::Sender<Command>) {
    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        let Some(command) = Command::parse(&line) else {
            continue;
        };
        if let Command::Invalid(reason) = &command {
            warn!("Stdin: {}", reason);
        }

        let quit = command == Command::Quit;
        if cmd_tx.blocking_send(command).is_err() || quit {
            break;
        }
    }

    info!("Stdin reader exiting");
}
