use crate::cli::args::OutputFormat;
use crate::core::response::Response;
use crate::domain::config::MorseComConfig;
use serde_json;
use std::io;
use tabled::{Table, Tabled};

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_ports(&self, ports: &[String], default: Option<&str>) -> Result<(), OutputError>;
    fn write_response(&self, command: &str, response: &Response) -> Result<(), OutputError>;
    fn write_config(&self, config: &MorseComConfig) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
    fn write_error(&self, error: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Serialization error: {0}")]
    TomlError(#[from] toml::ser::Error),
}

impl From<OutputError> for crate::domain::error::MorseComError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_ports(&self, ports: &[String], default: Option<&str>) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                if ports.is_empty() {
                    println!("No serial ports found");
                } else {
                    println!("Available serial ports:");
                    for port in ports {
                        if default == Some(port.as_str()) {
                            println!("  {} (default)", port);
                        } else {
                            println!("  {}", port);
                        }
                    }
                }
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "ports": ports,
                    "default": default,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                if !ports.is_empty() {
                    let rows: Vec<PortTableRow> = ports
                        .iter()
                        .map(|port| PortTableRow {
                            port: port.clone(),
                            default: if default == Some(port.as_str()) { "yes" } else { "" }
                                .to_string(),
                        })
                        .collect();
                    let table = Table::new(rows);
                    println!("{}", table);
                }
            }
        }
        Ok(())
    }

    fn write_response(&self, command: &str, response: &Response) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                println!("{}", response);
            }
            OutputFormat::Json => {
                let output = match response {
                    Response::Lines(lines) => serde_json::json!({
                        "command": command,
                        "outcome": "lines",
                        "lines": lines,
                    }),
                    Response::Empty => serde_json::json!({
                        "command": command,
                        "outcome": "empty",
                    }),
                    Response::NotConnected => serde_json::json!({
                        "command": command,
                        "outcome": "not_connected",
                    }),
                    Response::WriteFailed(fault) => serde_json::json!({
                        "command": command,
                        "outcome": "write_failed",
                        "kind": format!("{:?}", fault.kind),
                        "message": fault.message,
                    }),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                let lines = response.lines();
                if lines.is_empty() {
                    println!("{}", response);
                } else {
                    let rows: Vec<ResponseLineRow> = lines
                        .iter()
                        .enumerate()
                        .map(|(index, line)| ResponseLineRow {
                            line: index + 1,
                            text: line.clone(),
                        })
                        .collect();
                    let table = Table::new(rows);
                    println!("{}", table);
                }
            }
        }
        Ok(())
    }

    fn write_config(&self, config: &MorseComConfig) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                println!("MorseCom Configuration:");
                println!("  Log level: {}", config.global.log_level);
                match &config.global.default_port {
                    Some(port) => println!("  Default port: {}", port),
                    None => println!("  Default port: (auto-detect)"),
                }
                println!("  Baud rate: {}", config.link.baud_rate);
                println!("  Read timeout: {}ms", config.link.read_timeout_ms);
                println!("  Settle delay: {}ms", config.link.settle_delay_ms);
                println!("  Command delay: {}ms", config.link.command_delay_ms);
                println!("  Response window: {}ms", config.link.response_window_ms);
                println!("  Poll interval: {}ms", config.link.poll_interval_ms);
            }
            OutputFormat::Json => {
                let output = serde_json::to_string_pretty(config)?;
                println!("{}", output);
            }
            OutputFormat::Table => {
                let output = toml::to_string_pretty(config)?;
                println!("{}", output);
            }
        }
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "message": message,
                    "level": "info"
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                println!("{}", message);
            }
        }
        Ok(())
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "error": error,
                    "level": "error"
                });
                eprintln!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                eprintln!("Error: {}", error);
            }
        }
        Ok(())
    }
}

/// Table row for the port listing
#[derive(Tabled)]
struct PortTableRow {
    port: String,
    default: String,
}

/// Table row for response lines
#[derive(Tabled)]
struct ResponseLineRow {
    line: usize,
    text: String,
}
