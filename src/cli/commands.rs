use crate::cli::args::{Args, Command as CliCommand, ConfigArgs, ConfigCommand};
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::core::command::Command;
use crate::core::port::{default_selection, PortRegistry};
use crate::core::response::Response;
use crate::core::session::{CancelHandle, DeviceSession};
use crate::domain::config::MorseComConfig;
use crate::domain::error::{MorseComError, MorseComResult};
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::serial::{SystemLinkOpener, SystemPortSource};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Execute CLI command
pub async fn execute_command(args: Args) -> Result<(), MorseComError> {
    let writer = ConsoleWriter::new(args.output.clone());

    // Load configuration using ConfigManager
    let config_manager = ConfigManager::new()?;
    let config = if let Some(config_path) = &args.config {
        config_manager.load_config_from_path(config_path.as_ref())?
    } else {
        config_manager.load_config()?
    };

    // Initialize logging
    if !args.quiet {
        init_logging(&config.global.log_level, args.verbose)?;
    }

    match args.command {
        CliCommand::Ports => execute_ports(&writer),
        CliCommand::Send { text, port } => {
            execute_device_command(Command::new(text), port, &config, &writer).await
        }
        CliCommand::Reset { port } => {
            execute_device_command(Command::reset(), port, &config, &writer).await
        }
        CliCommand::Stop { port } => {
            execute_device_command(Command::stop(), port, &config, &writer).await
        }
        CliCommand::Last { port } => {
            execute_device_command(Command::last(), port, &config, &writer).await
        }
        CliCommand::Timings { port } => {
            execute_device_command(Command::timings(), port, &config, &writer).await
        }
        CliCommand::Shell { port } => execute_shell(port, &config, &writer).await,
        CliCommand::Config(config_args) => {
            execute_config_command(config_args, &writer, &config, &config_manager)
        }
    }
}

fn execute_ports(writer: &ConsoleWriter) -> Result<(), MorseComError> {
    let registry = PortRegistry::new(Box::new(SystemPortSource));
    let ports = registry.list_ports();
    let default = default_selection(&ports).cloned();
    writer.write_ports(&ports, default.as_deref())?;
    Ok(())
}

/// Pick the port to talk to: explicit flag, then configured default,
/// then the first detected port
fn resolve_port(explicit: Option<String>, config: &MorseComConfig) -> MorseComResult<String> {
    if let Some(port) = explicit {
        return Ok(port);
    }
    if let Some(port) = &config.global.default_port {
        debug!("Using configured default port {}", port);
        return Ok(port.clone());
    }
    let registry = PortRegistry::new(Box::new(SystemPortSource));
    let ports = registry.list_ports();
    default_selection(&ports).cloned().ok_or_else(|| {
        MorseComError::InvalidInput("no serial ports detected; pass one with --port".to_string())
    })
}

async fn execute_device_command(
    command: Command,
    port: Option<String>,
    config: &MorseComConfig,
    writer: &ConsoleWriter,
) -> Result<(), MorseComError> {
    let port = resolve_port(port, config)?;
    let mut session = DeviceSession::new(Box::new(SystemLinkOpener), config.link.clone());
    session.connect(&port).await?;

    let response = session.execute(&command).await;
    write_response(writer, &command, &response)?;

    session.disconnect();
    Ok(())
}

/// Render one response, styling the not-connected case as an error
fn write_response(
    writer: &ConsoleWriter,
    command: &Command,
    response: &Response,
) -> Result<(), MorseComError> {
    if response.is_not_connected() {
        writer.write_error(&format!("Cannot send '{}': not connected", command))?;
    } else {
        writer.write_response(command.as_str(), response)?;
    }
    Ok(())
}

async fn execute_shell(
    port: Option<String>,
    config: &MorseComConfig,
    writer: &ConsoleWriter,
) -> Result<(), MorseComError> {
    let port = resolve_port(port, config)?;
    let mut session = DeviceSession::new(Box::new(SystemLinkOpener), config.link.clone());
    session.connect(&port).await?;

    writer.write_message(&format!(
        "Connected to {}. Type a message to transmit, 'exit' to quit.",
        port
    ))?;
    writer.write_message("Ctrl+C stops collecting the current response early.")?;

    let cancel = CancelHandle::new();
    let watcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };

    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin).lines();

    while let Some(line) = reader.next_line().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("exit") || text.eq_ignore_ascii_case("quit") {
            break;
        }

        cancel.reset();
        let command = Command::new(text);
        let response = session.execute_cancellable(&command, &cancel).await;
        write_response(writer, &command, &response)?;
    }

    watcher.abort();
    session.disconnect();
    writer.write_message("Disconnected")?;
    Ok(())
}

fn execute_config_command(
    args: ConfigArgs,
    writer: &ConsoleWriter,
    config: &MorseComConfig,
    config_manager: &ConfigManager,
) -> Result<(), MorseComError> {
    match args.command {
        ConfigCommand::Show => {
            writer.write_config(config)?;
            Ok(())
        }
        ConfigCommand::Init { output, global } => {
            if global {
                let global_path = config_manager.global_config_path();
                config_manager.save_config_to_path(global_path, &MorseComConfig::default())?;
                writer.write_message(&format!(
                    "Global configuration initialized at '{}'",
                    global_path.display()
                ))?;
            } else if let Some(output_path) = output {
                config_manager.init_project_config(output_path.as_ref())?;
                writer.write_message(&format!(
                    "Project configuration initialized at '{}'",
                    output_path
                ))?;
            } else {
                let current_dir = std::env::current_dir().map_err(|e| MorseComError::Config {
                    message: format!("Failed to get current directory: {}", e),
                })?;
                config_manager.init_project_config(&current_dir)?;
                writer.write_message("Project configuration initialized in current directory")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_port_prefers_explicit() {
        let config = MorseComConfig::default();
        let port = resolve_port(Some("COM7".to_string()), &config).unwrap();
        assert_eq!(port, "COM7");
    }

    #[test]
    fn test_resolve_port_falls_back_to_configured_default() {
        let mut config = MorseComConfig::default();
        config.global.default_port = Some("/dev/ttyACM0".to_string());
        let port = resolve_port(None, &config).unwrap();
        assert_eq!(port, "/dev/ttyACM0");
    }
}
