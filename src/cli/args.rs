use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Command line arguments for MorseCom
#[derive(Parser, Debug)]
#[command(
    name = "morsecom",
    version = env!("CARGO_PKG_VERSION"),
    about = "Serial command tool for an Arduino Morse code transmitter",
    long_about = "Sends text commands to a serial-attached Morse code transmitter and collects its replies within a bounded time window. Supports one-shot commands and an interactive shell."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List attached serial ports
    Ports,
    /// Transmit a message as Morse code
    Send {
        /// Message text
        text: String,
        /// Serial port (defaults to the configured or first detected port)
        #[arg(short, long)]
        port: Option<String>,
    },
    /// Restore the device's default timing parameters
    Reset {
        /// Serial port (defaults to the configured or first detected port)
        #[arg(short, long)]
        port: Option<String>,
    },
    /// Abort the transmission in progress
    Stop {
        /// Serial port (defaults to the configured or first detected port)
        #[arg(short, long)]
        port: Option<String>,
    },
    /// Repeat the last transmitted message
    Last {
        /// Serial port (defaults to the configured or first detected port)
        #[arg(short, long)]
        port: Option<String>,
    },
    /// Show the device's Morse timing parameters
    Timings {
        /// Serial port (defaults to the configured or first detected port)
        #[arg(short, long)]
        port: Option<String>,
    },
    /// Interactive shell connected to the device
    Shell {
        /// Serial port (defaults to the configured or first detected port)
        #[arg(short, long)]
        port: Option<String>,
    },
    /// Configuration management commands
    Config(ConfigArgs),
}

/// Configuration management arguments
#[derive(ClapArgs, Debug)]
pub struct ConfigArgs {
    /// Configuration subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Create a default configuration file
    Init {
        /// Directory for the project file (defaults to the current one)
        #[arg(short, long)]
        output: Option<String>,
        /// Write the global file instead of a project one
        #[arg(short, long)]
        global: bool,
    },
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}
