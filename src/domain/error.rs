use thiserror::Error;

/// MorseCom unified error type
#[derive(Error, Debug)]
pub enum MorseComError {
    #[error("Failed to open port '{port}': {source}")]
    Connect {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("Unknown port '{0}'")]
    UnknownPort(String),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MorseComResult<T> = Result<T, MorseComError>;
