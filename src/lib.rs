//! MorseCom Library
//!
//! Serial command/response engine for an Arduino-class Morse code
//! transmitter: port discovery, connection lifecycle management and
//! window-bounded response collection, plus the CLI built on top.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::command::Command;
pub use crate::core::link::{LinkOpener, PortSource, SerialLink};
pub use crate::core::port::{default_selection, PortRegistry};
pub use crate::core::response::{Response, TransportFault};
pub use crate::core::session::{CancelHandle, DeviceSession};
pub use crate::domain::config::{GlobalConfig, LinkConfig, MorseComConfig};
pub use crate::domain::error::{MorseComError, MorseComResult};
