// Core module - Protocol engine
pub mod command;
pub mod link;
pub mod port;
pub mod response;
pub mod session;

pub use command::Command;
pub use port::PortRegistry;
pub use response::{Response, TransportFault};
pub use session::{CancelHandle, DeviceSession};
