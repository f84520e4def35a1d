// Session module - Connection lifecycle and command execution
pub mod cancel;
pub mod session;

pub use cancel::CancelHandle;
pub use session::DeviceSession;
