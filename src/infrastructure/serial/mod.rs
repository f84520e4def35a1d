// Serial module - Real serial port adapters
pub mod link;
pub mod ports;

pub use link::{SystemLink, SystemLinkOpener};
pub use ports::SystemPortSource;
