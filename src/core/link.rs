use crate::domain::config::LinkConfig;
use std::io;

/// Open serial handle as seen by the session
///
/// The methods mirror the blocking serialport surface the session
/// needs. Reads are only issued after `bytes_to_read` reported data,
/// so they return promptly even though the handle itself blocks.
pub trait SerialLink: Send {
    /// Write the full buffer to the device
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Number of bytes buffered by the OS and ready to read
    fn bytes_to_read(&mut self) -> io::Result<u32>;

    /// Read available bytes into `buf`, returning the count
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Discard anything pending in the OS receive buffer
    fn clear_input(&mut self) -> io::Result<()>;
}

/// Factory for serial links
///
/// The session owns one of these so tests can hand it in-memory links
/// instead of real ports.
pub trait LinkOpener: Send + Sync {
    fn open(&self, port: &str, config: &LinkConfig) -> Result<Box<dyn SerialLink>, serialport::Error>;
}

/// Source of attached serial port names
///
/// Enumeration failures are reported here and swallowed by the
/// registry; discovery is best-effort.
pub trait PortSource: Send + Sync {
    fn enumerate(&self) -> Result<Vec<String>, serialport::Error>;
}
