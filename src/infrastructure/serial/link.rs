use crate::core::link::{LinkOpener, SerialLink};
use crate::domain::config::LinkConfig;
use serialport::{ClearBuffer, SerialPort};
use std::io::{self, Read, Write};
use tracing::{debug, warn};

/// Serial link over a real OS port
pub struct SystemLink {
    port: Box<dyn SerialPort>,
}

impl SerialLink for SystemLink {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.port.write_all(data)?;
        self.port.flush()
    }

    fn bytes_to_read(&mut self) -> io::Result<u32> {
        self.port.bytes_to_read().map_err(Into::into)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.port.read(buf)
    }

    fn clear_input(&mut self) -> io::Result<()> {
        self.port.clear(ClearBuffer::Input).map_err(Into::into)
    }
}

/// Opens real serial ports via the serialport crate
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, port: &str, config: &LinkConfig) -> Result<Box<dyn SerialLink>, serialport::Error> {
        let mut handle = serialport::new(port, config.baud_rate)
            .timeout(config.read_timeout())
            .open()?;

        debug!("Opened serial port {} at {} baud", port, config.baud_rate);

        // Arduino-class boards reset on DTR; assert it so the boot is
        // underway before the settle delay starts counting.
        if let Err(e) = handle.write_data_terminal_ready(true) {
            warn!("Failed to assert DTR on {}: {}", port, e);
        }

        Ok(Box::new(SystemLink { port: handle }))
    }
}
