use crate::core::command::Command;
use crate::core::link::{LinkOpener, SerialLink};
use crate::core::response::{LineAccumulator, Response};
use crate::core::session::cancel::CancelHandle;
use crate::domain::config::LinkConfig;
use crate::domain::error::{MorseComError, MorseComResult};
use std::io;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

/// Read chunk per poll; transmitter lines are short
const READ_CHUNK: usize = 512;

/// Owns the single serial connection to the transmitter
///
/// At most one link is open at a time. `Disconnected` is the absence
/// of a link, so a half-open handle cannot be observed, and dropping
/// the session closes whatever is open.
pub struct DeviceSession {
    opener: Box<dyn LinkOpener>,
    config: LinkConfig,
    link: Option<Box<dyn SerialLink>>,
    port: Option<String>,
}

impl DeviceSession {
    pub fn new(opener: Box<dyn LinkOpener>, config: LinkConfig) -> Self {
        Self {
            opener,
            config,
            link: None,
            port: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.link.is_some()
    }

    /// Port of the open link, if any
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Open `port`, closing any previous link first
    ///
    /// Waits out the device's boot after opening and discards whatever
    /// it printed while booting, so the first command's response is
    /// not polluted by banner text. On failure the session stays
    /// disconnected.
    pub async fn connect(&mut self, port: &str) -> MorseComResult<()> {
        if self.link.is_some() {
            info!("Closing previous connection before opening {}", port);
            self.disconnect();
        }

        let mut link = self
            .opener
            .open(port, &self.config)
            .map_err(|source| MorseComError::Connect {
                port: port.to_string(),
                source,
            })?;

        sleep(self.config.settle_delay()).await;

        match link.bytes_to_read() {
            Ok(pending) if pending > 0 => {
                debug!("Discarding {} boot byte(s) from {}", pending, port);
            }
            _ => {}
        }
        if let Err(e) = link.clear_input() {
            warn!("Failed to clear input buffer on {}: {}", port, e);
        }

        self.link = Some(link);
        self.port = Some(port.to_string());
        info!("Connected to {}", port);
        Ok(())
    }

    /// Close the link if one is open; a no-op otherwise
    pub fn disconnect(&mut self) {
        if self.link.take().is_some() {
            if let Some(port) = &self.port {
                info!("Disconnected from {}", port);
            }
        }
        self.port = None;
    }

    /// Send a command and collect its response
    pub async fn execute(&mut self, command: &Command) -> Response {
        self.execute_cancellable(command, &CancelHandle::new()).await
    }

    /// Like `execute`, but a set handle ends collection early,
    /// returning the lines received up to that point
    pub async fn execute_cancellable(
        &mut self,
        command: &Command,
        cancel: &CancelHandle,
    ) -> Response {
        let Some(link) = self.link.as_mut() else {
            debug!("Ignoring '{}': not connected", command);
            return Response::NotConnected;
        };

        if let Err(e) = link.write_all(&command.to_frame()) {
            warn!("Failed to write '{}': {}", command, e);
            return Response::WriteFailed(e.into());
        }
        debug!("Sent command: {}", command);

        // Give the device a head start before the first poll.
        sleep(self.config.command_delay()).await;

        let mut acc = LineAccumulator::new();
        let mut buf = [0u8; READ_CHUNK];
        let deadline = Instant::now() + self.config.response_window();

        // The device never marks end-of-message, so collection runs to
        // the deadline even while output is flowing.
        while Instant::now() < deadline {
            if cancel.is_cancelled() {
                debug!("Collection cancelled for '{}'", command);
                break;
            }
            match link.bytes_to_read() {
                Ok(0) => sleep(self.config.poll_interval()).await,
                Ok(_) => match link.read(&mut buf) {
                    Ok(0) => sleep(self.config.poll_interval()).await,
                    Ok(n) => acc.extend(&buf[..n]),
                    Err(ref e) if e.kind() == io::ErrorKind::TimedOut => continue,
                    Err(e) => {
                        warn!(
                            "Read failed mid-response, keeping {} line(s): {}",
                            acc.line_count(),
                            e
                        );
                        break;
                    }
                },
                Err(e) => {
                    warn!(
                        "Poll failed mid-response, keeping {} line(s): {}",
                        acc.line_count(),
                        e
                    );
                    break;
                }
            }
        }

        let lines = acc.finish();
        if lines.is_empty() {
            debug!("No response to '{}'", command);
            Response::Empty
        } else {
            debug!("Collected {} line(s) for '{}'", lines.len(), command);
            Response::Lines(lines)
        }
    }
}
