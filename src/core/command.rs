use std::fmt;

/// Reserved control words understood by the transmitter firmware
///
/// They travel the same path as free text; their meaning belongs to
/// the device, not to this layer.
pub mod reserved {
    /// Restore the device's default timing parameters
    pub const RESET: &str = "RESET";
    /// Abort the transmission in progress
    pub const STOP: &str = "STOP";
    /// Repeat the last transmitted message
    pub const LAST: &str = "LAST";
    /// Report the current Morse timing parameters
    pub const TIMINGS: &str = "TIMINGS";
}

/// One line of text bound for the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command(String);

impl Command {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn reset() -> Self {
        Self::new(reserved::RESET)
    }

    pub fn stop() -> Self {
        Self::new(reserved::STOP)
    }

    pub fn last() -> Self {
        Self::new(reserved::LAST)
    }

    pub fn timings() -> Self {
        Self::new(reserved::TIMINGS)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wire form: the text with the line terminator appended
    pub fn to_frame(&self) -> Vec<u8> {
        let mut frame = self.0.clone().into_bytes();
        frame.push(b'\n');
        frame
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Command {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Command {
    fn from(text: String) -> Self {
        Self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_appends_terminator() {
        let cmd = Command::new("HELLO WORLD");
        assert_eq!(cmd.to_frame(), b"HELLO WORLD\n");
    }

    #[test]
    fn test_reserved_constructors() {
        assert_eq!(Command::reset().as_str(), "RESET");
        assert_eq!(Command::stop().as_str(), "STOP");
        assert_eq!(Command::last().as_str(), "LAST");
        assert_eq!(Command::timings().as_str(), "TIMINGS");
    }

    #[test]
    fn test_empty_command() {
        assert!(Command::new("").is_empty());
        assert_eq!(Command::new("").to_frame(), b"\n");
    }
}
