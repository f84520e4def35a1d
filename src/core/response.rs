use std::fmt;
use std::io;

/// Failure detail carried inside a write-failed response
///
/// Kept structured so callers can match on the kind instead of
/// parsing a message string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFault {
    pub kind: io::ErrorKind,
    pub message: String,
}

impl From<io::Error> for TransportFault {
    fn from(err: io::Error) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for TransportFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Outcome of one executed command
///
/// Only collected lines and the empty window count as device output;
/// the other variants report transport conditions the caller renders
/// directly. None of them is a process-level error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Non-empty lines received within the window, in arrival order
    Lines(Vec<String>),
    /// The window elapsed without a single line
    Empty,
    /// No port is open
    NotConnected,
    /// The command never reached the device
    WriteFailed(TransportFault),
}

impl Response {
    pub fn is_not_connected(&self) -> bool {
        matches!(self, Response::NotConnected)
    }

    /// Collected lines, empty for every other variant
    pub fn lines(&self) -> &[String] {
        match self {
            Response::Lines(lines) => lines,
            _ => &[],
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Lines(lines) => write!(f, "{}", lines.join("\n")),
            Response::Empty => write!(f, "No response"),
            Response::NotConnected => write!(f, "Not connected"),
            Response::WriteFailed(fault) => write!(f, "Write failed: {}", fault),
        }
    }
}

/// Assembles newline-terminated lines out of raw read chunks
///
/// Bytes arrive in arbitrary chunk sizes; complete lines are decoded,
/// trimmed and kept in arrival order, blank lines are dropped. A
/// fragment without a terminator stays pending until `finish`.
#[derive(Debug, Default)]
pub struct LineAccumulator {
    pending: Vec<u8>,
    lines: Vec<String>,
}

impl LineAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, bytes: &[u8]) {
        self.pending.extend_from_slice(bytes);
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.pending.drain(..=pos).collect();
            self.push_line(&raw);
        }
    }

    /// Flush the trailing fragment and hand back the lines
    pub fn finish(mut self) -> Vec<String> {
        if !self.pending.is_empty() {
            let raw = std::mem::take(&mut self.pending);
            self.push_line(&raw);
        }
        self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn push_line(&mut self, raw: &[u8]) {
        let text = decode_text(raw);
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            self.lines.push(trimmed.to_string());
        }
    }
}

/// Decode bytes as UTF-8, dropping undecodable runs
///
/// The device occasionally emits garbage during resets; those bytes
/// are skipped rather than replaced, matching the wire protocol's
/// ignore-errors text handling.
pub fn decode_text(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(text) => {
                out.push_str(text);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or(""));
                match err.error_len() {
                    Some(skip) => rest = &after[skip..],
                    None => break,
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_drops_invalid_runs() {
        assert_eq!(decode_text(b"HEL\xFF\xFELO"), "HELLO");
        assert_eq!(decode_text(b"OK"), "OK");
        assert_eq!(decode_text(b""), "");
    }

    #[test]
    fn test_decode_drops_truncated_tail() {
        // First two bytes of a three-byte sequence, then nothing
        assert_eq!(decode_text(b"DONE\xE2\x82"), "DONE");
    }

    #[test]
    fn test_accumulator_splits_and_trims() {
        let mut acc = LineAccumulator::new();
        acc.extend(b"READY\r\n  SENDING  \n\n");
        assert_eq!(acc.line_count(), 2);
        assert_eq!(acc.finish(), vec!["READY".to_string(), "SENDING".to_string()]);
    }

    #[test]
    fn test_accumulator_keeps_fragment_until_finish() {
        let mut acc = LineAccumulator::new();
        acc.extend(b"DO");
        acc.extend(b"NE\nPART");
        assert_eq!(acc.line_count(), 1);
        assert_eq!(acc.finish(), vec!["DONE".to_string(), "PART".to_string()]);
    }

    #[test]
    fn test_accumulator_drops_blank_lines() {
        let mut acc = LineAccumulator::new();
        acc.extend(b"\n   \n\r\n");
        assert_eq!(acc.finish(), Vec::<String>::new());
    }

    #[test]
    fn test_response_display() {
        let lines = Response::Lines(vec!["A".to_string(), "B".to_string()]);
        assert_eq!(lines.to_string(), "A\nB");
        assert_eq!(Response::Empty.to_string(), "No response");
        assert_eq!(Response::NotConnected.to_string(), "Not connected");

        let fault = TransportFault::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe gone"));
        let failed = Response::WriteFailed(fault);
        assert_eq!(failed.to_string(), "Write failed: pipe gone");
    }

    #[test]
    fn test_response_helpers() {
        assert!(Response::NotConnected.is_not_connected());
        assert!(!Response::Empty.is_not_connected());
        let resp = Response::Lines(vec!["X".to_string()]);
        assert_eq!(resp.lines(), ["X".to_string()]);
        assert!(Response::Empty.lines().is_empty());
    }

    #[test]
    fn test_transport_fault_keeps_kind() {
        let fault = TransportFault::from(io::Error::new(io::ErrorKind::TimedOut, "slow"));
        assert_eq!(fault.kind, io::ErrorKind::TimedOut);
        assert_eq!(fault.message, "slow");
    }

    proptest! {
        #[test]
        fn decode_valid_utf8_is_identity(s in ".*") {
            prop_assert_eq!(decode_text(s.as_bytes()), s);
        }

        #[test]
        fn chunk_boundaries_do_not_affect_lines(
            data in proptest::collection::vec(any::<u8>(), 0..200),
            cut in any::<prop::sample::Index>(),
        ) {
            let split = if data.is_empty() { 0 } else { cut.index(data.len()) };
            let mut whole = LineAccumulator::new();
            whole.extend(&data);
            let mut parts = LineAccumulator::new();
            parts.extend(&data[..split]);
            parts.extend(&data[split..]);
            prop_assert_eq!(whole.finish(), parts.finish());
        }
    }
}
