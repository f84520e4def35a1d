use crate::core::link::PortSource;
use crate::domain::error::{MorseComError, MorseComResult};
use tracing::{debug, warn};

/// First port of a snapshot, or no selection for an empty one
pub fn default_selection(ports: &[String]) -> Option<&String> {
    ports.first()
}

/// Tracks attached serial ports and the operator's current choice
///
/// Discovery is best-effort: enumeration failures yield an empty list
/// instead of an error.
pub struct PortRegistry {
    source: Box<dyn PortSource>,
    ports: Vec<String>,
    selected: Option<String>,
}

impl PortRegistry {
    pub fn new(source: Box<dyn PortSource>) -> Self {
        Self {
            source,
            ports: Vec::new(),
            selected: None,
        }
    }

    /// Query the OS for currently attached ports
    ///
    /// Does not touch the stored snapshot or selection.
    pub fn list_ports(&self) -> Vec<String> {
        match self.source.enumerate() {
            Ok(ports) => {
                debug!("Found {} serial port(s)", ports.len());
                ports
            }
            Err(e) => {
                warn!("Port enumeration failed, treating as no ports: {}", e);
                Vec::new()
            }
        }
    }

    /// Re-enumerate and reset the selection to the default
    pub fn refresh(&mut self) -> &[String] {
        self.ports = self.list_ports();
        self.selected = default_selection(&self.ports).cloned();
        &self.ports
    }

    /// Ports as of the last refresh
    pub fn ports(&self) -> &[String] {
        &self.ports
    }

    /// Switch the selection to another port from the snapshot
    pub fn select(&mut self, port: &str) -> MorseComResult<()> {
        if self.ports.iter().any(|p| p == port) {
            self.selected = Some(port.to_string());
            Ok(())
        } else {
            Err(MorseComError::UnknownPort(port.to_string()))
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSource {
        ports: Vec<String>,
    }

    impl PortSource for StubSource {
        fn enumerate(&self) -> Result<Vec<String>, serialport::Error> {
            Ok(self.ports.clone())
        }
    }

    struct FailingSource;

    impl PortSource for FailingSource {
        fn enumerate(&self) -> Result<Vec<String>, serialport::Error> {
            Err(serialport::Error::new(
                serialport::ErrorKind::Unknown,
                "enumeration exploded",
            ))
        }
    }

    fn stub_registry(ports: &[&str]) -> PortRegistry {
        PortRegistry::new(Box::new(StubSource {
            ports: ports.iter().map(|p| p.to_string()).collect(),
        }))
    }

    #[test]
    fn test_default_selection_is_first_port() {
        let ports = vec!["COM3".to_string(), "COM5".to_string()];
        assert_eq!(default_selection(&ports), Some(&"COM3".to_string()));
    }

    #[test]
    fn test_default_selection_empty_is_none() {
        assert_eq!(default_selection(&[]), None);
    }

    #[test]
    fn test_refresh_selects_first_port() {
        let mut registry = stub_registry(&["COM3", "COM5"]);
        assert_eq!(registry.selected(), None);
        let ports = registry.refresh().to_vec();
        assert_eq!(ports, vec!["COM3".to_string(), "COM5".to_string()]);
        assert_eq!(registry.selected(), Some("COM3"));
    }

    #[test]
    fn test_refresh_with_no_ports_clears_selection() {
        let mut registry = stub_registry(&["COM3"]);
        registry.refresh();
        assert_eq!(registry.selected(), Some("COM3"));

        registry.source = Box::new(StubSource { ports: Vec::new() });
        registry.refresh();
        assert_eq!(registry.selected(), None);
    }

    #[test]
    fn test_enumeration_failure_yields_empty_list() {
        let mut registry = PortRegistry::new(Box::new(FailingSource));
        assert!(registry.list_ports().is_empty());
        registry.refresh();
        assert!(registry.ports().is_empty());
        assert_eq!(registry.selected(), None);
    }

    #[test]
    fn test_select_known_port() {
        let mut registry = stub_registry(&["COM3", "COM5"]);
        registry.refresh();
        registry.select("COM5").unwrap();
        assert_eq!(registry.selected(), Some("COM5"));
    }

    #[test]
    fn test_select_unknown_port_is_rejected() {
        let mut registry = stub_registry(&["COM3"]);
        registry.refresh();
        let err = registry.select("COM9").unwrap_err();
        assert!(matches!(err, MorseComError::UnknownPort(p) if p == "COM9"));
        assert_eq!(registry.selected(), Some("COM3"));
    }
}
