use crate::core::link::PortSource;

/// Lists attached serial devices via the serialport crate
pub struct SystemPortSource;

impl PortSource for SystemPortSource {
    fn enumerate(&self) -> Result<Vec<String>, serialport::Error> {
        let ports = serialport::available_ports()?;
        Ok(ports.into_iter().map(|p| p.port_name).collect())
    }
}
