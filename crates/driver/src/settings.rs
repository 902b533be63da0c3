use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub(crate) struct Settings {
    pub client_name: String,
    /// Surface to host.
    pub port_name: String,
    /// Host to surface.
    pub port_name_in: String,
    /// Answer host pings. A host that gets no reply treats the surface as
    /// offline.
    pub reply_to_ping: bool,
    /// Send a system reset once the ports are up.
    pub reset_on_start: bool,
    /// Default log filter, "off" to "trace". `RUST_LOG` takes precedence.
    pub log_level: String,
    /// Log the large and time display text whenever it changes.
    pub dump_displays: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client_name: "HUI Surface".to_string(),
            port_name: "HUI Surface Out".to_string(),
            port_name_in: "HUI Surface In".to_string(),
            reply_to_ping: true,
            reset_on_start: true,
            log_level: "info".to_string(),
            dump_displays: false,
        }
    }
}

impl Settings {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.client_name.is_empty() {
            return Err("Client name must not be empty".to_string());
        }

        if self.port_name.is_empty() {
            return Err("Port name must not be empty".to_string());
        }

        if self.port_name_in.is_empty() {
            return Err("Input port name must not be empty".to_string());
        }

        if self.port_name == self.port_name_in {
            return Err("Input and output ports need different names".to_string());
        }

        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(format!(
                "log_level must be one of: off, error, warn, info, debug, trace (found \"{}\")",
                self.log_level
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Settings::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_names() {
        let settings = Settings {
            port_name_in: String::new(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let settings = Settings {
            log_level: "loud".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().unwrap_err().contains("loud"));

        let settings = Settings {
            log_level: "DEBUG".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Ok(()));
    }
}
