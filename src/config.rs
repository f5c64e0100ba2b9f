use crate::error;
use crate::net::client::Timeouts;
use crate::schemas::auth::Role;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::time::Duration;

/// Client configuration from a `.env`-style key=value file. The server
/// endpoint and timeout budgets are data here, not constants in the
/// exchange code.
pub struct ConfigData {
    file_name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub role: Option<Role>,
    pub registered: bool,
    pub connect_timeout_ms: u64,
    pub write_timeout_ms: u64,
    pub read_timeout_ms: u64,
}

impl Default for ConfigData {
    fn default() -> Self {
        let timeouts = Timeouts::default();
        Self {
            file_name: String::new(),
            host: "127.0.0.1".to_string(),
            port: 5555,
            username: String::new(),
            password: String::new(),
            role: None,
            registered: false,
            connect_timeout_ms: timeouts.connect.as_millis() as u64,
            write_timeout_ms: timeouts.write.as_millis() as u64,
            read_timeout_ms: timeouts.read.as_millis() as u64,
        }
    }
}

impl ConfigData {
    pub fn load(file_name: &Path) -> anyhow::Result<Self> {
        let mut config = ConfigData::default();
        let file = File::open(file_name)?;
        let reader = BufReader::new(file);
        config.file_name = file_name.to_string_lossy().to_string();

        for line in reader.lines() {
            let line = line?;

            if let Some((key_original, value_original)) = line.split_once('=') {
                let key = key_original.trim().to_lowercase();
                let value = value_original.trim();

                match key.as_str() {
                    "host" => config.host = value.to_string(),
                    "port" => parse_into(&mut config.port, &key, value, &config.file_name),
                    "username" => config.username = value.to_string(),
                    "password" => config.password = value.to_string(),
                    "role" => {
                        if value.is_empty() {
                            config.role = None;
                        } else {
                            match value.parse::<Role>() {
                                Ok(role) => config.role = Some(role),
                                Err(e) => {
                                    error!("Failed to parse 'role' in {}: {}", config.file_name, e);
                                }
                            }
                        }
                    }
                    "registered" => {
                        parse_into(&mut config.registered, &key, value, &config.file_name)
                    }
                    "connect_timeout_ms" => {
                        parse_into(&mut config.connect_timeout_ms, &key, value, &config.file_name)
                    }
                    "write_timeout_ms" => {
                        parse_into(&mut config.write_timeout_ms, &key, value, &config.file_name)
                    }
                    "read_timeout_ms" => {
                        parse_into(&mut config.read_timeout_ms, &key, value, &config.file_name)
                    }
                    _ => {
                        error!(
                            "Invalid key found in {}: {}",
                            config.file_name, key_original
                        );
                    }
                }
            }
        }

        Ok(config)
    }

    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            connect: Duration::from_millis(self.connect_timeout_ms),
            write: Duration::from_millis(self.write_timeout_ms),
            read: Duration::from_millis(self.read_timeout_ms),
        }
    }

    /// Rewrites one key in the backing file, appending it when missing,
    /// and mirrors the new value into this struct.
    pub fn replace<T: std::fmt::Display>(
        &mut self,
        key: &str,
        new_value: &T,
    ) -> anyhow::Result<()> {
        let file = File::open(&self.file_name)?;
        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        let mut found = false;

        for line_result in reader.lines() {
            let line = line_result?;

            if let Some((key_original, _)) = line.split_once('=') {
                if key_original.trim().to_lowercase() == key.to_lowercase() {
                    lines.push(format!("{}={}", key_original, new_value));
                    found = true;
                } else {
                    lines.push(line);
                }
            } else {
                lines.push(line);
            }
        }

        if !found {
            lines.push(format!("{}={}", key, new_value));
        }

        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.file_name)?;

        for line in lines {
            writeln!(file, "{}", line)?;
        }

        let value = new_value.to_string();
        match key.to_lowercase().as_str() {
            "host" => self.host = value,
            "port" => parse_into(&mut self.port, key, &value, &self.file_name),
            "username" => self.username = value,
            "password" => self.password = value,
            "role" => match value.parse::<Role>() {
                Ok(role) => self.role = Some(role),
                Err(e) => error!("Failed to parse 'role' in {}: {}", self.file_name, e),
            },
            "registered" => parse_into(&mut self.registered, key, &value, &self.file_name),
            "connect_timeout_ms" => {
                parse_into(&mut self.connect_timeout_ms, key, &value, &self.file_name)
            }
            "write_timeout_ms" => {
                parse_into(&mut self.write_timeout_ms, key, &value, &self.file_name)
            }
            "read_timeout_ms" => {
                parse_into(&mut self.read_timeout_ms, key, &value, &self.file_name)
            }
            _ => {
                error!("Invalid key found in {}: {}", self.file_name, key);
            }
        }

        Ok(())
    }
}

fn parse_into<T: std::str::FromStr>(slot: &mut T, key: &str, value: &str, file_name: &str) {
    match value.parse::<T>() {
        Ok(parsed) => *slot = parsed,
        Err(_) => {
            error!(
                "Failed to parse '{}' in {}: got {}",
                key, file_name, value
            );
        }
    }
}
