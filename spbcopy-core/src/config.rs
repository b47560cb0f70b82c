//! Resolution of the target service address.
//!
//! The tool reads `~/.spbcopy.ini` when it exists and falls back to the
//! built-in defaults otherwise. The two sources are never merged: once a file
//! is found, every key must come from it.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::{Ini, Properties};
use tracing::{debug, info};

use crate::error::{SpbcopyError, SpbcopyResult};

pub const DEFAULT_HOST: &str = "192.168.99.1";
pub const DEFAULT_PORT: u16 = 9099;
pub const DEFAULT_MAX_BUFFER_SIZE: i64 = 2 * 1024 * 1024;

/// File name looked up in the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".spbcopy.ini";
/// The only section the tool reads.
pub const CONFIG_SECTION: &str = "base";

const KEY_PORT: &str = "port";
const KEY_MAX_BUFFER_SIZE: &str = "maxbuffersize";
const KEY_HOST: &str = "Host";

/// Where to send clipboard content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Address or hostname of the clipboard service.
    pub host: String,
    /// TCP port of the clipboard service.
    pub port: u16,
    /// Reserved for limiting input size. Stored as written, not enforced.
    pub max_buffer_size: i64,
}

impl ClientConfig {
    /// Loads the configuration from `path`, or returns the defaults when no
    /// file exists there.
    pub fn load(path: &Path) -> SpbcopyResult<Self> {
        if !path.exists() {
            debug!(path = ?path, "No config file found, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|source| SpbcopyError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ini(&ini)?;
        info!(
            path = ?path,
            host = %config.host,
            port = config.port,
            max_buffer_size = config.max_buffer_size,
            "Loaded config file"
        );
        Ok(config)
    }

    /// Builds a configuration from an already parsed INI document.
    pub fn from_ini(ini: &Ini) -> SpbcopyResult<Self> {
        let section = ini
            .section(Some(CONFIG_SECTION))
            .ok_or(SpbcopyError::ConfigSection(CONFIG_SECTION))?;

        let port = parse_int(section, KEY_PORT)?;
        let max_buffer_size = parse_int(section, KEY_MAX_BUFFER_SIZE)?;
        let host = required(section, KEY_HOST)?.to_string();

        Ok(ClientConfig {
            host,
            port,
            max_buffer_size,
        })
    }

    /// The service endpoint, `http://<host>:<port>` with no path appended.
    pub fn api_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
        }
    }
}

/// `$HOME/.spbcopy.ini`, or `.spbcopy.ini` in the working directory when
/// `HOME` is not set.
pub fn default_config_path() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}

fn required<'a>(section: &'a Properties, key: &'static str) -> SpbcopyResult<&'a str> {
    section.get(key).ok_or_else(|| SpbcopyError::ConfigKey {
        key,
        reason: format!("key not found in section [{}]", CONFIG_SECTION),
    })
}

fn parse_int<T>(section: &Properties, key: &'static str) -> SpbcopyResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = required(section, key)?;
    raw.trim().parse::<T>().map_err(|e| SpbcopyError::ConfigKey {
        key,
        reason: format!("invalid integer {:?}: {}", raw, e),
    })
}
