use serde::{Deserialize, Serialize};

use crate::platform;

pub const DEFAULT_VERSION: &str = "1.1.3";
pub const DEFAULT_REPO: &str = "https://s3.amazonaws.com/instrumentald";
pub const DEFAULT_CURL_PATH: &str = "/usr/bin/curl";
pub const DEFAULT_WGET_PATH: &str = "/usr/bin/wget";
pub const DEFAULT_INIT_FILE: &str = "/etc/init.d/instrumentald";

const WINDOWS_DESTINATION_DIR: &str = r"C:\Program Files (x86)\Instrumental Tools";
const WINDOWS_CONFIG_FILE: &str = r"C:\Program Files (x86)\Instrumental Tools\etc\instrumental.toml";
const WINDOWS_SCRIPT_DIR: &str = r"C:\Program Files (x86)\Instrumental Tools\scripts";

const POSIX_DESTINATION_DIR: &str = "/opt/instrumentald/";
const POSIX_CONFIG_FILE: &str = "/etc/instrumental.toml";
const POSIX_SCRIPT_DIR: &str = "/opt/instrumentald/.scripts";
const POSIX_PID_FILE: &str = "/opt/instrumentald/instrumentald.pid";
const POSIX_LOG_FILE: &str = "/opt/instrumentald/instrumentald.log";
const POSIX_USER: &str = "nobody";

/// Resolved attribute set handed to the installer, the config renderer and
/// the process manager for a single provisioning run.
///
/// Fields that do not apply to a platform are `None`, never empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConfigurationDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub version: String,
    pub repo: String,
    pub curl_path: String,
    pub wget_path: String,
    pub dest_init_file: String,
    pub enable_scripts: bool,
    pub destination_dir: String,
    pub config_file: String,
    pub script_dir: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub use_local: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
}

/// Resolves the defaults for `platform_family`.
///
/// Only the exact string `"windows"` selects the Windows layout. Every other
/// value, including unknown or empty families, gets the POSIX layout.
pub fn resolve(platform_family: &str) -> ConfigurationDefaults {
    let windows = platform::is_windows(platform_family);
    let branch = if windows { "windows" } else { "posix" };
    tracing::debug!(family = platform_family, branch, "resolving instrumentald defaults");

    let (destination_dir, config_file, script_dir, pid_file, log_file, user) = if windows {
        (
            WINDOWS_DESTINATION_DIR,
            WINDOWS_CONFIG_FILE,
            WINDOWS_SCRIPT_DIR,
            None,
            None,
            None,
        )
    } else {
        (
            POSIX_DESTINATION_DIR,
            POSIX_CONFIG_FILE,
            POSIX_SCRIPT_DIR,
            Some(POSIX_PID_FILE),
            Some(POSIX_LOG_FILE),
            Some(POSIX_USER),
        )
    };

    ConfigurationDefaults {
        api_key: None,
        version: DEFAULT_VERSION.to_string(),
        repo: DEFAULT_REPO.to_string(),
        curl_path: DEFAULT_CURL_PATH.to_string(),
        wget_path: DEFAULT_WGET_PATH.to_string(),
        dest_init_file: DEFAULT_INIT_FILE.to_string(),
        enable_scripts: false,
        destination_dir: destination_dir.to_string(),
        config_file: config_file.to_string(),
        script_dir: script_dir.to_string(),
        pid_file: pid_file.map(str::to_string),
        log_file: log_file.map(str::to_string),
        user: user.map(str::to_string),
        use_local: false,
        local_path: None,
    }
}
