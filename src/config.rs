//! Tool configuration.
//!
//! One file, one section, one knob: `xdebug.restart_valet` decides whether
//! a successful enable/disable/toggle against the default (web) variant
//! also restarts Laravel Valet. The file lives in the platform config
//! directory (`~/.config/xdebugctl/config.toml` on Linux), is entirely
//! optional, and `XDEBUGCTL_*` environment variables override it.

use std::path::PathBuf;

use confique::Config;
use serde::Deserialize;

use crate::error::XdebugError;

#[derive(Config, Deserialize, Debug, PartialEq)]
pub struct ToolConfig {
    /// Settings scoped to the Xdebug directive.
    #[config(nested)]
    pub xdebug: XdebugSection,
}

#[derive(Config, Deserialize, Debug, PartialEq)]
pub struct XdebugSection {
    /// Restart Valet after changing the directive in the default ini.
    #[config(default = false, env = "XDEBUGCTL_RESTART_VALET")]
    pub restart_valet: bool,
}

/// Platform config file path (`<config dir>/xdebugctl/config.toml`), if a
/// config directory can be determined at all.
pub fn config_file() -> Option<PathBuf> {
    let proj = directories::ProjectDirs::from("", "", "xdebugctl")?;
    Some(proj.config_dir().join("config.toml"))
}

/// Load the tool config, treating a missing file as all-defaults.
pub fn load() -> Result<ToolConfig, XdebugError> {
    let mut builder = ToolConfig::builder().env();
    if let Some(path) = config_file() {
        // confique skips nonexistent files registered via file().
        builder = builder.file(path);
    }
    Ok(builder.load()?)
}
