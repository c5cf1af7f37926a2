//! Configuration module.
//!
//! Settings resolve through defaults, a TOML file, environment variables,
//! and command-line flags, in increasing precedence.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ConfigError, ConfigFile, ResolvedConfig,
};
