pub mod config;
pub mod error;
pub mod path;
pub mod walk;

pub use config::{Config, FilterConfig};
pub use error::{Error, Result};
pub use path::{CONFIG_ENV_VAR, expand_tilde, normalize_path, resolve_config_path};
pub use walk::{ExclusionRule, ExtensionMatch, ProjectWalker, WalkEntry, WalkFilter};
