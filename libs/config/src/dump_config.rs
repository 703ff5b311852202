//! Dump Configuration Module
//!
//! Loads rendering, input and logging settings for the PCF dump host.
//! Sources are layered: built-in defaults, then an optional TOML file, then
//! `PCF_`-prefixed environment variables (`PCF_RENDER__MODE=terse`).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use config_crate::{Config, Environment, File, FileFormat};
use pcf_codec::{
    Application, ByteStyle, Layout, NameStyle, RenderMode, RenderOptions, DEFAULT_MAX_DEPTH,
};
use pcf_types::Encoding;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PCF";

/// Top-level configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DumpConfig {
    pub render: RenderSection,
    pub input: InputSection,
    pub logging: LoggingSection,
}

/// How messages are rendered
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenderSection {
    pub mode: RenderMode,
    pub name_style: NameStyle,
    pub byte_style: ByteStyle,
    /// Field-table set; inferred from each message header when unset
    pub application: Option<Application>,
    /// Object name selecting operation groups, `*` suffix for a prefix match
    pub object_filter: Option<String>,
    pub colon_column: usize,
    pub indent_width: usize,
    pub max_depth: usize,
}

impl Default for RenderSection {
    fn default() -> Self {
        let layout = Layout::default();
        Self {
            mode: RenderMode::default(),
            name_style: NameStyle::default(),
            byte_style: ByteStyle::default(),
            application: None,
            object_filter: None,
            colon_column: layout.colon_column,
            indent_width: layout.indent_width,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Byte order of input buffers
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl From<ByteOrder> for Encoding {
    fn from(order: ByteOrder) -> Self {
        match order {
            ByteOrder::Little => Encoding::Little,
            ByteOrder::Big => Encoding::Big,
        }
    }
}

/// Where message files come from
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputSection {
    pub byte_order: ByteOrder,
    /// Directory scanned when no files are named on the command line
    pub directory: Option<PathBuf>,
    /// File extension picked up from `directory`
    pub extension: String,
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::default(),
            directory: None,
            extension: "pcf".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingSection {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl DumpConfig {
    /// Load defaults, then `path` (required when given), then the process
    /// environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, default_environment())
    }

    /// As [`DumpConfig::load`] with an explicit environment source
    pub fn load_with_env(path: Option<&Path>, environment: Environment) -> Result<Self> {
        // Missing keys fall back to the serde defaults
        let mut builder = Config::builder();

        if let Some(path) = path {
            info!("Loading dump config: {:?}", path);
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let config = builder
            .add_source(environment)
            .build()
            .context("Failed to build configuration")?;

        let mut loaded: DumpConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        loaded.expand_paths()?;
        loaded.validate()?;

        debug!(?loaded, "configuration loaded");
        Ok(loaded)
    }

    /// Expand `~` and `$VARS` in path values
    pub fn expand_paths(&mut self) -> Result<()> {
        if let Some(directory) = &self.input.directory {
            let raw = directory.to_string_lossy();
            let expanded =
                shellexpand::full(&raw).context("Failed to expand input directory")?;
            self.input.directory = Some(PathBuf::from(expanded.as_ref()));
        }
        Ok(())
    }

    /// Reject settings the renderer cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.render.max_depth == 0 {
            bail!("render.max_depth must be at least 1");
        }
        if self.render.colon_column == 0 {
            bail!("render.colon_column must be at least 1");
        }
        if matches!(&self.render.object_filter, Some(f) if f.trim().is_empty()) {
            bail!("render.object_filter must not be blank");
        }
        Ok(())
    }

    pub fn encoding(&self) -> Encoding {
        self.input.byte_order.into()
    }

    /// Options for the codec's decode entry points
    pub fn render_options(&self) -> RenderOptions {
        let render = &self.render;
        let mut options = RenderOptions::default()
            .with_mode(render.mode)
            .with_name_style(render.name_style)
            .with_byte_style(render.byte_style)
            .with_layout(Layout {
                colon_column: render.colon_column,
                indent_width: render.indent_width,
            })
            .with_max_depth(render.max_depth);
        if let Some(application) = render.application {
            options = options.with_application(application);
        }
        if let Some(filter) = &render.object_filter {
            options = options.with_object_filter(filter);
        }
        options
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

fn default_environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Load configuration from an optional file
pub fn load_config(path: Option<&Path>) -> Result<DumpConfig> {
    DumpConfig::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env() -> Environment {
        default_environment().source(Some(HashMap::new()))
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        default_environment().source(Some(map))
    }

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = DumpConfig::load_with_env(None, no_env()).unwrap();
        assert_eq!(config, DumpConfig::default());
        assert_eq!(config.encoding(), Encoding::Little);

        let options = config.render_options();
        assert!(options.is_verbose());
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert!(options.application.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = config_file(
            r#"
[render]
mode = "terse"
name_style = "unformatted"
application = "accounting"
object_filter = "APP.*"

[input]
byte_order = "big"
"#,
        );
        let config = DumpConfig::load_with_env(Some(file.path()), no_env()).unwrap();
        assert_eq!(config.render.mode, RenderMode::Terse);
        assert_eq!(config.render.name_style, NameStyle::Unformatted);
        assert_eq!(config.render.application, Some(Application::Accounting));
        assert_eq!(config.encoding(), Encoding::Big);
        // Untouched keys keep their defaults
        assert_eq!(config.render.colon_column, 32);
        assert_eq!(config.logging.level, "warn");

        let options = config.render_options();
        assert!(options.object_filter.unwrap().matches(b"APP.IN   "));
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = config_file("[render]\nmode = \"terse\"\ncolon_column = 40\n");
        let config = DumpConfig::load_with_env(
            Some(file.path()),
            env(&[("PCF_RENDER__MODE", "verbose"), ("PCF_LOGGING__LEVEL", "debug")]),
        )
        .unwrap();
        assert_eq!(config.render.mode, RenderMode::Verbose);
        assert_eq!(config.render.colon_column, 40);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(DumpConfig::load_with_env(Some(&missing), no_env()).is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = config_file("[render]\nmax_depth = 0\n");
        let error = DumpConfig::load_with_env(Some(file.path()), no_env()).unwrap_err();
        assert!(error.to_string().contains("max_depth"));

        let file = config_file("[render]\nmode = \"loud\"\n");
        assert!(DumpConfig::load_with_env(Some(file.path()), no_env()).is_err());
    }

    #[test]
    fn test_directory_expansion() {
        let file = config_file("[input]\ndirectory = \"~/trace\"\n");
        let config = DumpConfig::load_with_env(Some(file.path()), no_env()).unwrap();
        let directory = config.input.directory.unwrap();
        assert!(directory.ends_with("trace"));
        if std::env::var_os("HOME").is_some() {
            assert!(!directory.to_string_lossy().starts_with('~'));
        }
    }

    #[test]
    fn test_toml_output_reloads() {
        let mut config = DumpConfig::default();
        config.render.byte_style = ByteStyle::Dump;
        config.render.application = Some(Application::Events);

        let file = config_file(&config.to_toml().unwrap());
        let reloaded = DumpConfig::load_with_env(Some(file.path()), no_env()).unwrap();
        assert_eq!(reloaded, config);
    }
}
