//! # PCF Dump Configuration
//!
//! Layered settings for hosts that drive the PCF codec: how messages are
//! rendered, how input files are found and read, and the default log filter.
//!
//! ## Sources, lowest priority first
//!
//! - Built-in defaults (verbose, formatted names, little-endian input)
//! - An optional TOML file
//! - `PCF_`-prefixed environment variables, `__` between section and key
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pcf_config::DumpConfig;
//!
//! let config = DumpConfig::load(None).unwrap();
//! let options = config.render_options();
//! let encoding = config.encoding();
//! ```

pub mod dump_config;

pub use dump_config::{
    load_config, ByteOrder, DumpConfig, InputSection, LoggingSection, RenderSection, ENV_PREFIX,
};
