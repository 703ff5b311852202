//! Render options and per-session render state
//!
//! `RenderOptions` is read-only for the duration of a decode call.
//! `RenderState` belongs to the caller and carries what must persist
//! across messages of one output stream (terse heading, group numbering).

use pcf_types::trim_fixed;
use serde::{Deserialize, Serialize};

use crate::fields::Application;
use crate::format::Layout;
pub use crate::names::NameStyle;

/// Default recursion guard for nested groups
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Every element, groups expanded recursively
    #[default]
    Verbose,
    /// One summary line per group
    Terse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteStyle {
    /// Single contiguous hex string
    #[default]
    Compact,
    /// 16-byte rows with offsets and an ASCII column
    Dump,
}

/// Object-name selection; a trailing `*` makes it a prefix match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    pattern: String,
    generic: bool,
}

impl NameFilter {
    pub fn new(pattern: &str) -> Self {
        let trimmed = pattern.trim();
        match trimmed.strip_suffix('*') {
            Some(prefix) => Self {
                pattern: prefix.to_string(),
                generic: true,
            },
            None => Self {
                pattern: trimmed.to_string(),
                generic: false,
            },
        }
    }

    pub fn is_generic(&self) -> bool {
        self.generic
    }

    /// Match a raw fixed-width name field
    pub fn matches(&self, name: &[u8]) -> bool {
        let name = trim_fixed(name);
        let pattern = self.pattern.as_bytes();
        if self.generic {
            name.starts_with(pattern)
        } else {
            name == pattern
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub name_style: NameStyle,
    pub byte_style: ByteStyle,
    /// Field-table set; `None` picks one from the message header
    pub application: Option<Application>,
    pub object_filter: Option<NameFilter>,
    pub layout: Layout,
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            name_style: NameStyle::default(),
            byte_style: ByteStyle::default(),
            application: None,
            object_filter: None,
            layout: Layout::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderOptions {
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_name_style(mut self, style: NameStyle) -> Self {
        self.name_style = style;
        self
    }

    pub fn with_byte_style(mut self, style: ByteStyle) -> Self {
        self.byte_style = style;
        self
    }

    pub fn with_application(mut self, application: Application) -> Self {
        self.application = Some(application);
        self
    }

    pub fn with_object_filter(mut self, pattern: &str) -> Self {
        self.object_filter = Some(NameFilter::new(pattern));
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn is_verbose(&self) -> bool {
        self.mode == RenderMode::Verbose
    }
}

/// Caller-owned state that outlives a single decode call
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    /// Terse column heading already written to this stream
    pub header_emitted: bool,
    pub group_sequence: u32,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_group_sequence(&mut self) -> u32 {
        self.group_sequence += 1;
        self.group_sequence
    }
}
