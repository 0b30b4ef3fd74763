use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MailplateError, Result};

/// Default directory the bundler searches.
pub const DEFAULT_INPUT_DIR: &str = "./templates";
/// Default bundle written by the bundler.
pub const DEFAULT_OUTPUT_FILE: &str = "compiled-templates.json";
/// Files ending in this suffix are treated as templates.
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".jinja";

/// Engine options shared by both renderers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RendererOptions {
    /// Relative template paths are resolved against this directory.
    pub template_root: Option<PathBuf>,

    /// HTML-escape interpolated values. On unless explicitly disabled.
    pub autoescape: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            template_root: None,
            autoescape: true,
        }
    }
}

impl RendererOptions {
    pub(crate) fn resolve_path(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        match &self.template_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Load renderer options from a TOML file.
pub fn load_options(path: &Path) -> Result<RendererOptions> {
    let content = std::fs::read_to_string(path).map_err(|e| MailplateError::Io {
        context: format!("reading {}", path.display()),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| MailplateError::OptionsParse { source: e })
}
