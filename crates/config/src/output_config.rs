//! Output section of the manifest

use crate::validation::{ConfigSection, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where and how the rendered feed is written
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Feed file, relative to the manifest directory. Stdout when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Emit `<?xml ...?>` at the top of the feed
    pub xml_declaration: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            xml_declaration: true,
        }
    }
}

impl OutputConfig {
    /// Resolves the output path against the manifest directory
    pub fn resolve(&self, base_dir: &Path) -> Option<PathBuf> {
        self.path.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                base_dir.join(path)
            }
        })
    }
}

impl ConfigSection for OutputConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        match &self.path {
            Some(path) if path.as_os_str().is_empty() => Err(vec![ValidationError::new(
                "output.path",
                "must not be empty",
            )]),
            _ => Ok(()),
        }
    }

    fn section_name(&self) -> &'static str {
        "output"
    }
}
