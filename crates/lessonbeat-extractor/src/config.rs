//! Configuration for text extraction

use crate::command::CommandExtractor;
use crate::docx::DocxExtractor;
use crate::text::TextExtractor;
use serde::{Deserialize, Serialize};

/// Member of the container holding the document body
pub const DEFAULT_BODY_MEMBER: &str = "word/document.xml";

/// Helper used by the command backend to decompress the container
pub const DEFAULT_UNZIP_PROGRAM: &str = "unzip";

/// Helper used by the command backend to strip markup
pub const DEFAULT_SED_PROGRAM: &str = "sed";

/// Which implementation turns documents into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorBackend {
    /// Read the container in-process
    #[default]
    Native,
    /// Pipe through the external `unzip` and `sed` helpers
    Command,
}

/// Configuration for text extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Extraction backend
    #[serde(default)]
    pub backend: ExtractorBackend,

    /// Container member holding the body markup
    #[serde(default = "default_body_member")]
    pub body_member: String,

    /// Decompression helper (command backend only)
    #[serde(default = "default_unzip_program")]
    pub unzip_program: String,

    /// Markup filter helper (command backend only)
    #[serde(default = "default_sed_program")]
    pub sed_program: String,
}

fn default_body_member() -> String {
    DEFAULT_BODY_MEMBER.to_string()
}

fn default_unzip_program() -> String {
    DEFAULT_UNZIP_PROGRAM.to_string()
}

fn default_sed_program() -> String {
    DEFAULT_SED_PROGRAM.to_string()
}

impl Default for ExtractorConfig {
    /// In-process extraction of `word/document.xml`
    fn default() -> Self {
        Self {
            backend: ExtractorBackend::Native,
            body_member: default_body_member(),
            unzip_program: default_unzip_program(),
            sed_program: default_sed_program(),
        }
    }
}

impl ExtractorConfig {
    /// Preset using the external helper pipeline
    pub fn command() -> Self {
        Self {
            backend: ExtractorBackend::Command,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.body_member.trim().is_empty() {
            return Err("body_member must not be empty".to_string());
        }
        if self.backend == ExtractorBackend::Command {
            if self.unzip_program.trim().is_empty() {
                return Err("unzip_program must not be empty".to_string());
            }
            if self.sed_program.trim().is_empty() {
                return Err("sed_program must not be empty".to_string());
            }
        }
        Ok(())
    }

    /// Instantiate the configured extractor
    pub fn build(&self) -> Box<dyn TextExtractor + Send + Sync> {
        match self.backend {
            ExtractorBackend::Native => Box::new(DocxExtractor::new(self.body_member.clone())),
            ExtractorBackend::Command => Box::new(CommandExtractor::new(
                self.unzip_program.clone(),
                self.sed_program.clone(),
                self.body_member.clone(),
            )),
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
