// src/pipeline/builder.rs
use super::Converter;
use super::config::{ConvertOptions, StringEscaping, UnknownControlTags};
use crate::error::ConvertError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A builder for creating a `Converter`.
#[derive(Default)]
pub struct ConverterBuilder {
    source: Option<String>,
    input_path: Option<PathBuf>,
    options: ConvertOptions,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads the Jelly view to convert from a file.
    pub fn with_input_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConvertError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to read Jelly view from '{}': {}", path_ref.display(), e),
            )
        })?;
        log::info!("Loaded {} ({} bytes)", path_ref.display(), source.len());
        self.source = Some(source);
        self.input_path = Some(path_ref.to_path_buf());
        Ok(self)
    }

    /// Uses an in-memory Jelly view.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self.input_path = None;
        self
    }

    pub fn with_unknown_control_tags(mut self, policy: UnknownControlTags) -> Self {
        self.options.unknown_control_tags = policy;
        self
    }

    pub fn with_string_escaping(mut self, escaping: StringEscaping) -> Self {
        self.options.escaping = escaping;
        self
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<Converter, ConvertError> {
        let source = self.source.ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "No Jelly view was provided to the converter")
        })?;
        Ok(Converter { source, input_path: self.input_path, options: self.options })
    }
}
