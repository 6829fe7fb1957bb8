//! The conversion driver: parse, write the preamble, emit the body.

pub mod builder;
pub mod config;

use crate::emitter::GroovyEmitter;
use crate::error::ConvertError;
use config::ConvertOptions;
use jelly_view::JellyDocument;
use tempfile::NamedTempFile;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// A configured conversion of one Jelly view.
#[derive(Debug)]
pub struct Converter {
    source: String,
    input_path: Option<PathBuf>,
    options: ConvertOptions,
}

impl Converter {
    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Streams the Groovy view into `out`.
    ///
    /// Parsing and namespace collection finish before anything is written, so input
    /// errors never produce output. Errors found while emitting (a missing `test`
    /// attribute, say) leave whatever was already written in `out`.
    pub fn write_to<W: Write>(&self, out: W) -> Result<(), ConvertError> {
        let doc = JellyDocument::parse(&self.source)?;
        let root = doc.effective_root()?;
        if let Some(path) = &self.input_path {
            log::debug!("Converting {} starting at <{}>", path.display(), root.raw_name());
        }

        let mut emitter = GroovyEmitter::new(out, doc.namespaces(), self.options);
        emitter.write_preamble()?;
        emitter.emit(&root, 0)?;
        emitter.flush()
    }

    /// Writes the Groovy view to `path`.
    ///
    /// Output goes to a temporary file next to `path` that is renamed into place only
    /// after the whole view converted, so a failed run never leaves a partial file.
    /// A replaced file keeps its permissions; a new one gets the umask default.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConvertError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = new_output_file(dir)?;
        self.write_to(BufWriter::new(temp.as_file_mut()))?;
        if let Ok(existing) = fs::metadata(path) {
            temp.as_file().set_permissions(existing.permissions())?;
        }
        temp.persist(path)?;
        log::info!("Wrote {}", path.display());
        Ok(())
    }

    /// Converts into an in-memory string.
    pub fn convert_to_string(&self) -> Result<String, ConvertError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

#[cfg(unix)]
fn new_output_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    // Same mode request as `File::create`, so the umask decides the final bits.
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_output_file(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

/// Converts a Jelly view held in memory with default options.
pub fn convert_str(source: &str) -> Result<String, ConvertError> {
    builder::ConverterBuilder::new()
        .with_source(source)
        .build()?
        .convert_to_string()
}
