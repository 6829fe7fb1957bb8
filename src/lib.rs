//! Converts Jenkins Jelly views into Groovy views.
//!
//! ```no_run
//! use jelly2groovy::ConverterBuilder;
//!
//! let converter = ConverterBuilder::new()
//!     .with_input_file("index.jelly")?
//!     .build()?;
//! converter.write_to_file("index.groovy")?;
//! # Ok::<(), jelly2groovy::ConvertError>(())
//! ```

pub mod emitter;
pub mod error;
pub mod pipeline;

pub use emitter::{ControlTag, GroovyEmitter, NodeKind, translate_value};
pub use error::ConvertError;
pub use pipeline::builder::ConverterBuilder;
pub use pipeline::config::{ConvertOptions, StringEscaping, UnknownControlTags};
pub use pipeline::{Converter, convert_str};

pub use jelly_view;
