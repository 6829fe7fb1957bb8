//! Streams a Groovy view for a Jelly element tree.
//!
//! The emitter walks the tree depth-first and writes one line per element as it goes.
//! Builder elements become calls (`l.layout(title: "x") {`), `jelly:core` elements
//! become control flow (`if(cond) {`, `else {`, `def v = C.m`). Children are always
//! rendered one indent level deeper than their parent, whether or not the parent
//! wrote a line of its own.

pub mod control;
pub mod value;

pub use control::{ControlTag, NodeKind};
pub use value::translate_value;

use crate::error::ConvertError;
use crate::pipeline::config::{ConvertOptions, UnknownControlTags};
use jelly_view::{Element, NamespaceMap};
use std::io::Write;

const INDENT: &str = "  ";

/// What an element writes before its children.
struct Opening {
    head: String,
    block: bool,
    /// Builder calls keep the space after `)` even when no block follows.
    trailing_space: bool,
}

pub struct GroovyEmitter<'m, W: Write> {
    out: W,
    namespaces: &'m NamespaceMap,
    options: ConvertOptions,
}

impl<'m, W: Write> GroovyEmitter<'m, W> {
    pub fn new(out: W, namespaces: &'m NamespaceMap, options: ConvertOptions) -> Self {
        Self { out, namespaces, options }
    }

    /// Writes the `namespace(...)` declarations that precede the body.
    pub fn write_preamble(&mut self) -> Result<(), ConvertError> {
        writeln!(self.out, "// Namespaces")?;
        for (prefix, uri) in self.namespaces.declarations() {
            if prefix.is_empty() {
                log::warn!("Default namespace '{}' has no prefix and is left out of the preamble", uri);
                continue;
            }
            writeln!(self.out, "{} = namespace(\"{}\")", prefix, uri)?;
        }
        write!(self.out, "\n\n")?;
        Ok(())
    }

    /// Recursively writes `element` and its subtree at `indent` levels.
    pub fn emit(&mut self, element: &Element<'_, '_>, indent: usize) -> Result<(), ConvertError> {
        let kind = NodeKind::classify(element, self.namespaces)?;
        log::trace!("{}{} as {:?}", INDENT.repeat(indent), element.name(), kind);

        let opening = match kind {
            NodeKind::Generic { prefix, tag } => Some(self.builder_call(element, prefix, tag)?),
            NodeKind::Control(tag) => self.control(element, tag)?,
        };

        if let Some(opening) = &opening {
            write!(self.out, "{}{}", INDENT.repeat(indent), opening.head)?;
            if opening.block {
                write!(self.out, " {{")?;
            } else if opening.trailing_space {
                write!(self.out, " ")?;
            }
            writeln!(self.out)?;
        }

        for child in element.children() {
            self.emit(&child, indent + 1)?;
        }

        if opening.is_some_and(|o| o.block) {
            writeln!(self.out, "{}}}", INDENT.repeat(indent))?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ConvertError> {
        self.out.flush()?;
        Ok(())
    }

    fn builder_call(&self, element: &Element<'_, '_>, prefix: &str, tag: &str) -> Result<Opening, ConvertError> {
        let mut args = Vec::new();
        for attr in element.attributes() {
            let value = translate_value(attr.value, self.options.escaping);
            match attr.name.namespace {
                None => args.push(format!("{}: {}", attr.name.local, value)),
                Some(ns) => {
                    let attr_prefix = match self.namespaces.prefix_for(ns) {
                        Some(p) => p,
                        None => element
                            .lookup_prefix(ns)
                            .ok_or_else(|| jelly_view::JellyError::UnresolvedNamespace(ns.to_string()))?,
                    };
                    args.push(format!("\"{}:{}\": {}", attr_prefix, attr.name.local, value));
                }
            }
        }
        if let Some(text) = element.text() {
            args.push(translate_value(&text, self.options.escaping));
        }

        let callee = if prefix.is_empty() { tag.to_string() } else { format!("{}.{}", prefix, tag) };
        Ok(Opening {
            head: format!("{}({})", callee, args.join(", ")),
            block: element.has_children(),
            trailing_space: true,
        })
    }

    fn control(&self, element: &Element<'_, '_>, tag: ControlTag) -> Result<Option<Opening>, ConvertError> {
        let line = |head: String, block: bool| Some(Opening { head, block, trailing_space: false });
        let opening = match tag {
            ControlTag::If | ControlTag::When => {
                let test = translate_value(element.required_attr("test")?, self.options.escaping);
                line(format!("if({})", test), element.has_children())
            }
            ControlTag::Otherwise => line("else".to_string(), element.has_children()),
            ControlTag::InvokeStatic => {
                let var = element.required_attr("var")?;
                let class_name = element.required_attr("className")?;
                let method = element.required_attr("method")?;
                if element.has_children() {
                    log::warn!(
                        "Children of <{}> at {} have no block to go in",
                        element.raw_name(),
                        element.location()
                    );
                }
                line(format!("def {} = {}.{}", var, class_name, method), false)
            }
            ControlTag::Choose => None,
            ControlTag::Unknown(name) => match self.options.unknown_control_tags {
                UnknownControlTags::Skip => {
                    log::warn!(
                        "Skipping unsupported control tag <{}> at {}",
                        element.raw_name(),
                        element.location()
                    );
                    None
                }
                UnknownControlTags::Reject => {
                    return Err(ConvertError::UnsupportedControlTag {
                        tag: name,
                        location: element.location(),
                    });
                }
            },
        };
        Ok(opening)
    }
}
