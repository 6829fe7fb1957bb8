//! A read-only element view over a parsed Jelly view.
use crate::error::{JellyError, Location};
use crate::namespace::{NamespaceMap, collect_namespaces};
use std::borrow::Cow;
use std::fmt;

/// A parsed Jelly view together with its namespace declarations.
///
/// The tree is built by `roxmltree`; the declarations are collected by a pass over the
/// finished tree, so the mapping is complete before any element is visited.
pub struct JellyDocument<'input> {
    doc: roxmltree::Document<'input>,
    namespaces: NamespaceMap,
}

impl<'input> JellyDocument<'input> {
    /// Parses `text`, failing on malformed XML or conflicting namespace declarations.
    pub fn parse(text: &'input str) -> Result<Self, JellyError> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, options)?;
        let scan = collect_namespaces(&doc)?;
        log::debug!(
            "Parsed document with root <{}>",
            scan.root_name.as_deref().unwrap_or_default()
        );
        Ok(Self { doc, namespaces: scan.namespaces })
    }

    pub fn namespaces(&self) -> &NamespaceMap {
        &self.namespaces
    }

    /// The document element.
    pub fn root(&self) -> Element<'_, 'input> {
        Element { node: self.doc.root_element() }
    }

    /// The element conversion starts from.
    ///
    /// Jelly views are wrapped in a `<j:jelly>` element; when the root's local name ends
    /// with `jelly`, its first child element is returned instead of the root itself.
    pub fn effective_root(&self) -> Result<Element<'_, 'input>, JellyError> {
        let root = self.root();
        if !root.local_name().ends_with("jelly") {
            return Ok(root);
        }
        let mut children = root.children();
        let first = children
            .next()
            .ok_or_else(|| JellyError::EmptyDocument(root.raw_name()))?;
        let skipped = children.count();
        if skipped > 0 {
            log::warn!(
                "<{}> has {} more child element(s) after <{}>; only the first is converted",
                root.raw_name(),
                skipped,
                first.raw_name()
            );
        }
        Ok(first)
    }
}

/// An element name split into its namespace URI and local part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    pub namespace: Option<&'a str>,
    pub local: &'a str,
}

impl fmt::Display for QualifiedName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => f.write_str(self.local),
        }
    }
}

/// An attribute in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: QualifiedName<'a>,
    pub value: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct Element<'a, 'input> {
    node: roxmltree::Node<'a, 'input>,
}

impl<'a, 'input> Element<'a, 'input> {
    pub fn name(&self) -> QualifiedName<'a> {
        let tag = self.node.tag_name();
        QualifiedName { namespace: tag.namespace(), local: tag.name() }
    }

    pub fn local_name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    /// The name as written in the source, e.g. `j:jelly`.
    pub fn raw_name(&self) -> String {
        let name = self.name();
        match name.namespace.and_then(|ns| self.node.lookup_prefix(ns)) {
            Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, name.local),
            _ => name.local.to_string(),
        }
    }

    pub fn attributes(self) -> impl Iterator<Item = Attribute<'a>> {
        self.node.attributes().map(|attr| Attribute {
            name: QualifiedName { namespace: attr.namespace(), local: attr.name() },
            value: attr.value(),
        })
    }

    /// Looks up an attribute without a namespace.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    pub fn required_attr(&self, name: &str) -> Result<&'a str, JellyError> {
        self.attr(name).ok_or_else(|| JellyError::MissingAttribute {
            attribute: name.to_string(),
            tag: self.raw_name(),
            location: self.location(),
        })
    }

    /// Text before the first child element, if it contains anything but whitespace.
    ///
    /// Comments and PIs in that run are skipped and the text around them is joined.
    pub fn text(&self) -> Option<Cow<'a, str>> {
        let mut parts = self
            .node
            .children()
            .take_while(|c| !c.is_element())
            .filter(|c| c.is_text())
            .filter_map(|c| c.text());
        let first = parts.next()?;
        let text = match parts.next() {
            None => Cow::Borrowed(first),
            Some(second) => {
                let mut joined = String::from(first);
                joined.push_str(second);
                joined.extend(parts);
                Cow::Owned(joined)
            }
        };
        Some(text).filter(|t| !t.trim().is_empty())
    }

    /// Child elements in document order. Text, comments and PIs are skipped.
    pub fn children(self) -> impl Iterator<Item = Element<'a, 'input>> {
        self.node
            .children()
            .filter(|c| c.is_element())
            .map(|node| Element { node })
    }

    pub fn has_children(&self) -> bool {
        self.node.children().any(|c| c.is_element())
    }

    /// Resolves a prefix against the declarations in scope at this element.
    pub fn lookup_prefix(&self, uri: &str) -> Option<&'a str> {
        self.node.lookup_prefix(uri)
    }

    pub fn location(&self) -> Location {
        self.node.document().text_pos_at(self.node.range().start).into()
    }
}
