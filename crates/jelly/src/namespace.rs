//! Collects the namespace declarations of a Jelly view in a single document-order pass.
//!
//! Every `xmlns:prefix="uri"` binding that an element adds to its parent's scope is a
//! declaration event.
//! The resulting [`NamespaceMap`] is bidirectional: prefix to `{uri}` and `{uri}` to
//! prefix. A prefix may only ever refer to one URI in a document; scoped redefinition
//! is rejected rather than resolved.
use crate::error::JellyError;
use std::collections::HashMap;

/// The namespace whose elements are control constructs rather than builder calls.
pub const JELLY_CORE: &str = "jelly:core";

/// Bound to the `xml` prefix in every document without being declared.
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Wraps a namespace URI in the bracketed `{uri}` form used as a reverse-lookup key.
pub fn bracketed(uri: &str) -> String {
    format!("{{{}}}", uri)
}

/// Immutable prefix <-> namespace mapping for a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceMap {
    prefixes: HashMap<String, String>,
    uris: HashMap<String, String>,
    order: Vec<String>,
}

impl NamespaceMap {
    /// Records a declaration, rejecting a prefix or URI that is already bound elsewhere.
    fn declare(&mut self, prefix: &str, uri: &str) -> Result<(), JellyError> {
        let key = bracketed(uri);
        if let Some(existing) = self.prefixes.get(prefix) {
            if *existing == key {
                return Ok(());
            }
            return Err(JellyError::DuplicatePrefix {
                prefix: prefix.to_string(),
                existing: strip_brackets(existing).to_string(),
                conflicting: uri.to_string(),
            });
        }
        if let Some(existing) = self.uris.get(&key) {
            return Err(JellyError::DuplicateNamespace {
                uri: uri.to_string(),
                existing: existing.clone(),
                conflicting: prefix.to_string(),
            });
        }
        log::trace!("xmlns:{} -> {}", prefix, key);
        self.prefixes.insert(prefix.to_string(), key.clone());
        self.uris.insert(key, prefix.to_string());
        self.order.push(prefix.to_string());
        Ok(())
    }

    /// The prefix bound to a namespace URI, given either bare or bracketed.
    pub fn prefix_for(&self, uri: &str) -> Option<&str> {
        let found = if uri.starts_with('{') {
            self.uris.get(uri)
        } else {
            self.uris.get(&bracketed(uri))
        };
        found.map(String::as_str)
    }

    /// Like [`prefix_for`](Self::prefix_for), but an undeclared namespace is an error.
    pub fn resolve(&self, uri: &str) -> Result<&str, JellyError> {
        self.prefix_for(uri)
            .ok_or_else(|| JellyError::UnresolvedNamespace(uri.to_string()))
    }

    /// Returns true if `uri` is the control namespace.
    pub fn is_control(uri: &str) -> bool {
        uri == JELLY_CORE || uri == bracketed(JELLY_CORE)
    }

    /// Declared prefixes with their bare URIs, in first-declaration order.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order.iter().filter_map(move |prefix| {
            self.prefixes
                .get(prefix)
                .map(|uri| (prefix.as_str(), strip_brackets(uri)))
        })
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

fn strip_brackets(key: &str) -> &str {
    key.strip_prefix('{')
        .and_then(|k| k.strip_suffix('}'))
        .unwrap_or(key)
}

/// The result of the declaration scan: the mapping and the first element's raw name.
#[derive(Debug)]
pub struct NamespaceScan {
    pub namespaces: NamespaceMap,
    pub root_name: Option<String>,
}

/// Visits every element of `doc` in document order, collecting each namespace binding
/// the element introduces. Values come from the parsed tree, so entity references
/// are already expanded.
pub fn collect_namespaces(doc: &roxmltree::Document<'_>) -> Result<NamespaceScan, JellyError> {
    let mut namespaces = NamespaceMap::default();
    let mut root_name = None;

    for node in doc.descendants().filter(|n| n.is_element()) {
        if root_name.is_none() {
            root_name = Some(raw_name(node));
        }
        let parent = node.parent_element();
        for ns in node.namespaces() {
            if ns.uri() == XML_NAMESPACE {
                continue;
            }
            let prefix = ns.name().unwrap_or_default();
            let inherited = parent.is_some_and(|p| {
                p.namespaces()
                    .any(|pns| pns.name() == ns.name() && pns.uri() == ns.uri())
            });
            if !inherited {
                namespaces.declare(prefix, ns.uri())?;
            }
        }
    }

    log::debug!(
        "Collected {} namespace declaration(s), root element {:?}",
        namespaces.len(),
        root_name
    );
    Ok(NamespaceScan { namespaces, root_name })
}

fn raw_name(node: roxmltree::Node<'_, '_>) -> String {
    let tag = node.tag_name();
    match tag.namespace().and_then(|ns| node.lookup_prefix(ns)) {
        Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, tag.name()),
        _ => tag.name().to_string(),
    }
}
