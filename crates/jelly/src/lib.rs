//! Source-side model for Jenkins Jelly views.
//!
//! A Jelly view is an XML document whose namespaced tags are either builder calls
//! (`l:layout`, `f:entry`, ...) or control constructs from the `jelly:core` namespace.
//! This crate parses the document, collects every namespace declaration into a
//! [`NamespaceMap`], and exposes a read-only [`Element`] view over the tree.

pub mod document;
pub mod error;
pub mod namespace;

pub use document::{Attribute, Element, JellyDocument, QualifiedName};
pub use error::{JellyError, Location};
pub use namespace::{JELLY_CORE, NamespaceMap, collect_namespaces};
