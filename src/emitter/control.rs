//! Classification of elements into control constructs and builder calls.
use jelly_view::{Element, JellyError, NamespaceMap};

/// The `jelly:core` tags the emitter knows how to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlTag {
    If,
    Choose,
    When,
    Otherwise,
    InvokeStatic,
    /// Any other `jelly:core` tag. Produces no line of its own.
    Unknown(String),
}

impl ControlTag {
    pub fn from_local_name(name: &str) -> Self {
        match name {
            "if" => ControlTag::If,
            "choose" => ControlTag::Choose,
            "when" => ControlTag::When,
            "otherwise" => ControlTag::Otherwise,
            "invokeStatic" => ControlTag::InvokeStatic,
            other => ControlTag::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind<'a> {
    Control(ControlTag),
    /// A builder call. `prefix` is empty for un-namespaced and default-namespace elements.
    Generic { prefix: &'a str, tag: &'a str },
}

impl<'a> NodeKind<'a> {
    pub fn classify(element: &Element<'a, '_>, namespaces: &'a NamespaceMap) -> Result<Self, JellyError> {
        let name = element.name();
        match name.namespace {
            Some(ns) if NamespaceMap::is_control(ns) => {
                Ok(NodeKind::Control(ControlTag::from_local_name(name.local)))
            }
            Some(ns) => Ok(NodeKind::Generic { prefix: namespaces.resolve(ns)?, tag: name.local }),
            None => Ok(NodeKind::Generic { prefix: "", tag: name.local }),
        }
    }
}
