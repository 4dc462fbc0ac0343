//! Identity paths joining mounted components to their DOM nodes.
//!
//! Every mounted host and text node carries a `data-reactid` attribute holding
//! a dotted positional path: the root of a render pass gets its root index
//! (`0`, `1`, ...), and each child appends its position under its parent
//! (`0.2` is the third child of root `0`). The path is the only key event
//! delegation uses to get from a DOM event target back to a virtual node.

use rosette_host::TargetNode;
use std::fmt;

/// Name of the identity attribute written into the markup.
pub const REACT_ID_ATTRIBUTE: &str = "data-reactid";

/// Dotted identity path of a mounted node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReactId(String);

impl ReactId {
    /// Id of the root of a render pass.
    pub fn root(index: u64) -> Self {
        Self(index.to_string())
    }

    /// Id of the child at `index` below this node.
    pub fn child(&self, index: usize) -> Self {
        Self(format!("{}.{}", self.0, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split('.')
    }

    /// Number of segments (a root has depth 1).
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Root index this id belongs to.
    pub fn root_index(&self) -> Option<u64> {
        self.segments().next()?.parse().ok()
    }

    /// Id of the parent node, `None` for a root.
    pub fn parent(&self) -> Option<ReactId> {
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| ReactId(parent.to_string()))
    }

    /// Whether `other` lies strictly below this node.
    pub fn is_ancestor_of(&self, other: &ReactId) -> bool {
        other
            .0
            .strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.starts_with('.'))
    }

    /// Selector matching the DOM node mounted at this id.
    pub fn selector(&self) -> AttributeSelector {
        AttributeSelector::new(REACT_ID_ATTRIBUTE, self.0.clone())
    }
}

impl fmt::Display for ReactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An attribute-equality selector, `[name="value"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeSelector {
    name: String,
    value: String,
}

impl AttributeSelector {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parse `[name="value"]`, `[name='value']` or `[name=value]`.
    pub fn parse(selector: &str) -> Option<Self> {
        let inner = selector.trim().strip_prefix('[')?.strip_suffix(']')?;
        let (name, value) = inner.split_once('=')?;
        let name = name.trim();
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
            .unwrap_or(value);
        if name.is_empty() {
            return None;
        }
        Some(Self::new(name, value))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the event target carries the attribute with exactly this value.
    pub fn matches(&self, target: &TargetNode) -> bool {
        target.attribute(&self.name) == Some(self.value.as_str())
    }
}

impl fmt::Display for AttributeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}=\"{}\"]", self.name, self.value)
    }
}
