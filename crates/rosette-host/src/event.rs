//! Host-independent view of a dispatched DOM event.

use indexmap::IndexMap;

/// Fields every host event already carries. Detail properties may not shadow them.
const BUILT_IN_FIELDS: &[&str] = &[
    "type",
    "target",
    "currentTarget",
    "bubbles",
    "cancelable",
    "defaultPrevented",
    "timeStamp",
    "dispatchFlag",
];

/// The element an event was dispatched at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetNode {
    tag: String,
    attributes: IndexMap<String, String>,
}

impl TargetNode {
    /// Create a target for an element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Add an attribute to the target.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Lower-case tag name of the element.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterate over the element's attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// An event as seen by listeners registered on the host document.
#[derive(Debug, Clone, PartialEq)]
pub struct HostEvent {
    event_type: String,
    target: Option<TargetNode>,
    detail: IndexMap<String, String>,
    synthetic: bool,
}

impl HostEvent {
    /// Create an event of the given type with no target.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            target: None,
            detail: IndexMap::new(),
            synthetic: false,
        }
    }

    /// Create an event fired by library code rather than by the user agent.
    pub fn synthetic(event_type: impl Into<String>) -> Self {
        Self {
            synthetic: true,
            ..Self::new(event_type)
        }
    }

    /// Set the element the event is dispatched at.
    pub fn with_target(mut self, target: TargetNode) -> Self {
        self.target = Some(target);
        self
    }

    /// Attach a detail property.
    ///
    /// Properties that collide with a built-in event field or with a
    /// property that was already attached are ignored.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if BUILT_IN_FIELDS.contains(&key.as_str()) || self.detail.contains_key(&key) {
            tracing::trace!(key = %key, "detail property shadows an existing field, ignored");
            return self;
        }
        self.detail.insert(key, value.into());
        self
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn target(&self) -> Option<&TargetNode> {
        self.target.as_ref()
    }

    /// Look up a detail property.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.detail.get(key).map(String::as_str)
    }

    pub fn details(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.detail.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether the event was dispatched programmatically.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }
}
