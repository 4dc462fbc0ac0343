//! In-memory implementation of [`HostDocument`] for testing.
//!
//! The mock keeps each container's markup as a string, routes dispatched
//! events to registered listeners, and records every call so tests can assert
//! on how the library drove the document.

use crate::document::{HostDocument, HostListener, ListenerId};
use crate::error::{HostError, HostResult};
use crate::event::{HostEvent, TargetNode};
use indexmap::IndexMap;
use parking_lot::Mutex;

/// Records a document operation for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentCall {
    SetInnerHtml { container: String, markup: String },
    AddListener { id: ListenerId, event_type: String },
    RemoveListener { id: ListenerId },
    Dispatch { event_type: String },
}

struct Registered {
    id: ListenerId,
    event_type: String,
    listener: HostListener,
}

/// Mock implementation of [`HostDocument`].
///
/// Methods take `&self` and record into `parking_lot::Mutex`es. Locks are
/// released before any listener runs, so listeners may call back into the
/// document.
///
/// # Example
///
/// ```rust
/// use rosette_host::{HostDocument, MockDocument};
///
/// let doc = MockDocument::new().with_container("root");
/// doc.set_inner_html("root", "<span data-reactid=\"0\">hello</span>").unwrap();
///
/// assert_eq!(doc.inner_html("root").as_deref(), Some("<span data-reactid=\"0\">hello</span>"));
/// assert!(doc.set_inner_html("missing", "").is_err());
/// ```
pub struct MockDocument {
    containers: Mutex<IndexMap<String, String>>,
    listeners: Mutex<Vec<Registered>>,
    calls: Mutex<Vec<DocumentCall>>,
    next_listener_id: Mutex<u64>,
}

impl MockDocument {
    /// Create an empty document with no containers.
    pub fn new() -> Self {
        Self {
            containers: Mutex::new(IndexMap::new()),
            listeners: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            next_listener_id: Mutex::new(0),
        }
    }

    /// Add an empty container element with the given id.
    pub fn with_container(self, id: impl Into<String>) -> Self {
        self.add_container(id);
        self
    }

    pub fn add_container(&self, id: impl Into<String>) {
        self.containers.lock().insert(id.into(), String::new());
    }

    /// Current markup of a container, `None` if it does not exist.
    pub fn inner_html(&self, container: &str) -> Option<String> {
        self.containers.lock().get(container).cloned()
    }

    /// Locate the element carrying `name="value"` (or `name=value`) in any
    /// container and describe it as an event target.
    pub fn find_by_attribute(&self, name: &str, value: &str) -> Option<TargetNode> {
        let quoted = format!("{name}=\"{value}\"");
        let bare = format!("{name}={value}");

        let containers = self.containers.lock();
        containers.values().find_map(|markup| {
            let position = markup.find(&quoted).or_else(|| {
                markup.match_indices(&bare).find_map(|(at, _)| {
                    let rest = &markup[at + bare.len()..];
                    matches!(rest.chars().next(), Some(' ' | '>')).then_some(at)
                })
            })?;
            let open = markup[..position].rfind('<')?;
            let tag: String = markup[open + 1..]
                .chars()
                .take_while(|c| !c.is_whitespace() && *c != '>')
                .collect();
            Some(TargetNode::new(tag).with_attribute(name, value))
        })
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<DocumentCall> {
        self.calls.lock().clone()
    }

    /// Number of live listeners for an event type.
    pub fn count_listeners(&self, event_type: &str) -> usize {
        self.listeners
            .lock()
            .iter()
            .filter(|registered| registered.event_type == event_type)
            .count()
    }

    /// Count container writes.
    pub fn count_writes(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, DocumentCall::SetInnerHtml { .. }))
            .count()
    }

    /// Count dispatched events.
    pub fn count_dispatches(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, DocumentCall::Dispatch { .. }))
            .count()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

impl Default for MockDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDocument for MockDocument {
    fn set_inner_html(&self, container: &str, markup: &str) -> HostResult<()> {
        let mut containers = self.containers.lock();
        let slot = containers
            .get_mut(container)
            .ok_or_else(|| HostError::ContainerNotFound {
                id: container.to_string(),
            })?;
        *slot = markup.to_string();

        self.calls.lock().push(DocumentCall::SetInnerHtml {
            container: container.to_string(),
            markup: markup.to_string(),
        });
        Ok(())
    }

    fn add_listener(&self, event_type: &str, listener: HostListener) -> HostResult<ListenerId> {
        let id = {
            let mut next = self.next_listener_id.lock();
            let id = ListenerId(*next);
            *next += 1;
            id
        };

        self.listeners.lock().push(Registered {
            id,
            event_type: event_type.to_string(),
            listener,
        });
        self.calls.lock().push(DocumentCall::AddListener {
            id,
            event_type: event_type.to_string(),
        });
        Ok(id)
    }

    fn remove_listener(&self, id: ListenerId) -> HostResult<bool> {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|registered| registered.id != id);
        let removed = listeners.len() != before;
        drop(listeners);

        self.calls.lock().push(DocumentCall::RemoveListener { id });
        Ok(removed)
    }

    fn dispatch(&self, event: &HostEvent) -> HostResult<()> {
        self.calls.lock().push(DocumentCall::Dispatch {
            event_type: event.event_type().to_string(),
        });

        let matching: Vec<HostListener> = self
            .listeners
            .lock()
            .iter()
            .filter(|registered| registered.event_type == event.event_type())
            .map(|registered| registered.listener.clone())
            .collect();

        for listener in matching {
            listener(event);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_set_inner_html_replaces_content() {
        let doc = MockDocument::new().with_container("app");
        doc.set_inner_html("app", "<p>one</p>").unwrap();
        doc.set_inner_html("app", "<p>two</p>").unwrap();

        assert_eq!(doc.inner_html("app").as_deref(), Some("<p>two</p>"));
        assert_eq!(doc.count_writes(), 2);
    }

    #[test]
    fn test_missing_container() {
        let doc = MockDocument::new();
        let err = doc.set_inner_html("nope", "").unwrap_err();
        assert_eq!(err, HostError::ContainerNotFound { id: "nope".into() });
        assert_eq!(doc.count_writes(), 0);
    }

    #[test]
    fn test_dispatch_reaches_only_matching_listeners() {
        let doc = MockDocument::new();
        let clicks = Rc::new(Cell::new(0));
        let keys = Rc::new(Cell::new(0));

        let c = clicks.clone();
        doc.add_listener("click", Rc::new(move |_: &HostEvent| c.set(c.get() + 1)))
            .unwrap();
        let k = keys.clone();
        doc.add_listener("keydown", Rc::new(move |_: &HostEvent| k.set(k.get() + 1)))
            .unwrap();

        doc.dispatch(&HostEvent::new("click")).unwrap();

        assert_eq!(clicks.get(), 1);
        assert_eq!(keys.get(), 0);
    }

    #[test]
    fn test_remove_listener() {
        let doc = MockDocument::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let id = doc
            .add_listener("click", Rc::new(move |_: &HostEvent| h.set(h.get() + 1)))
            .unwrap();

        assert!(doc.remove_listener(id).unwrap());
        assert!(!doc.remove_listener(id).unwrap());
        doc.dispatch(&HostEvent::new("click")).unwrap();

        assert_eq!(hits.get(), 0);
        assert_eq!(doc.count_listeners("click"), 0);
    }

    #[test]
    fn test_listener_may_register_listeners() {
        let doc = Rc::new(MockDocument::new());
        let inner = doc.clone();
        doc.add_listener(
            "click",
            Rc::new(move |_: &HostEvent| {
                inner
                    .add_listener("click", Rc::new(|_: &HostEvent| {}))
                    .unwrap();
            }),
        )
        .unwrap();

        doc.dispatch(&HostEvent::new("click")).unwrap();
        assert_eq!(doc.count_listeners("click"), 2);
    }

    #[test]
    fn test_find_by_attribute() {
        let doc = MockDocument::new().with_container("app");
        doc.set_inner_html(
            "app",
            "<div data-reactid=\"0\" id=x> <span data-reactid=\"0.0\">hi</span></div>",
        )
        .unwrap();

        let span = doc.find_by_attribute("data-reactid", "0.0").unwrap();
        assert_eq!(span.tag(), "span");
        assert_eq!(span.attribute("data-reactid"), Some("0.0"));

        let div = doc.find_by_attribute("id", "x").unwrap();
        assert_eq!(div.tag(), "div");

        assert!(doc.find_by_attribute("data-reactid", "0.1").is_none());
    }
}
