//! Event bridge: document listeners, custom event dispatch and delegation.
//!
//! Event props on host elements are not bound to individual DOM nodes.
//! Instead the bridge installs one listener per event type on the document
//! and keeps a table of `(selector, handler)` delegations. When an event
//! arrives, every delegation whose selector matches the event target runs.
//! Because the table is keyed by identity selectors rather than by DOM
//! nodes, handlers keep working after a container's markup is regenerated.

use crate::error::RenderResult;
use crate::identity::AttributeSelector;
use rosette_core::alloc::HashMap;
use rosette_core::profiling::profile_scope;
use rosette_host::{HostDocument, HostEvent, HostListener, ListenerId};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A callback bound to an event, either through an `on*` prop or directly on the bridge.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&HostEvent)>);

impl EventHandler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&HostEvent) + 'static,
    {
        Self(Rc::new(f))
    }

    pub fn call(&self, event: &HostEvent) {
        (self.0)(event)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventHandler({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Handle for a delegated handler, used by [`EventBridge::undelegate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DelegationId(pub u64);

struct Delegation {
    id: DelegationId,
    event_type: String,
    selector: AttributeSelector,
    handler: EventHandler,
}

#[derive(Default)]
struct DelegationTable {
    entries: Vec<Delegation>,
}

impl DelegationTable {
    fn matching(&self, event: &HostEvent) -> Vec<EventHandler> {
        let Some(target) = event.target() else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|d| d.event_type == event.event_type() && d.selector.matches(target))
            .map(|d| d.handler.clone())
            .collect()
    }
}

/// Wrapper over the host document's event registration, dispatch and delegation.
pub struct EventBridge {
    host: Rc<dyn HostDocument>,
    table: Rc<RefCell<DelegationTable>>,
    /// The single document listener installed per delegated event type.
    root_listeners: HashMap<String, ListenerId>,
    next_delegation: u64,
}

impl EventBridge {
    pub fn new(host: Rc<dyn HostDocument>) -> Self {
        Self {
            host,
            table: Rc::new(RefCell::new(DelegationTable::default())),
            root_listeners: HashMap::new(),
            next_delegation: 0,
        }
    }

    pub fn host(&self) -> &Rc<dyn HostDocument> {
        &self.host
    }

    /// Register a listener directly on the document.
    pub fn on(&self, event_type: &str, handler: EventHandler) -> RenderResult<ListenerId> {
        let listener: HostListener = Rc::new(move |event: &HostEvent| handler.call(event));
        let id = self.host.add_listener(event_type, listener)?;
        tracing::debug!(event_type, listener = %id, "document listener registered");
        Ok(id)
    }

    /// Remove a listener registered with [`EventBridge::on`].
    pub fn off(&self, id: ListenerId) -> RenderResult<bool> {
        Ok(self.host.remove_listener(id)?)
    }

    /// Fire a custom event on the document. Detail properties never override
    /// the event's built-in fields.
    pub fn dispatch<I, K, V>(&self, event_type: &str, detail: I) -> RenderResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let event = detail
            .into_iter()
            .fold(HostEvent::synthetic(event_type), |event, (key, value)| {
                event.with_detail(key, value)
            });
        tracing::trace!(event_type, "dispatching custom event");
        Ok(self.host.dispatch(&event)?)
    }

    /// Run `handler` for every `event_type` event whose target matches `selector`.
    ///
    /// Only the exact event target is matched; an event on a descendant of the
    /// selected node does not trigger the handler.
    pub fn delegate(
        &mut self,
        selector: AttributeSelector,
        event_type: &str,
        handler: EventHandler,
    ) -> RenderResult<DelegationId> {
        if !self.root_listeners.contains_key(event_type) {
            let table = self.table.clone();
            let listener: HostListener = Rc::new(move |event: &HostEvent| {
                profile_scope!("delegated_dispatch");
                // Collect first so handlers may delegate more while running.
                let handlers = table.borrow().matching(event);
                for handler in handlers {
                    handler.call(event);
                }
            });
            let listener_id = self.host.add_listener(event_type, listener)?;
            self.root_listeners
                .insert(event_type.to_string(), listener_id);
            tracing::debug!(event_type, listener = %listener_id, "delegation root installed");
        }

        let id = DelegationId(self.next_delegation);
        self.next_delegation += 1;

        tracing::debug!(%selector, event_type, "delegated handler registered");
        self.table.borrow_mut().entries.push(Delegation {
            id,
            event_type: event_type.to_string(),
            selector,
            handler,
        });
        Ok(id)
    }

    /// Remove a delegated handler. The document listener for its event type
    /// is removed once no delegation for that type remains.
    pub fn undelegate(&mut self, id: DelegationId) -> RenderResult<bool> {
        let removed = {
            let mut table = self.table.borrow_mut();
            let Some(position) = table.entries.iter().position(|d| d.id == id) else {
                return Ok(false);
            };
            table.entries.remove(position)
        };

        let still_used = self
            .table
            .borrow()
            .entries
            .iter()
            .any(|d| d.event_type == removed.event_type);
        if !still_used && let Some(listener_id) = self.root_listeners.remove(&removed.event_type) {
            self.host.remove_listener(listener_id)?;
            tracing::debug!(event_type = %removed.event_type, "delegation root removed");
        }
        Ok(true)
    }

    /// Number of live delegated handlers.
    pub fn delegation_count(&self) -> usize {
        self.table.borrow().entries.len()
    }

    /// Selectors currently delegated for `event_type`, in registration order.
    pub fn delegated_selectors(&self, event_type: &str) -> Vec<AttributeSelector> {
        self.table
            .borrow()
            .entries
            .iter()
            .filter(|d| d.event_type == event_type)
            .map(|d| d.selector.clone())
            .collect()
    }
}

impl fmt::Debug for EventBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBridge")
            .field("delegations", &self.delegation_count())
            .field("root_listeners", &self.root_listeners.len())
            .finish()
    }
}

/// Whether a prop name binds an event: `on` followed by an uppercase letter.
pub fn is_event_prop(name: &str) -> bool {
    name.strip_prefix("on")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

/// Event type bound by an event prop: strip `on` and lower-case the next
/// character (`onClick` → `click`, `onMouseDown` → `mouseDown`).
pub fn event_type_for(prop: &str) -> Option<String> {
    if !is_event_prop(prop) {
        return None;
    }
    let rest = &prop[2..];
    let mut chars = rest.chars();
    let first = chars.next()?;
    Some(first.to_ascii_lowercase().to_string() + chars.as_str())
}
