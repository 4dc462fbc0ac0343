//! Trait abstracting the host document.

use crate::error::HostResult;
use crate::event::HostEvent;
use std::fmt;
use std::rc::Rc;

/// Callback registered on the document for one event type.
pub type HostListener = Rc<dyn Fn(&HostEvent)>;

/// Handle returned by [`HostDocument::add_listener`], used to remove the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListenerId({})", self.0)
    }
}

/// The document operations Rosette consumes from its host.
///
/// Everything is single-threaded: listeners are `Rc` closures and methods take
/// `&self`, so implementations keep their bookkeeping behind interior
/// mutability. A listener may register further listeners while it runs, so
/// implementations must not hold a lock across a listener call.
///
/// # Example
///
/// ```rust,no_run
/// use rosette_host::{HostDocument, HostEvent, HostResult};
/// use std::rc::Rc;
///
/// fn announce(doc: &dyn HostDocument) -> HostResult<()> {
///     doc.add_listener("ready", Rc::new(|_event: &HostEvent| {}))?;
///     doc.dispatch(&HostEvent::synthetic("ready"))
/// }
/// ```
pub trait HostDocument {
    /// Replace the entire content of the container element with `markup`.
    fn set_inner_html(&self, container: &str, markup: &str) -> HostResult<()>;

    /// Register a document-level listener for `event_type`.
    fn add_listener(&self, event_type: &str, listener: HostListener) -> HostResult<ListenerId>;

    /// Remove a listener. Returns `false` when the id is unknown.
    fn remove_listener(&self, id: ListenerId) -> HostResult<bool>;

    /// Dispatch an event on the document, invoking matching listeners
    /// synchronously in registration order.
    fn dispatch(&self, event: &HostEvent) -> HostResult<()>;
}
