//! Browser implementation of [`HostDocument`] on top of `web-sys`.

use crate::document::{HostDocument, HostListener, ListenerId};
use crate::error::{HostError, HostResult};
use crate::event::{HostEvent, TargetNode};
use indexmap::IndexMap;
use std::cell::{Cell, RefCell};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Document, Element, Event};

type JsListener = Closure<dyn FnMut(Event)>;

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        HostError::Js { message }
    }
}

/// The live browser document.
///
/// Listener closures are kept alive here until they are removed; dropping the
/// `WebDocument` releases every closure it registered.
pub struct WebDocument {
    document: Document,
    listeners: RefCell<IndexMap<ListenerId, (String, JsListener)>>,
    next_listener_id: Cell<u64>,
}

impl WebDocument {
    /// Bind to `window.document`.
    pub fn new() -> HostResult<Self> {
        let window = web_sys::window().ok_or(HostError::DomUnavailable)?;
        let document = window.document().ok_or(HostError::DomUnavailable)?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            listeners: RefCell::new(IndexMap::new()),
            next_listener_id: Cell::new(0),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl std::fmt::Debug for WebDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebDocument")
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl HostDocument for WebDocument {
    fn set_inner_html(&self, container: &str, markup: &str) -> HostResult<()> {
        let element = self
            .document
            .get_element_by_id(container)
            .ok_or_else(|| HostError::ContainerNotFound {
                id: container.to_string(),
            })?;
        element.set_inner_html(markup);
        Ok(())
    }

    fn add_listener(&self, event_type: &str, listener: HostListener) -> HostResult<ListenerId> {
        let closure: JsListener = Closure::wrap(Box::new(move |event: Event| {
            listener(&host_event_from(&event));
        }) as Box<dyn FnMut(Event)>);

        self.document
            .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;

        let id = ListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);
        self.listeners
            .borrow_mut()
            .insert(id, (event_type.to_string(), closure));
        Ok(id)
    }

    fn remove_listener(&self, id: ListenerId) -> HostResult<bool> {
        let Some((event_type, closure)) = self.listeners.borrow_mut().shift_remove(&id) else {
            return Ok(false);
        };
        self.document
            .remove_event_listener_with_callback(&event_type, closure.as_ref().unchecked_ref())?;
        Ok(true)
    }

    fn dispatch(&self, event: &HostEvent) -> HostResult<()> {
        let detail = js_sys::Object::new();
        for (key, value) in event.details() {
            js_sys::Reflect::set(&detail, &JsValue::from_str(key), &JsValue::from_str(value))?;
        }

        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_detail(&detail);

        let custom = CustomEvent::new_with_event_init_dict(event.event_type(), &init)?;
        self.document.dispatch_event(&custom)?;
        Ok(())
    }
}

fn host_event_from(event: &Event) -> HostEvent {
    let mut host = if event.is_trusted() {
        HostEvent::new(event.type_())
    } else {
        HostEvent::synthetic(event.type_())
    };

    if let Some(element) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    {
        host = host.with_target(target_node_from(&element));
    }

    if let Some(custom) = event.dyn_ref::<CustomEvent>()
        && let Ok(detail) = custom.detail().dyn_into::<js_sys::Object>()
    {
        for key in js_sys::Object::keys(&detail).iter() {
            let value = js_sys::Reflect::get(&detail, &key)
                .ok()
                .and_then(|value| value.as_string());
            if let (Some(key), Some(value)) = (key.as_string(), value) {
                host = host.with_detail(key, value);
            }
        }
    }

    host
}

fn target_node_from(element: &Element) -> TargetNode {
    let mut node = TargetNode::new(element.tag_name().to_lowercase());
    let attributes = element.attributes();
    for index in 0..attributes.length() {
        if let Some(attr) = attributes.item(index) {
            node = node.with_attribute(attr.name(), attr.value());
        }
    }
    node
}
