//! Rosette DOM - a minimal virtual DOM that mounts descriptor trees as markup.
//!
//! This crate turns trees of element descriptors into HTML markup:
//! - Immutable element descriptors built with [`create_element`]
//! - Text, host and composite components with a shared mount protocol
//! - Positional identity paths written as `data-reactid` attributes
//! - Event props delegated through one document listener per event type
//! - User components from the [`Component`] trait or [`create_class`]
//! - Post-mount lifecycle hooks run after the container is written
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use rosette_dom::{
//!     ClassSpec, EventHandler, Node, Renderer, create_class, create_element, nodes, props,
//! };
//! use rosette_host::MockDocument;
//!
//! let doc = Rc::new(MockDocument::new().with_container("app"));
//! let mut renderer = Renderer::new(doc.clone());
//!
//! let hello = create_class(
//!     ClassSpec::new()
//!         .display_name("HelloMessage")
//!         .render(|this| {
//!             let name = this.props().get_str("name").unwrap_or("world").to_string();
//!             Some(Node::from(create_element(
//!                 "button",
//!                 Some(props! { "onClick" => EventHandler::new(|_| {}) }),
//!                 nodes!["Hello ", name],
//!             )))
//!         }),
//! );
//!
//! renderer
//!     .render(create_element(&hello, Some(props! { "name" => "Rosette" }), Vec::new()), "app")
//!     .unwrap();
//!
//! assert!(doc.inner_html("app").unwrap().starts_with("<button data-reactid=\"0\">"));
//! ```

pub mod class;
pub mod component;
pub mod element;
pub mod error;
pub mod event;
pub mod factory;
pub mod global;
pub mod identity;
pub mod props;
pub mod render;

pub use class::{
    ClassInstance, ClassSpec, Component, ComponentClass, InternalInstance, create_class,
};
pub use component::{
    ComponentInstance, CompositeComponent, HostComponent, MountContext, MountReadyQueue,
    TextComponent,
};
pub use element::{ElementDescriptor, ElementType, Node, create_element};
pub use error::{HookError, HookResult, PostMountFailure, RenderError, RenderResult};
pub use event::{DelegationId, EventBridge, EventHandler, event_type_for, is_event_prop};
pub use factory::{instantiate_component, instantiate_component_with};
pub use global::render;
pub use identity::{AttributeSelector, REACT_ID_ATTRIBUTE, ReactId};
pub use props::{PropValue, Props};
pub use render::{MOUNT_READY_EVENT, RenderConfig, Renderer};

/// Build [`Props`] from `"name" => value` pairs.
///
/// ```
/// use rosette_dom::props;
///
/// let props = props! { "id" => "x", "tabIndex" => 2 };
/// assert_eq!(props.get_str("id"), Some("x"));
/// assert_eq!(props.get_number("tabIndex"), Some(2.0));
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::Props::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::Props::new();
        $(props.insert($name, $value);)+
        props
    }};
}

/// Build a `Vec<Node>` from anything convertible into a [`Node`].
///
/// ```
/// use rosette_dom::{Node, nodes};
///
/// let children = nodes!["count: ", 3];
/// assert_eq!(children, vec![Node::from("count: "), Node::Number(3.0)]);
/// ```
#[macro_export]
macro_rules! nodes {
    () => {
        ::std::vec::Vec::<$crate::Node>::new()
    };
    ($($node:expr),+ $(,)?) => {
        ::std::vec![$($crate::Node::from($node)),+]
    };
}
