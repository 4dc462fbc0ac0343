//! Host document abstraction for Rosette.
//!
//! Rosette never touches a browser directly. Everything it needs from the
//! host (writing a container's markup, document-level listeners, dispatching
//! custom events) goes through the [`HostDocument`] trait.
//!
//! # Overview
//!
//! - [`HostDocument`] - Trait abstracting the document operations Rosette consumes
//! - [`HostEvent`] / [`TargetNode`] - Host-independent view of a dispatched event
//! - `MockDocument` - In-memory document that records calls (requires `mock` feature)
//! - `WebDocument` - Browser document on top of `web-sys` (requires `web` feature)
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use rosette_host::{HostDocument, HostEvent, MockDocument};
//! use std::rc::Rc;
//!
//! let doc = MockDocument::new().with_container("app");
//! doc.set_inner_html("app", "<p data-reactid=\"0\">hi</p>").unwrap();
//!
//! doc.add_listener("click", Rc::new(|event: &HostEvent| {
//!     assert_eq!(event.event_type(), "click");
//! }))
//! .unwrap();
//!
//! let target = doc.find_by_attribute("data-reactid", "0").unwrap();
//! doc.dispatch(&HostEvent::new("click").with_target(target)).unwrap();
//! assert_eq!(doc.count_dispatches(), 1);
//! # }
//! ```

pub mod document;
pub mod error;
pub mod event;
#[cfg(feature = "mock")]
pub mod mock;
#[cfg(feature = "web")]
pub mod web;

pub use document::{HostDocument, HostListener, ListenerId};
pub use error::{HostError, HostResult};
pub use event::{HostEvent, TargetNode};
#[cfg(feature = "mock")]
pub use mock::{DocumentCall, MockDocument};
#[cfg(feature = "web")]
pub use web::WebDocument;
