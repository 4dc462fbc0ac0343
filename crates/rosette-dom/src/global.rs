//! Thread-local default renderer.
//!
//! Install once per thread, then render without threading a [`Renderer`]
//! through the application:
//!
//! ```
//! use std::rc::Rc;
//! use rosette_dom::{create_element, global, nodes};
//! use rosette_host::MockDocument;
//!
//! let doc = Rc::new(MockDocument::new().with_container("app"));
//! global::install(doc.clone()).unwrap();
//!
//! let root = global::render(create_element("p", None, nodes!["hello"]), "app").unwrap();
//! assert_eq!(root.as_str(), "0");
//! ```

use crate::element::Node;
use crate::error::{RenderError, RenderResult};
use crate::event::EventBridge;
use crate::identity::ReactId;
use crate::render::{RenderConfig, Renderer};
use rosette_host::HostDocument;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static RENDERER: RefCell<Option<Renderer>> = const { RefCell::new(None) };
}

/// Install the default renderer for this thread.
pub fn install(host: Rc<dyn HostDocument>) -> RenderResult<()> {
    install_with(host, RenderConfig::default())
}

/// Install the default renderer with custom settings.
pub fn install_with(host: Rc<dyn HostDocument>, config: RenderConfig) -> RenderResult<()> {
    RENDERER.with(|cell| {
        let mut slot = cell.try_borrow_mut().map_err(|_| RenderError::Reentrant)?;
        if slot.is_some() {
            return Err(RenderError::AlreadyInstalled);
        }
        *slot = Some(Renderer::with_config(host, config));
        tracing::debug!("default renderer installed");
        Ok(())
    })
}

/// Remove and return this thread's default renderer.
pub fn uninstall() -> RenderResult<Option<Renderer>> {
    RENDERER.with(|cell| {
        let mut slot = cell.try_borrow_mut().map_err(|_| RenderError::Reentrant)?;
        Ok(slot.take())
    })
}

/// Whether a default renderer is installed on this thread.
pub fn is_installed() -> bool {
    RENDERER.with(|cell| cell.try_borrow().map(|slot| slot.is_some()).unwrap_or(true))
}

/// Render through the default renderer. See [`Renderer::render`].
///
/// Calling this from a lifecycle hook of a pass that is already running
/// returns [`RenderError::Reentrant`].
pub fn render(node: impl Into<Node>, container: &str) -> RenderResult<ReactId> {
    let node = node.into();
    with_renderer(|renderer| renderer.render(node, container))?
}

/// Access the default renderer's event bridge.
pub fn with_bridge<R>(f: impl FnOnce(&mut EventBridge) -> R) -> RenderResult<R> {
    with_renderer(|renderer| f(renderer.bridge_mut()))
}

fn with_renderer<R>(f: impl FnOnce(&mut Renderer) -> R) -> RenderResult<R> {
    RENDERER.with(|cell| {
        let mut slot = cell.try_borrow_mut().map_err(|_| RenderError::Reentrant)?;
        let renderer = slot.as_mut().ok_or(RenderError::NotInstalled)?;
        Ok(f(renderer))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{ClassSpec, create_class};
    use crate::element::create_element;
    use rosette_host::MockDocument;

    #[test]
    fn test_render_requires_install() {
        uninstall().unwrap();
        assert!(!is_installed());
        assert!(matches!(render("x", "app"), Err(RenderError::NotInstalled)));
    }

    #[test]
    fn test_install_once() {
        uninstall().unwrap();
        let doc = Rc::new(MockDocument::new().with_container("app"));
        install(doc.clone()).unwrap();
        assert!(is_installed());
        assert!(matches!(install(doc), Err(RenderError::AlreadyInstalled)));

        assert!(uninstall().unwrap().is_some());
        assert!(!is_installed());
    }

    #[test]
    fn test_reentrant_render_from_hook() {
        uninstall().unwrap();
        let doc = Rc::new(MockDocument::new().with_container("app").with_container("other"));
        install(doc.clone()).unwrap();

        let class = create_class(
            ClassSpec::new()
                .display_name("Nested")
                .component_will_mount(|_| match render("inner", "other") {
                    Err(RenderError::Reentrant) => Err("re-entered".into()),
                    _ => Ok(()),
                })
                .render(|_| Some(Node::from("outer"))),
        );

        let err = render(create_element(&class, None, Vec::new()), "app").unwrap_err();
        match err {
            RenderError::WillMount { source, .. } => assert_eq!(source.message(), "re-entered"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(doc.inner_html("other").as_deref(), Some(""));
    }
}
