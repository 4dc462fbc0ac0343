//! Render entry point.
//!
//! A [`Renderer`] owns everything a render pass shares across calls: the root
//! index counter, the event bridge with its delegations and the last tree
//! mounted into each container.
//!
//! # Example
//! ```
//! use std::rc::Rc;
//! use rosette_dom::{Renderer, create_element, nodes, props};
//! use rosette_host::MockDocument;
//!
//! let doc = Rc::new(MockDocument::new().with_container("app"));
//! let mut renderer = Renderer::new(doc.clone());
//!
//! let root = renderer
//!     .render(create_element("div", Some(props! { "id" => "x" }), nodes!["hi"]), "app")
//!     .unwrap();
//! assert_eq!(root.as_str(), "0");
//! assert_eq!(
//!     doc.inner_html("app").as_deref(),
//!     Some("<div data-reactid=\"0\" id=x> <span data-reactid=\"0.0\">hi</span></div>")
//! );
//! ```

use crate::component::{ComponentInstance, MountContext, MountReadyQueue};
use crate::element::Node;
use crate::error::{RenderError, RenderResult};
use crate::event::EventBridge;
use crate::factory::instantiate_component_with;
use crate::identity::ReactId;
use indexmap::IndexMap;
use rosette_core::profiling::{new_frame, profile_function, profile_scope};
use rosette_host::HostDocument;
use std::rc::Rc;

/// Default name of the event dispatched once a render pass is complete.
pub const MOUNT_READY_EVENT: &str = "mountReady";

/// Render pass settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Custom event dispatched on the document after the post-mount hooks
    /// have run. `None` disables it.
    pub mount_ready_event: Option<String>,
    /// Reject host tag names that are not valid element names.
    pub validate_tag_names: bool,
    /// Written before each child's markup.
    pub child_separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mount_ready_event: Some(MOUNT_READY_EVENT.to_string()),
            validate_tag_names: true,
            child_separator: " ".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn with_mount_ready_event(mut self, event_type: impl Into<String>) -> Self {
        self.mount_ready_event = Some(event_type.into());
        self
    }

    pub fn without_mount_ready_event(mut self) -> Self {
        self.mount_ready_event = None;
        self
    }

    pub fn with_validate_tag_names(mut self, validate: bool) -> Self {
        self.validate_tag_names = validate;
        self
    }

    pub fn with_child_separator(mut self, separator: impl Into<String>) -> Self {
        self.child_separator = separator.into();
        self
    }
}

/// Mounts descriptor trees into host containers.
pub struct Renderer {
    bridge: EventBridge,
    config: RenderConfig,
    next_root_index: u64,
    mounted: IndexMap<String, ComponentInstance>,
}

impl Renderer {
    pub fn new(host: Rc<dyn HostDocument>) -> Self {
        Self::with_config(host, RenderConfig::default())
    }

    pub fn with_config(host: Rc<dyn HostDocument>, config: RenderConfig) -> Self {
        Self {
            bridge: EventBridge::new(host),
            config,
            next_root_index: 0,
            mounted: IndexMap::new(),
        }
    }

    /// Mount `node` as the entire content of `container` and return its root id.
    ///
    /// Every call consumes a fresh root index, including calls that fail.
    /// Pre-mount failures abort before the container is written. Post-mount
    /// hooks all run once the container has been written; if any of them
    /// fail the tree stays mounted and [`RenderError::DidMount`] lists the
    /// failures.
    pub fn render(&mut self, node: impl Into<Node>, container: &str) -> RenderResult<ReactId> {
        new_frame();
        profile_function!();
        let node = node.into();

        let root = ReactId::root(self.next_root_index);
        self.next_root_index += 1;

        let span = tracing::debug_span!("render", root = %root, container);
        let _guard = span.enter();

        let mut instance = instantiate_component_with(&node, &self.config)?;
        let mut mount_ready = MountReadyQueue::new();
        let markup = {
            let mut ctx = MountContext::new(&mut self.bridge, &mut mount_ready, &self.config);
            instance.mount_component(root.clone(), &mut ctx)?
        };

        self.bridge.host().set_inner_html(container, &markup)?;
        tracing::debug!(
            bytes = markup.len(),
            pending = mount_ready.len(),
            "container written"
        );
        self.mounted.insert(container.to_string(), instance);

        let failures = {
            profile_scope!("mount_ready");
            mount_ready.flush()
        };

        if let Some(event_type) = &self.config.mount_ready_event {
            self.bridge.dispatch(event_type, [("root", root.as_str())])?;
        }

        if !failures.is_empty() {
            return Err(RenderError::DidMount { root, failures });
        }
        Ok(root)
    }

    /// Root index the next `render` call will use.
    pub fn next_root_index(&self) -> u64 {
        self.next_root_index
    }

    /// The tree last mounted into `container`.
    pub fn mounted_root(&self, container: &str) -> Option<&ComponentInstance> {
        self.mounted.get(container)
    }

    pub fn bridge(&self) -> &EventBridge {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut EventBridge {
        &mut self.bridge
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("config", &self.config)
            .field("next_root_index", &self.next_root_index)
            .field("containers", &self.mounted.keys().collect::<Vec<_>>())
            .field("bridge", &self.bridge)
            .finish()
    }
}
