//! Mounted component instances.
//!
//! Each node of a descriptor tree is mounted by one of three component kinds:
//!
//! - [`TextComponent`] for string and number leaves
//! - [`HostComponent`] for built-in tags
//! - [`CompositeComponent`] for user component classes
//!
//! Mounting is a single depth-first pass. Every kind records the identity path
//! its parent hands it and returns its markup; host components assign child
//! paths, composite components pass their own path through to what they
//! render.

mod composite;
mod host;
mod text;

pub use composite::CompositeComponent;
pub use host::HostComponent;
pub use text::TextComponent;

use crate::error::{HookResult, PostMountFailure, RenderResult};
use crate::event::EventBridge;
use crate::identity::ReactId;
use crate::render::RenderConfig;

/// A mounted (or mountable) component of any kind.
#[derive(Debug)]
pub enum ComponentInstance {
    Text(TextComponent),
    Host(HostComponent),
    Composite(CompositeComponent),
}

impl ComponentInstance {
    /// Mount at `id` and return the markup.
    ///
    /// Instances are single-use: mounting again overwrites the recorded id
    /// and, for composites, constructs a fresh user instance.
    pub fn mount_component(
        &mut self,
        id: ReactId,
        ctx: &mut MountContext<'_>,
    ) -> RenderResult<String> {
        match self {
            ComponentInstance::Text(text) => Ok(text.mount_component(id)),
            ComponentInstance::Host(host) => host.mount_component(id, ctx),
            ComponentInstance::Composite(composite) => composite.mount_component(id, ctx),
        }
    }

    /// Identity path assigned at mount time.
    pub fn root_node_id(&self) -> Option<&ReactId> {
        match self {
            ComponentInstance::Text(text) => text.root_node_id(),
            ComponentInstance::Host(host) => host.root_node_id(),
            ComponentInstance::Composite(composite) => composite.root_node_id(),
        }
    }

    /// Position under the parent host component.
    pub fn mount_index(&self) -> Option<usize> {
        match self {
            ComponentInstance::Text(text) => text.mount_index,
            ComponentInstance::Host(host) => host.mount_index,
            ComponentInstance::Composite(composite) => composite.mount_index,
        }
    }

    pub(crate) fn set_mount_index(&mut self, index: usize) {
        match self {
            ComponentInstance::Text(text) => text.mount_index = Some(index),
            ComponentInstance::Host(host) => host.mount_index = Some(index),
            ComponentInstance::Composite(composite) => composite.mount_index = Some(index),
        }
    }

    pub fn as_text(&self) -> Option<&TextComponent> {
        match self {
            ComponentInstance::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_host(&self) -> Option<&HostComponent> {
        match self {
            ComponentInstance::Host(host) => Some(host),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeComponent> {
        match self {
            ComponentInstance::Composite(composite) => Some(composite),
            _ => None,
        }
    }
}

/// Everything a mount pass threads through the recursion.
pub struct MountContext<'a> {
    pub(crate) bridge: &'a mut EventBridge,
    pub(crate) mount_ready: &'a mut MountReadyQueue,
    pub(crate) config: &'a RenderConfig,
}

impl<'a> MountContext<'a> {
    pub fn new(
        bridge: &'a mut EventBridge,
        mount_ready: &'a mut MountReadyQueue,
        config: &'a RenderConfig,
    ) -> Self {
        Self {
            bridge,
            mount_ready,
            config,
        }
    }
}

struct PendingMount {
    component: String,
    id: ReactId,
    callback: Box<dyn FnOnce() -> HookResult>,
}

/// Post-mount callbacks collected during a mount pass.
///
/// Callbacks run once, in the order they were enqueued. A composite enqueues
/// after its rendered output has been mounted, so a component's callback runs
/// after the callbacks of the composites it rendered.
#[derive(Default)]
pub struct MountReadyQueue {
    pending: Vec<PendingMount>,
}

impl MountReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(
        &mut self,
        component: impl Into<String>,
        id: ReactId,
        callback: impl FnOnce() -> HookResult + 'static,
    ) {
        self.pending.push(PendingMount {
            component: component.into(),
            id,
            callback: Box::new(callback),
        });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Run every callback. Failures do not stop later callbacks; they are
    /// logged and returned.
    pub fn flush(self) -> Vec<PostMountFailure> {
        let mut failures = Vec::new();
        for PendingMount {
            component,
            id,
            callback,
        } in self.pending
        {
            if let Err(error) = callback() {
                tracing::error!(%id, component = %component, %error, "componentDidMount failed");
                failures.push(PostMountFailure {
                    component,
                    id,
                    error,
                });
            }
        }
        failures
    }
}

impl std::fmt::Debug for MountReadyQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountReadyQueue")
            .field("pending", &self.pending.len())
            .finish()
    }
}
