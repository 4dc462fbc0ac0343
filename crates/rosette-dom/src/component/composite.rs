use super::{ComponentInstance, MountContext};
use crate::class::{Component, ComponentClass, InternalInstance, MountRecord};
use crate::element::{ElementDescriptor, ElementType};
use crate::error::{RenderError, RenderResult};
use crate::factory::instantiate_component_with;
use crate::identity::ReactId;
use rosette_core::profiling::profile_function;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Mounts a user component: constructs the instance, runs its pre-mount hook,
/// renders it and mounts the rendered node under the same identity path.
pub struct CompositeComponent {
    current_element: ElementDescriptor,
    record: Rc<MountRecord>,
    pub(crate) mount_index: Option<usize>,
    root_node_id: Option<ReactId>,
    instance: Option<Rc<RefCell<Box<dyn Component>>>>,
    rendered_component: Option<Box<ComponentInstance>>,
}

impl CompositeComponent {
    /// Wrap a composite descriptor. Returns `None` for host descriptors.
    pub fn new(element: ElementDescriptor) -> Option<Self> {
        let class_name = match element.element_type() {
            ElementType::Composite(class) => class.name_rc(),
            ElementType::Host(_) => return None,
        };
        Some(Self {
            current_element: element,
            record: MountRecord::new(class_name),
            mount_index: None,
            root_node_id: None,
            instance: None,
            rendered_component: None,
        })
    }

    pub fn element(&self) -> &ElementDescriptor {
        &self.current_element
    }

    pub fn class(&self) -> Option<&ComponentClass> {
        match self.current_element.element_type() {
            ElementType::Composite(class) => Some(class),
            ElementType::Host(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        self.current_element.element_type().name()
    }

    pub fn root_node_id(&self) -> Option<&ReactId> {
        self.root_node_id.as_ref()
    }

    /// The user instance, once mounted.
    pub fn instance(&self) -> Option<&Rc<RefCell<Box<dyn Component>>>> {
        self.instance.as_ref()
    }

    /// What the user instance rendered, once mounted.
    pub fn rendered_component(&self) -> Option<&ComponentInstance> {
        self.rendered_component.as_deref()
    }

    pub fn mount_component(
        &mut self,
        id: ReactId,
        ctx: &mut MountContext<'_>,
    ) -> RenderResult<String> {
        profile_function!();
        let Some(class) = self.class().cloned() else {
            return Err(RenderError::InvalidElementType {
                type_name: self.name().to_string(),
            });
        };
        let component = class.name().to_string();
        tracing::trace!(%id, component = %component, "mounting composite component");

        self.root_node_id = Some(id.clone());
        self.record.set_root_node_id(id.clone());

        let mut instance = class.construct(self.current_element.props().clone());
        instance.attach_internal_instance(InternalInstance::new(&self.record));

        instance
            .component_will_mount()
            .map_err(|source| RenderError::WillMount {
                component: component.clone(),
                id: id.clone(),
                source,
            })?;

        let Some(rendered) = instance.render() else {
            return Err(RenderError::MissingRenderOutput { component, id });
        };

        let instance = Rc::new(RefCell::new(instance));
        self.instance = Some(instance.clone());

        let mut child = instantiate_component_with(&rendered, ctx.config)?;
        let markup = child.mount_component(id.clone(), ctx)?;
        self.rendered_component = Some(Box::new(child));

        // Enqueued after the child so rendered composites are notified first.
        ctx.mount_ready.enqueue(component, id, move || {
            instance.borrow_mut().component_did_mount()
        });

        Ok(markup)
    }
}

impl fmt::Debug for CompositeComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeComponent")
            .field("class", &self.name())
            .field("root_node_id", &self.root_node_id)
            .field("mount_index", &self.mount_index)
            .field("mounted", &self.instance.is_some())
            .field("rendered_component", &self.rendered_component)
            .finish()
    }
}
