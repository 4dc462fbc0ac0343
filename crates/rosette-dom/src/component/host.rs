use super::{ComponentInstance, MountContext};
use crate::element::ElementDescriptor;
use crate::error::RenderResult;
use crate::event::{DelegationId, event_type_for};
use crate::factory::instantiate_component_with;
use crate::identity::{REACT_ID_ATTRIBUTE, ReactId};
use crate::props::{CHILDREN, PropValue};
use rosette_core::profiling::profile_function;
use std::fmt::Write;

/// Mounts a built-in tag: writes its attributes, delegates its event props
/// and mounts its children at `id.0`, `id.1`, ...
#[derive(Debug)]
pub struct HostComponent {
    current_element: ElementDescriptor,
    root_node_id: Option<ReactId>,
    pub(crate) mount_index: Option<usize>,
    rendered_children: Vec<ComponentInstance>,
    delegations: Vec<DelegationId>,
}

impl HostComponent {
    pub fn new(element: ElementDescriptor) -> Self {
        Self {
            current_element: element,
            root_node_id: None,
            mount_index: None,
            rendered_children: Vec::new(),
            delegations: Vec::new(),
        }
    }

    pub fn element(&self) -> &ElementDescriptor {
        &self.current_element
    }

    pub fn tag_name(&self) -> &str {
        self.current_element.tag_name().unwrap_or_default()
    }

    pub fn root_node_id(&self) -> Option<&ReactId> {
        self.root_node_id.as_ref()
    }

    /// Child instances, in the order they were mounted.
    pub fn rendered_children(&self) -> &[ComponentInstance] {
        &self.rendered_children
    }

    /// Delegations registered for this element's event props.
    pub fn delegations(&self) -> &[DelegationId] {
        &self.delegations
    }

    pub fn mount_component(
        &mut self,
        id: ReactId,
        ctx: &mut MountContext<'_>,
    ) -> RenderResult<String> {
        profile_function!();
        tracing::trace!(%id, tag = self.tag_name(), "mounting host component");

        self.root_node_id = Some(id.clone());
        self.rendered_children.clear();
        self.delegations.clear();

        let element = self.current_element.clone();
        let tag = element.tag_name().unwrap_or_default();

        let mut markup = String::new();
        let _ = write!(markup, "<{} {}=\"{}\"", tag, REACT_ID_ATTRIBUTE, id);

        for (name, value) in element.props().iter() {
            if name == CHILDREN {
                continue;
            }

            if let Some(event_type) = event_type_for(name) {
                match value {
                    PropValue::Handler(handler) => {
                        let delegation =
                            ctx.bridge.delegate(id.selector(), &event_type, handler.clone())?;
                        self.delegations.push(delegation);
                    }
                    PropValue::Null => {}
                    other => {
                        tracing::warn!(
                            %id,
                            prop = name,
                            value = ?other,
                            "event prop is not a handler, ignoring"
                        );
                    }
                }
                continue;
            }

            if !value.is_truthy() {
                continue;
            }
            match value.to_attribute_value() {
                Some(attribute) => {
                    let _ = write!(markup, " {}={}", name, attribute);
                }
                None => {
                    tracing::warn!(%id, prop = name, "prop has no attribute form, skipping");
                }
            }
        }
        markup.push('>');

        for (index, child) in element.children().iter().enumerate() {
            let mut instance = instantiate_component_with(child, ctx.config)?;
            instance.set_mount_index(index);
            let child_markup = instance.mount_component(id.child(index), ctx)?;
            markup.push_str(&ctx.config.child_separator);
            markup.push_str(&child_markup);
            self.rendered_children.push(instance);
        }

        let _ = write!(markup, "</{}>", tag);

        Ok(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{ClassSpec, create_class};
    use crate::component::MountReadyQueue;
    use crate::element::{Node, create_element};
    use crate::error::RenderError;
    use crate::event::{EventBridge, EventHandler};
    use crate::props::Props;
    use crate::render::RenderConfig;
    use rosette_host::MockDocument;
    use std::rc::Rc;

    #[test]
    fn test_id_recorded_when_child_fails() {
        let doc = Rc::new(MockDocument::new());
        let mut bridge = EventBridge::new(doc);
        let mut queue = MountReadyQueue::new();
        let config = RenderConfig::default();

        let broken = create_class(
            ClassSpec::new()
                .display_name("Broken")
                .component_will_mount(|_| Err("not ready".into()))
                .render(|_| Some(Node::from("never"))),
        );
        let element = create_element(
            "div",
            Some(Props::new().with("onClick", EventHandler::new(|_| {}))),
            vec![Node::from("ok"), Node::from(create_element(&broken, None, Vec::new()))],
        );

        let mut host = HostComponent::new(element);
        let mut ctx = MountContext::new(&mut bridge, &mut queue, &config);
        let err = host.mount_component(ReactId::root(3), &mut ctx).unwrap_err();

        assert!(matches!(err, RenderError::WillMount { .. }));
        assert_eq!(host.root_node_id(), Some(&ReactId::root(3)));
        assert_eq!(host.delegations().len(), 1);
        assert_eq!(host.rendered_children().len(), 1);
    }
}
