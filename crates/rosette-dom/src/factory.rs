//! Chooses the component kind that mounts a node.

use crate::component::{CompositeComponent, ComponentInstance, HostComponent, TextComponent};
use crate::element::{ElementType, Node};
use crate::error::{RenderError, RenderResult};
use crate::render::RenderConfig;

/// Wrap `node` in the component kind that mounts it, validating tag names.
///
/// - strings and numbers mount as [`TextComponent`]
/// - host descriptors mount as [`HostComponent`]
/// - composite descriptors mount as [`CompositeComponent`]
pub fn instantiate_component(node: &Node) -> RenderResult<ComponentInstance> {
    instantiate_component_with(node, &RenderConfig::default())
}

/// [`instantiate_component`] honoring `config`.
pub fn instantiate_component_with(
    node: &Node,
    config: &RenderConfig,
) -> RenderResult<ComponentInstance> {
    let element = match node {
        Node::Text(_) | Node::Number(_) => {
            let text = node.text_value().unwrap_or_default();
            return Ok(ComponentInstance::Text(TextComponent::new(text)));
        }
        Node::Element(element) => element,
    };

    match element.element_type() {
        ElementType::Host(tag) => {
            if config.validate_tag_names && !is_valid_tag_name(tag) {
                return Err(RenderError::InvalidElementType {
                    type_name: tag.clone(),
                });
            }
            Ok(ComponentInstance::Host(HostComponent::new(element.clone())))
        }
        ElementType::Composite(class) => CompositeComponent::new(element.clone())
            .map(ComponentInstance::Composite)
            .ok_or_else(|| RenderError::InvalidElementType {
                type_name: class.name().to_string(),
            }),
    }
}

/// Tag names start with an ASCII letter followed by letters, digits or `-`.
pub fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{ClassSpec, create_class};
    use crate::element::create_element;

    #[test]
    fn test_kinds() {
        let text = instantiate_component(&Node::from("hi")).unwrap();
        assert_eq!(text.as_text().map(|t| t.text()), Some("hi"));

        let number = instantiate_component(&Node::from(3)).unwrap();
        assert_eq!(number.as_text().map(|t| t.text()), Some("3"));

        let div = Node::from(create_element("div", None, Vec::new()));
        let host = instantiate_component(&div).unwrap();
        assert_eq!(host.as_host().map(|h| h.tag_name()), Some("div"));

        let class = create_class(ClassSpec::new().display_name("Panel"));
        let panel = Node::from(create_element(&class, None, Vec::new()));
        let composite = instantiate_component(&panel).unwrap();
        assert_eq!(composite.as_composite().map(|c| c.name()), Some("Panel"));
    }

    #[test]
    fn test_invalid_tag_names() {
        for tag in ["", "1div", "di v", "<p>"] {
            let node = Node::from(create_element(tag, None, Vec::new()));
            assert!(matches!(
                instantiate_component(&node),
                Err(RenderError::InvalidElementType { .. })
            ));
        }

        let lenient = RenderConfig::default().with_validate_tag_names(false);
        let node = Node::from(create_element("1div", None, Vec::new()));
        assert!(instantiate_component_with(&node, &lenient).is_ok());
    }

    #[test]
    fn test_custom_element_names_are_valid() {
        assert!(is_valid_tag_name("my-widget"));
        assert!(is_valid_tag_name("h1"));
    }
}
