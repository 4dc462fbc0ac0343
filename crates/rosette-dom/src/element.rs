//! Element descriptors: immutable descriptions of what to render.

use crate::class::ComponentClass;
use crate::props::{CHILDREN, KEY, PropValue, Props, format_number};
use std::fmt;
use std::rc::Rc;

/// A renderable node: a primitive leaf or an element descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Number(f64),
    Element(ElementDescriptor),
}

impl Node {
    /// Whether this node mounts as a text component.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Node::Text(_) | Node::Number(_))
    }

    /// String form of a primitive leaf.
    pub fn text_value(&self) -> Option<String> {
        match self {
            Node::Text(s) => Some(s.clone()),
            Node::Number(n) => Some(format_number(*n)),
            Node::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&ElementDescriptor> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&String> for Node {
    fn from(text: &String) -> Self {
        Node::Text(text.clone())
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Number(n)
    }
}

impl From<f32> for Node {
    fn from(n: f32) -> Self {
        Node::Number(f64::from(n))
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Node::Number(f64::from(n))
    }
}

impl From<u32> for Node {
    fn from(n: u32) -> Self {
        Node::Number(f64::from(n))
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Number(n as f64)
    }
}

impl From<usize> for Node {
    fn from(n: usize) -> Self {
        Node::Number(n as f64)
    }
}

impl From<ElementDescriptor> for Node {
    fn from(element: ElementDescriptor) -> Self {
        Node::Element(element)
    }
}

/// What a descriptor mounts as: a built-in tag or a user component class.
#[derive(Clone, PartialEq)]
pub enum ElementType {
    Host(String),
    Composite(ComponentClass),
}

impl ElementType {
    /// Tag name or class name, for diagnostics.
    pub fn name(&self) -> &str {
        match self {
            ElementType::Host(tag) => tag,
            ElementType::Composite(class) => class.name(),
        }
    }
}

impl fmt::Debug for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Host(tag) => write!(f, "Host({tag:?})"),
            ElementType::Composite(class) => write!(f, "Composite({})", class.name()),
        }
    }
}

impl From<&str> for ElementType {
    fn from(tag: &str) -> Self {
        ElementType::Host(tag.to_string())
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        ElementType::Host(tag)
    }
}

impl From<ComponentClass> for ElementType {
    fn from(class: ComponentClass) -> Self {
        ElementType::Composite(class)
    }
}

impl From<&ComponentClass> for ElementType {
    fn from(class: &ComponentClass) -> Self {
        ElementType::Composite(class.clone())
    }
}

#[derive(Debug, PartialEq)]
struct ElementData {
    ty: ElementType,
    key: Option<String>,
    props: Props,
}

/// Immutable description of an element: its type, optional key and props.
///
/// Cloning is cheap; clones share the same description.
#[derive(Clone, PartialEq)]
pub struct ElementDescriptor(Rc<ElementData>);

impl ElementDescriptor {
    pub fn new(ty: impl Into<ElementType>, key: Option<String>, props: Props) -> Self {
        Self(Rc::new(ElementData {
            ty: ty.into(),
            key,
            props,
        }))
    }

    pub fn element_type(&self) -> &ElementType {
        &self.0.ty
    }

    /// Tag name for host elements.
    pub fn tag_name(&self) -> Option<&str> {
        match &self.0.ty {
            ElementType::Host(tag) => Some(tag),
            ElementType::Composite(_) => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.0.key.as_deref()
    }

    pub fn props(&self) -> &Props {
        &self.0.props
    }

    pub fn children(&self) -> &[Node] {
        self.0.props.children()
    }
}

impl fmt::Debug for ElementDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementDescriptor")
            .field("type", &self.0.ty)
            .field("key", &self.0.key)
            .field("props", &self.0.props)
            .finish()
    }
}

/// Build a descriptor.
///
/// Every config entry except `key` is copied into fresh props; a truthy `key`
/// is stored on the descriptor. Children are always stored as an ordered
/// sequence under `children`; when no children are passed, a `children`
/// entry from the config is kept.
///
/// # Example
/// ```
/// use rosette_dom::{Node, Props, create_element};
///
/// let element = create_element("div", Some(Props::new().with("id", "x")), vec![Node::from("hi")]);
/// assert_eq!(element.tag_name(), Some("div"));
/// assert_eq!(element.children(), &[Node::from("hi")]);
/// ```
pub fn create_element(
    ty: impl Into<ElementType>,
    config: Option<Props>,
    children: Vec<Node>,
) -> ElementDescriptor {
    let mut props = Props::new();
    let mut key = None;

    for (name, value) in config.into_iter().flatten() {
        if name == KEY {
            if value.is_truthy() {
                key = value.to_attribute_value();
            }
            continue;
        }
        props.insert(name, value);
    }

    if !children.is_empty() {
        props.insert(CHILDREN, PropValue::Children(children));
    }

    ElementDescriptor::new(ty, key, props)
}
