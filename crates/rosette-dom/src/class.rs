//! User components: the [`Component`] capability trait, component classes and
//! the `create_class` builder.
//!
//! A [`ComponentClass`] is what a composite descriptor's type refers to. It
//! knows how to construct a fresh user instance from props. Classes come from
//! two places:
//!
//! - a Rust type implementing [`Component`], wrapped with [`ComponentClass::new`]
//!   or [`ComponentClass::of`]
//! - a [`ClassSpec`] of closures, turned into a class by [`create_class`]

use crate::element::Node;
use crate::error::HookResult;
use crate::identity::ReactId;
use crate::props::Props;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Capabilities of a user component instance.
///
/// Only `render` is required. Hooks default to doing nothing.
pub trait Component {
    /// Produce the single node this component mounts as. `None` is a caller
    /// error reported as `MissingRenderOutput`.
    fn render(&self) -> Option<Node>;

    /// Runs once before `render`. An error aborts the render pass.
    fn component_will_mount(&mut self) -> HookResult {
        Ok(())
    }

    /// Runs after the container has been written.
    fn component_did_mount(&mut self) -> HookResult {
        Ok(())
    }

    /// Receives the back-reference to the wrapper that mounted this instance.
    fn attach_internal_instance(&mut self, _internal: InternalInstance) {}
}

/// Mount bookkeeping shared between a composite wrapper and its user instance.
#[derive(Debug)]
pub(crate) struct MountRecord {
    class_name: Rc<str>,
    root_node_id: RefCell<Option<ReactId>>,
}

impl MountRecord {
    pub(crate) fn new(class_name: Rc<str>) -> Rc<Self> {
        Rc::new(Self {
            class_name,
            root_node_id: RefCell::new(None),
        })
    }

    pub(crate) fn set_root_node_id(&self, id: ReactId) {
        *self.root_node_id.borrow_mut() = Some(id);
    }
}

/// Weak back-reference from a user instance to the composite wrapper that
/// mounted it. It never keeps the wrapper alive.
#[derive(Debug, Clone)]
pub struct InternalInstance(Weak<MountRecord>);

impl InternalInstance {
    pub(crate) fn new(record: &Rc<MountRecord>) -> Self {
        Self(Rc::downgrade(record))
    }

    /// Identity path of the wrapper, if it is still alive and mounted.
    pub fn root_node_id(&self) -> Option<ReactId> {
        self.0
            .upgrade()
            .and_then(|record| record.root_node_id.borrow().clone())
    }

    pub fn class_name(&self) -> Option<String> {
        self.0.upgrade().map(|record| record.class_name.to_string())
    }

    /// Whether the wrapper is still alive.
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

type Constructor = Rc<dyn Fn(Props) -> Box<dyn Component>>;

/// A constructor for user component instances.
#[derive(Clone)]
pub struct ComponentClass {
    name: Rc<str>,
    construct: Constructor,
}

impl ComponentClass {
    /// Wrap a constructor function.
    ///
    /// # Example
    /// ```
    /// use rosette_dom::{Component, ComponentClass, Node, Props};
    ///
    /// struct Greeting { name: String }
    ///
    /// impl Component for Greeting {
    ///     fn render(&self) -> Option<Node> {
    ///         Some(Node::from(format!("Hello, {}", self.name)))
    ///     }
    /// }
    ///
    /// let class = ComponentClass::new("Greeting", |props: Props| Greeting {
    ///     name: props.get_str("name").unwrap_or("world").to_string(),
    /// });
    /// assert_eq!(class.name(), "Greeting");
    /// ```
    pub fn new<C, F>(name: impl Into<Rc<str>>, construct: F) -> Self
    where
        C: Component + 'static,
        F: Fn(Props) -> C + 'static,
    {
        Self {
            name: name.into(),
            construct: Rc::new(move |props: Props| {
                Box::new(construct(props)) as Box<dyn Component>
            }),
        }
    }

    /// Class for a type that builds itself from props.
    pub fn of<C>() -> Self
    where
        C: Component + From<Props> + 'static,
    {
        let full = std::any::type_name::<C>();
        let short = full.rsplit("::").next().unwrap_or(full);
        Self::new(short, |props: Props| C::from(props))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_rc(&self) -> Rc<str> {
        self.name.clone()
    }

    /// Construct a new user instance.
    pub fn construct(&self, props: Props) -> Box<dyn Component> {
        (self.construct)(props)
    }
}

impl PartialEq for ComponentClass {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.construct, &other.construct)
    }
}

impl fmt::Debug for ComponentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentClass({})", self.name)
    }
}

type RenderFn = Rc<dyn Fn(&ClassInstance) -> Option<Node>>;
type InitialStateFn = Rc<dyn Fn(&Props) -> Props>;
type HookFn = Rc<dyn Fn(&mut ClassInstance) -> HookResult>;

/// Closures making up a class built by [`create_class`].
///
/// Every setter is first-wins: once a capability is defined, later
/// definitions (directly or through [`ClassSpec::mixin`]) are ignored.
#[derive(Clone, Default)]
pub struct ClassSpec {
    display_name: Option<String>,
    render: Option<RenderFn>,
    get_initial_state: Option<InitialStateFn>,
    component_will_mount: Option<HookFn>,
    component_did_mount: Option<HookFn>,
}

fn first_wins<T>(slot: &mut Option<T>, value: T, capability: &str) {
    if slot.is_some() {
        tracing::trace!(capability, "already defined, keeping the first definition");
        return;
    }
    *slot = Some(value);
}

impl ClassSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        first_wins(&mut self.display_name, name.into(), "displayName");
        self
    }

    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(&ClassInstance) -> Option<Node> + 'static,
    {
        first_wins(&mut self.render, Rc::new(f) as RenderFn, "render");
        self
    }

    /// Initial state, computed from the props during construction.
    pub fn get_initial_state<F>(mut self, f: F) -> Self
    where
        F: Fn(&Props) -> Props + 'static,
    {
        first_wins(
            &mut self.get_initial_state,
            Rc::new(f) as InitialStateFn,
            "getInitialState",
        );
        self
    }

    pub fn component_will_mount<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut ClassInstance) -> HookResult + 'static,
    {
        first_wins(
            &mut self.component_will_mount,
            Rc::new(f) as HookFn,
            "componentWillMount",
        );
        self
    }

    pub fn component_did_mount<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut ClassInstance) -> HookResult + 'static,
    {
        first_wins(
            &mut self.component_did_mount,
            Rc::new(f) as HookFn,
            "componentDidMount",
        );
        self
    }

    /// Fill every capability this spec does not define from `other`.
    pub fn mixin(mut self, other: ClassSpec) -> Self {
        if let Some(name) = other.display_name {
            first_wins(&mut self.display_name, name, "displayName");
        }
        if let Some(f) = other.render {
            first_wins(&mut self.render, f, "render");
        }
        if let Some(f) = other.get_initial_state {
            first_wins(&mut self.get_initial_state, f, "getInitialState");
        }
        if let Some(f) = other.component_will_mount {
            first_wins(&mut self.component_will_mount, f, "componentWillMount");
        }
        if let Some(f) = other.component_did_mount {
            first_wins(&mut self.component_did_mount, f, "componentDidMount");
        }
        self
    }
}

impl fmt::Debug for ClassSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassSpec")
            .field("display_name", &self.display_name)
            .field("render", &self.render.is_some())
            .field("get_initial_state", &self.get_initial_state.is_some())
            .field("component_will_mount", &self.component_will_mount.is_some())
            .field("component_did_mount", &self.component_did_mount.is_some())
            .finish()
    }
}

/// A user instance of a class built by [`create_class`].
pub struct ClassInstance {
    props: Props,
    state: Option<Props>,
    spec: Rc<ClassSpec>,
    internal: Option<InternalInstance>,
}

impl ClassInstance {
    fn new(spec: Rc<ClassSpec>, props: Props) -> Self {
        let state = spec.get_initial_state.as_ref().map(|init| init(&props));
        Self {
            props,
            state,
            spec,
            internal: None,
        }
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    /// State produced by `get_initial_state`, `None` when the class defines none.
    pub fn state(&self) -> Option<&Props> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut Props> {
        self.state.as_mut()
    }

    /// Back-reference to the wrapper, available once mounting has begun.
    pub fn internal_instance(&self) -> Option<&InternalInstance> {
        self.internal.as_ref()
    }
}

impl Component for ClassInstance {
    fn render(&self) -> Option<Node> {
        self.spec.render.as_ref().and_then(|render| render(self))
    }

    fn component_will_mount(&mut self) -> HookResult {
        match self.spec.component_will_mount.clone() {
            Some(hook) => hook(self),
            None => Ok(()),
        }
    }

    fn component_did_mount(&mut self) -> HookResult {
        match self.spec.component_did_mount.clone() {
            Some(hook) => hook(self),
            None => Ok(()),
        }
    }

    fn attach_internal_instance(&mut self, internal: InternalInstance) {
        self.internal = Some(internal);
    }
}

/// Build a component class from a spec.
///
/// # Example
/// ```
/// use rosette_dom::{ClassSpec, Node, Props, create_class};
///
/// let hello = create_class(
///     ClassSpec::new()
///         .display_name("HelloMessage")
///         .get_initial_state(|_props| Props::new().with("greeting", "say:"))
///         .render(|this| {
///             let greeting = this.state()?.get_str("greeting")?.to_string();
///             Some(Node::from(greeting))
///         }),
/// );
/// assert_eq!(hello.name(), "HelloMessage");
/// ```
pub fn create_class(spec: ClassSpec) -> ComponentClass {
    let name = spec
        .display_name
        .clone()
        .unwrap_or_else(|| "Component".to_string());
    let spec = Rc::new(spec);
    ComponentClass::new(name, move |props: Props| ClassInstance::new(spec.clone(), props))
}
