//! Event delegation tests.
//!
//! Events are dispatched through the mock document with a target located in
//! the rendered markup, the same way a browser would report them.

use rosette_dom::{
    EventHandler, MOUNT_READY_EVENT, Node, RenderConfig, Renderer, create_element, nodes, props,
};
use rosette_host::{HostDocument, HostEvent, MockDocument};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn counter() -> (Rc<Cell<u32>>, EventHandler) {
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    (hits, EventHandler::new(move |_| h.set(h.get() + 1)))
}

fn click_on(doc: &MockDocument, id: &str) -> HostEvent {
    let target = doc
        .find_by_attribute("data-reactid", id)
        .unwrap_or_else(|| panic!("no element at {id}"));
    HostEvent::new("click").with_target(target)
}

#[test]
fn test_on_click_fires_once_for_its_node() {
    let doc = Rc::new(MockDocument::new().with_container("app"));
    let mut renderer = Renderer::new(doc.clone());
    let (hits, handler) = counter();

    let tree = create_element(
        "div",
        None,
        nodes![
            create_element("span", None, nodes!["label"]),
            create_element("button", Some(props! { "onClick" => handler }), nodes!["go"]),
        ],
    );
    renderer.render(tree, "app").unwrap();

    let event = click_on(&doc, "0.1");
    assert_eq!(event.target().map(|t| t.tag()), Some("button"));
    doc.dispatch(&event).unwrap();
    assert_eq!(hits.get(), 1);

    // Siblings, descendants and the parent do not trigger it.
    doc.dispatch(&click_on(&doc, "0.0")).unwrap();
    doc.dispatch(&click_on(&doc, "0.1.0")).unwrap();
    doc.dispatch(&click_on(&doc, "0")).unwrap();
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_handlers_are_delegated_not_written() {
    let doc = Rc::new(MockDocument::new().with_container("app"));
    let mut renderer = Renderer::new(doc.clone());
    let (_, a) = counter();
    let (_, b) = counter();

    let tree = create_element(
        "div",
        None,
        nodes![
            create_element("a", Some(props! { "onClick" => a, "href" => "#" }), Vec::new()),
            create_element("a", Some(props! { "onClick" => b }), Vec::new()),
        ],
    );
    renderer.render(tree, "app").unwrap();

    let markup = doc.inner_html("app").unwrap();
    assert!(!markup.contains("onClick"));
    assert!(markup.contains("<a data-reactid=\"0.0\" href=#></a>"));

    assert_eq!(renderer.bridge().delegation_count(), 2);
    assert_eq!(doc.count_listeners("click"), 1);
    let selectors: Vec<String> = renderer
        .bridge()
        .delegated_selectors("click")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        selectors,
        ["[data-reactid=\"0.0\"]", "[data-reactid=\"0.1\"]"]
    );
}

#[test]
fn test_multi_word_event_name() {
    let doc = Rc::new(MockDocument::new().with_container("app"));
    let mut renderer = Renderer::new(doc.clone());
    let (hits, handler) = counter();

    renderer
        .render(
            create_element("div", Some(props! { "onMouseDown" => handler }), Vec::new()),
            "app",
        )
        .unwrap();

    assert_eq!(doc.count_listeners("mouseDown"), 1);
    let target = doc.find_by_attribute("data-reactid", "0").unwrap();
    doc.dispatch(&HostEvent::new("mouseDown").with_target(target))
        .unwrap();
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_non_handler_event_prop_is_skipped() {
    let doc = Rc::new(MockDocument::new().with_container("app"));
    let mut renderer = Renderer::new(doc.clone());

    renderer
        .render(
            create_element("div", Some(props! { "onClick" => "alert(1)" }), Vec::new()),
            "app",
        )
        .unwrap();

    assert_eq!(
        doc.inner_html("app").as_deref(),
        Some("<div data-reactid=\"0\"></div>")
    );
    assert_eq!(renderer.bridge().delegation_count(), 0);
    assert_eq!(doc.count_listeners("click"), 0);
}

#[test]
fn test_handlers_survive_rerender() {
    let doc = Rc::new(MockDocument::new().with_container("app"));
    let mut renderer = Renderer::new(doc.clone());
    let (first_hits, first) = counter();
    let (second_hits, second) = counter();

    renderer
        .render(create_element("button", Some(props! { "onClick" => first }), Vec::new()), "app")
        .unwrap();
    renderer
        .render(create_element("button", Some(props! { "onClick" => second }), Vec::new()), "app")
        .unwrap();

    // The second pass mounted at root 1; only its node is in the container.
    assert!(doc.find_by_attribute("data-reactid", "0").is_none());
    doc.dispatch(&click_on(&doc, "1")).unwrap();

    assert_eq!(first_hits.get(), 0);
    assert_eq!(second_hits.get(), 1);
}

#[test]
fn test_mount_ready_event_carries_root() {
    let doc = Rc::new(MockDocument::new().with_container("app"));
    let mut renderer = Renderer::new(doc.clone());
    let roots = Rc::new(RefCell::new(Vec::new()));

    let r = roots.clone();
    renderer
        .bridge()
        .on(
            MOUNT_READY_EVENT,
            EventHandler::new(move |event| {
                assert!(event.is_synthetic());
                r.borrow_mut().push(event.detail("root").map(str::to_string));
            }),
        )
        .unwrap();

    renderer.render("a", "app").unwrap();
    renderer.render("b", "app").unwrap();

    assert_eq!(
        *roots.borrow(),
        vec![Some("0".to_string()), Some("1".to_string())]
    );
}

#[test]
fn test_renamed_mount_ready_event() {
    let doc = Rc::new(MockDocument::new().with_container("app"));
    let config = RenderConfig::default().with_mount_ready_event("rosette:ready");
    let mut renderer = Renderer::with_config(doc.clone(), config);
    let (hits, handler) = counter();

    renderer.bridge().on("rosette:ready", handler).unwrap();
    renderer.render(Node::from("x"), "app").unwrap();

    assert_eq!(hits.get(), 1);
}
