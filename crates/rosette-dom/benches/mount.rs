//! Benchmarks for mounting descriptor trees into markup.
//!
//! Measures:
//! - Flat lists of host elements with text children
//! - Deeply nested host trees
//! - Lists of composite components
//! - Lists with delegated event props

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rosette_dom::{
    ClassSpec, ElementDescriptor, EventHandler, Node, Renderer, create_class, create_element,
    nodes, props,
};
use rosette_host::MockDocument;
use std::rc::Rc;

fn setup() -> Renderer {
    Renderer::new(Rc::new(MockDocument::new().with_container("app")))
}

fn build_list(count: usize) -> ElementDescriptor {
    let items: Vec<Node> = (0..count)
        .map(|i| {
            Node::from(create_element(
                "li",
                Some(props! { "class" => "item" }),
                nodes![format!("Item {}", i)],
            ))
        })
        .collect();
    create_element("ul", None, items)
}

fn build_nested(depth: usize) -> ElementDescriptor {
    let mut node = create_element("span", None, nodes!["leaf"]);
    for _ in 0..depth {
        node = create_element("div", None, nodes![node]);
    }
    node
}

fn bench_flat_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("mount/flat_list");

    for count in [10, 100, 1000] {
        let tree = build_list(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &tree, |b, tree| {
            let mut renderer = setup();
            b.iter(|| black_box(renderer.render(tree.clone(), "app").ok()));
        });
    }

    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("mount/nested");

    for depth in [10, 50, 200] {
        let tree = build_nested(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &tree, |b, tree| {
            let mut renderer = setup();
            b.iter(|| black_box(renderer.render(tree.clone(), "app").ok()));
        });
    }

    group.finish();
}

fn bench_composites(c: &mut Criterion) {
    let mut group = c.benchmark_group("mount/composites");

    let row = create_class(
        ClassSpec::new()
            .display_name("Row")
            .component_did_mount(|_| Ok(()))
            .render(|this| {
                let label = this.props().get_str("label").unwrap_or_default().to_string();
                Some(Node::from(create_element("li", None, nodes![label])))
            }),
    );

    for count in [10, 100, 1000] {
        let items: Vec<Node> = (0..count)
            .map(|i| {
                Node::from(create_element(
                    &row,
                    Some(props! { "label" => format!("Row {}", i) }),
                    Vec::new(),
                ))
            })
            .collect();
        let tree = create_element("ul", None, items);

        group.bench_with_input(BenchmarkId::from_parameter(count), &tree, |b, tree| {
            let mut renderer = setup();
            b.iter(|| black_box(renderer.render(tree.clone(), "app").ok()));
        });
    }

    group.finish();
}

fn bench_delegated_handlers(c: &mut Criterion) {
    let mut group = c.benchmark_group("mount/delegated_handlers");

    for count in [10, 100] {
        let items: Vec<Node> = (0..count)
            .map(|i| {
                Node::from(create_element(
                    "button",
                    Some(props! { "onClick" => EventHandler::new(|_| {}) }),
                    nodes![format!("Button {}", i)],
                ))
            })
            .collect();
        let tree = create_element("div", None, items);

        // Delegations accumulate per render, so each iteration gets a fresh renderer.
        group.bench_with_input(BenchmarkId::from_parameter(count), &tree, |b, tree| {
            b.iter(|| {
                let mut renderer = setup();
                black_box(renderer.render(tree.clone(), "app").ok())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_flat_list,
    bench_nested,
    bench_composites,
    bench_delegated_handlers
);
criterion_main!(benches);
