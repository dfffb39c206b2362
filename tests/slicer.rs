use callslice::core::{GraphBuilder, GraphSnapshot, NodeId};
use callslice::facts::{CallSite, FileFacts, FunctionDefinition};
use callslice::GraphConfig;

const FILE: &str = "/svc/chain.js";

fn def(name: &str, start: usize, end: usize) -> FunctionDefinition {
    FunctionDefinition::new(name, FILE, start, end, format!("function {name}() {{ /* ... */ }}"))
}

/// a -> b -> c -> d, plus the cycle x <-> y and self-recursive r.
fn snapshot() -> GraphSnapshot {
    let facts = FileFacts::new(FILE)
        .with_definition(def("a", 1, 3))
        .with_definition(def("b", 5, 7))
        .with_definition(def("c", 9, 11))
        .with_definition(def("d", 13, 15))
        .with_definition(def("x", 20, 22))
        .with_definition(def("y", 24, 26))
        .with_definition(def("r", 30, 33))
        .with_call(CallSite::new("b", FILE, 2))
        .with_call(CallSite::new("c", FILE, 6))
        .with_call(CallSite::new("d", FILE, 10))
        .with_call(CallSite::new("y", FILE, 21))
        .with_call(CallSite::new("x", FILE, 25))
        .with_call(CallSite::new("r", FILE, 31));
    GraphBuilder::new(GraphConfig::default()).build(vec![facts])
}

fn names(defs: &[FunctionDefinition]) -> Vec<&str> {
    defs.iter().map(|d| d.name.as_str()).collect()
}

fn id(name: &str) -> NodeId {
    NodeId::new(FILE, name)
}

#[test]
fn unknown_node_yields_empty_slice() {
    let snapshot = snapshot();
    for depth in [0, 1, 5, 100] {
        assert!(snapshot.slice(&NodeId::from("/nowhere.js:ghost"), depth).is_empty());
    }
}

#[test]
fn depth_zero_is_the_node_itself() {
    let snapshot = snapshot();
    for name in ["a", "b", "c", "d", "x", "y", "r"] {
        let slice = snapshot.slice(&id(name), 0);
        assert_eq!(slice.len(), 1);
        assert_eq!(&slice[0], snapshot.definition(&id(name)).unwrap());
    }
}

#[test]
fn depth_bounds_the_number_of_hops() {
    let snapshot = snapshot();
    assert_eq!(names(&snapshot.slice(&id("a"), 1)), vec!["a", "b"]);
    assert_eq!(names(&snapshot.slice(&id("a"), 2)), vec!["a", "b", "c"]);
    assert_eq!(names(&snapshot.slice(&id("a"), 3)), vec!["a", "b", "c", "d"]);
    assert_eq!(names(&snapshot.slice(&id("a"), 50)), vec!["a", "b", "c", "d"]);
    assert_eq!(names(&snapshot.slice(&id("c"), 5)), vec!["c", "d"]);
}

#[test]
fn mutual_recursion_terminates() {
    let snapshot = snapshot();
    for depth in [1, 2, 10, usize::MAX] {
        assert_eq!(names(&snapshot.slice(&id("x"), depth)), vec!["x", "y"]);
        assert_eq!(names(&snapshot.slice(&id("y"), depth)), vec!["y", "x"]);
    }
}

#[test]
fn self_recursion_visits_once() {
    let snapshot = snapshot();
    assert_eq!(names(&snapshot.slice(&id("r"), 4)), vec!["r"]);
}

#[test]
fn breadth_first_orders_siblings_by_identifier() {
    let facts = FileFacts::new(FILE)
        .with_definition(def("root", 1, 5))
        .with_definition(def("zeta", 10, 12))
        .with_definition(def("alpha", 14, 16))
        .with_definition(def("leaf", 18, 19))
        .with_call(CallSite::new("zeta", FILE, 2))
        .with_call(CallSite::new("alpha", FILE, 3))
        .with_call(CallSite::new("leaf", FILE, 11));
    let snapshot = GraphBuilder::new(GraphConfig::default()).build(vec![facts]);

    assert_eq!(
        names(&snapshot.slice(&id("root"), 2)),
        vec!["root", "alpha", "zeta", "leaf"]
    );
}
