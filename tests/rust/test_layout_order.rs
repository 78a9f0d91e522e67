use std::collections::HashSet;

use super::*;
use crate::syntax::types::{Edge, Node};

fn canvas(nodes: Vec<Node>, edges: &[(&str, &str)]) -> Canvas {
    Canvas::with(
        nodes,
        edges.iter().map(|&(from, to)| Edge::new(from, to)).collect(),
    )
}

fn text(id: &str) -> Node {
    Node::text(id, format!("caption {id}"))
}

fn file(id: &str) -> Node {
    Node::file(id, format!("{id}.png"))
}

/// Flatten a sequence to labels: "a" for a single node, "a+b" for a pair.
fn labels(seq: &OrderedSequence) -> Vec<String> {
    seq.iter().map(|unit| unit.ids().join("+")).collect()
}

/// Recursive formulation of the walk, used to check the explicit-stack one.
fn recursive_labels(g: &CanvasGraph) -> Vec<String> {
    fn visit(g: &CanvasGraph, idx: NodeIndex, seen: &mut HashSet<NodeIndex>, out: &mut VecDeque<String>) {
        if !seen.insert(idx) {
            return;
        }
        match g.pair_members(idx) {
            Some((a, b)) => {
                seen.insert(a);
                seen.insert(b);
                for n in g.successors(a).into_iter().chain(g.successors(b)) {
                    visit(g, n, seen, out);
                }
                out.push_back(format!("{}+{}", g.node(a).id, g.node(b).id));
            }
            None => {
                for n in g.successors(idx) {
                    visit(g, n, seen, out);
                }
                out.push_front(g.node(idx).id.clone());
            }
        }
    }

    let mut seen = HashSet::new();
    let mut out = VecDeque::new();
    if let Some(start) = g.starting_node() {
        visit(g, start, &mut seen, &mut out);
    }
    for idx in g.digraph.node_indices() {
        if !seen.contains(&idx) {
            out.push_back(g.node(idx).id.clone());
        }
    }
    out.into()
}

fn sample_canvases() -> Vec<Canvas> {
    vec![
        canvas(vec![], &[]),
        canvas(vec![file("a"), text("b"), file("c")], &[("a", "b"), ("b", "c")]),
        canvas(
            vec![text("s"), file("a"), text("b"), file("c"), text("d")],
            &[("s", "a"), ("a", "b"), ("b", "a"), ("b", "c"), ("c", "d"), ("d", "c")],
        ),
        canvas(
            vec![text("a"), text("b"), text("c"), text("d")],
            &[("a", "b"), ("a", "c"), ("c", "d"), ("b", "d")],
        ),
        canvas(
            vec![text("x"), text("y"), file("p"), text("q")],
            &[("x", "y"), ("p", "q"), ("q", "p")],
        ),
        canvas(
            vec![text("a"), text("b"), text("c")],
            &[("a", "b"), ("b", "c"), ("c", "a")],
        ),
        canvas(
            vec![text("s"), file("p"), text("q"), text("t"), file("u")],
            &[("s", "p"), ("p", "q"), ("q", "p"), ("q", "t"), ("t", "u"), ("s", "u")],
        ),
        canvas(
            vec![text("s"), file("a"), text("b"), file("c")],
            &[("s", "a"), ("a", "b"), ("b", "a"), ("b", "c"), ("c", "b")],
        ),
    ]
}

// ── Spec scenarios ────────────────────────────────────────────────────────

#[test]
fn test_simple_chain_keeps_source_order() {
    let c = canvas(vec![file("a"), text("b"), file("c")], &[("a", "b"), ("b", "c")]);
    assert_eq!(labels(&order(&c)), vec!["a", "b", "c"]);
}

#[test]
fn test_chain_with_shuffled_input() {
    let c = canvas(vec![text("c"), file("b"), text("a")], &[("a", "b"), ("b", "c")]);
    assert_eq!(labels(&order(&c)), vec!["a", "b", "c"]);
}

#[test]
fn test_pair_after_entry_node_is_combined() {
    let c = canvas(
        vec![text("title"), file("a"), text("b")],
        &[("title", "a"), ("a", "b"), ("b", "a")],
    );
    let seq = order(&c);
    assert_eq!(labels(&seq), vec!["title", "a+b"]);
    assert_eq!(seq[1], OrderedUnit::Combined(file("a"), text("b")));
}

#[test]
fn test_lone_pair_has_no_starting_node() {
    let c = canvas(vec![file("a"), text("b")], &[("a", "b"), ("b", "a")]);
    let seq = order(&c);
    assert_eq!(labels(&seq), vec!["a", "b"]);
    assert!(seq.iter().all(|u| !u.is_combined()));
}

#[test]
fn test_pair_entered_through_second_member_is_canonical() {
    let c = canvas(
        vec![text("s"), text("q"), file("p")],
        &[("s", "q"), ("q", "p"), ("p", "q")],
    );
    assert_eq!(labels(&order(&c)), vec!["s", "p+q"]);
}

#[test]
fn test_two_sequential_pairs_append_inner_first() {
    let c = canvas(
        vec![text("s"), file("a"), text("b"), file("c"), text("d")],
        &[("s", "a"), ("a", "b"), ("b", "a"), ("b", "c"), ("c", "d"), ("d", "c")],
    );
    assert_eq!(labels(&order(&c)), vec!["s", "c+d", "a+b"]);
}

#[test]
fn test_plain_descendant_of_pair_precedes_it() {
    let c = canvas(
        vec![text("s"), file("p"), text("q"), text("t")],
        &[("s", "p"), ("p", "q"), ("q", "p"), ("q", "t")],
    );
    assert_eq!(labels(&order(&c)), vec!["s", "t", "p+q"]);
}

#[test]
fn test_branching_is_reverse_postorder() {
    let c = canvas(
        vec![text("a"), text("b"), text("c")],
        &[("a", "b"), ("a", "c")],
    );
    assert_eq!(labels(&order(&c)), vec!["a", "c", "b"]);
}

#[test]
fn test_diamond() {
    let c = canvas(
        vec![text("a"), text("b"), text("c"), text("d")],
        &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
    );
    assert_eq!(labels(&order(&c)), vec!["a", "c", "b", "d"]);
}

// ── Degenerate graphs ─────────────────────────────────────────────────────

#[test]
fn test_empty_canvas() {
    assert!(order(&Canvas::new()).is_empty());
}

#[test]
fn test_no_edges_keeps_input_order() {
    let c = canvas(vec![text("b"), file("a"), text("c")], &[]);
    assert_eq!(labels(&order(&c)), vec!["b", "a", "c"]);
}

#[test]
fn test_cycle_without_entry_falls_back_to_input_order() {
    let c = canvas(
        vec![text("b"), text("a"), text("c")],
        &[("a", "b"), ("b", "c"), ("c", "a")],
    );
    assert_eq!(labels(&order(&c)), vec!["b", "a", "c"]);
}

#[test]
fn test_cycle_with_entry() {
    let c = canvas(
        vec![text("s"), text("a"), text("b"), text("c")],
        &[("s", "a"), ("a", "b"), ("b", "c"), ("c", "a")],
    );
    assert_eq!(labels(&order(&c)), vec!["s", "a", "b", "c"]);
}

#[test]
fn test_second_component_appended_in_input_order() {
    let c = canvas(
        vec![text("a"), text("d"), text("b"), text("c")],
        &[("a", "b"), ("c", "d")],
    );
    assert_eq!(labels(&order(&c)), vec!["a", "b", "d", "c"]);
}

#[test]
fn test_unreached_pair_is_not_combined() {
    let c = canvas(
        vec![text("x"), text("y"), file("p"), text("q")],
        &[("x", "y"), ("p", "q"), ("q", "p")],
    );
    let seq = order(&c);
    assert_eq!(labels(&seq), vec!["x", "y", "p", "q"]);
    assert!(seq.iter().all(|u| !u.is_combined()));
}

#[test]
fn test_dangling_edges_are_ignored() {
    let c = canvas(
        vec![text("a"), text("b")],
        &[("a", "ghost"), ("ghost", "a"), ("a", "b")],
    );
    assert_eq!(labels(&order(&c)), vec!["a", "b"]);
}

#[test]
fn test_self_loop_only() {
    let c = canvas(vec![text("a")], &[("a", "a")]);
    assert_eq!(labels(&order(&c)), vec!["a"]);
}

#[test]
fn test_overlapping_pairs_keep_first() {
    let c = canvas(
        vec![text("s"), file("a"), text("b"), file("c")],
        &[("s", "a"), ("a", "b"), ("b", "a"), ("b", "c"), ("c", "b")],
    );
    assert_eq!(labels(&order(&c)), vec!["s", "c", "a+b"]);
}

// ── Properties ────────────────────────────────────────────────────────────

#[test]
fn test_every_node_appears_exactly_once() {
    for c in sample_canvases() {
        let seq = order(&c);
        let mut ids: Vec<&str> = seq.iter().flat_map(|u| u.ids()).collect();
        ids.sort();
        let mut expected: Vec<&str> = c.nodes.iter().map(|n| n.id.as_str()).collect();
        expected.sort();
        assert_eq!(ids, expected);
    }
}

#[test]
fn test_order_is_deterministic() {
    for c in sample_canvases() {
        assert_eq!(order(&c), order(&c));
    }
}

#[test]
fn test_stack_walk_matches_recursive_walk() {
    for c in sample_canvases() {
        let g = CanvasGraph::from_canvas(&c);
        assert_eq!(labels(&OrderBuilder::new(&g).build()), recursive_labels(&g));
    }
}

#[test]
fn test_long_chain_does_not_overflow() {
    let n = 50_000;
    let nodes: Vec<Node> = (0..n).map(|i| text(&format!("n{i}"))).collect();
    let edges: Vec<Edge> = (1..n)
        .map(|i| Edge::new(format!("n{}", i - 1), format!("n{i}")))
        .collect();
    let seq = order(&Canvas::with(nodes, edges));
    assert_eq!(seq.len(), n);
    assert_eq!(seq[0].ids(), vec!["n0"]);
    assert_eq!(seq[n - 1].ids(), vec![format!("n{}", n - 1).as_str()]);
}
