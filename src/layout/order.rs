//! Order builder: linearises a CanvasGraph into a top-to-bottom flow.
//!
//! Depth-first walk from the starting node. Plain nodes are placed in
//! reverse postorder (prepended once their descendants are done); a
//! bidirectional pair is one traversal step and is appended once the
//! forward exploration of both members completes. Nodes the walk never
//! reaches are appended afterwards in input order.
//!
//! The walk uses an explicit stack; the output matches the recursive
//! formulation exactly.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use petgraph::visit::{VisitMap, Visitable};
use tracing::debug;

use crate::syntax::types::Canvas;

use super::graph::CanvasGraph;
use super::types::{OrderedSequence, OrderedUnit};

enum Step {
    Enter(NodeIndex),
    Prepend(NodeIndex),
    Append(NodeIndex, NodeIndex),
}

/// Builds the ordered sequence for one graph.
pub struct OrderBuilder<'g> {
    graph: &'g CanvasGraph,
}

impl<'g> OrderBuilder<'g> {
    pub fn new(graph: &'g CanvasGraph) -> Self {
        Self { graph }
    }

    pub fn build(&self) -> OrderedSequence {
        let g = self.graph;
        let mut visited = g.digraph.visit_map();
        let mut flow: VecDeque<OrderedUnit> = VecDeque::with_capacity(g.node_count());

        match g.starting_node() {
            Some(start) => {
                debug!(start = %g.node(start).id, "starting node");
                let mut stack = vec![Step::Enter(start)];
                while let Some(step) = stack.pop() {
                    match step {
                        Step::Enter(idx) => {
                            if !visited.visit(idx) {
                                continue;
                            }
                            match g.pair_members(idx) {
                                Some((first, second)) => {
                                    visited.visit(first);
                                    visited.visit(second);
                                    stack.push(Step::Append(first, second));
                                    let mut next = g.successors(first);
                                    next.extend(g.successors(second));
                                    stack.extend(next.into_iter().rev().map(Step::Enter));
                                }
                                None => {
                                    stack.push(Step::Prepend(idx));
                                    stack.extend(
                                        g.successors(idx).into_iter().rev().map(Step::Enter),
                                    );
                                }
                            }
                        }
                        Step::Prepend(idx) => {
                            flow.push_front(OrderedUnit::Single(g.node(idx).clone()));
                        }
                        Step::Append(first, second) => {
                            flow.push_back(OrderedUnit::Combined(
                                g.node(first).clone(),
                                g.node(second).clone(),
                            ));
                        }
                    }
                }
            }
            None => debug!("no starting node; falling back to input order"),
        }

        let before = flow.len();
        for idx in g.digraph.node_indices() {
            if !visited.is_visited(&idx) {
                flow.push_back(OrderedUnit::Single(g.node(idx).clone()));
            }
        }
        debug!(
            ordered = before,
            leftover = flow.len() - before,
            combined = flow.iter().filter(|unit| unit.is_combined()).count(),
            "ordered canvas"
        );

        flow.into()
    }
}

/// Order a canvas document into a linear flow of units.
pub fn order(canvas: &Canvas) -> OrderedSequence {
    let graph = CanvasGraph::from_canvas(canvas);
    OrderBuilder::new(&graph).build()
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_order.rs"]
mod tests;
