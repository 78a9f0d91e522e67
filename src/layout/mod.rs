//! Ordering engine — canvas graph to linear flow.

pub mod graph;
pub mod order;
pub mod types;

pub use graph::CanvasGraph;
pub use order::{OrderBuilder, order};
pub use types::{BidirectionalPair, OrderedSequence, OrderedUnit};
