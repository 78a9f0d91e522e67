//! Canvas document syntax.

pub mod types;

pub use types::{Canvas, Edge, Node, NodeKind};
