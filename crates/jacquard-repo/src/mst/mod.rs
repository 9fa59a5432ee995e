//! Merkle Search Tree implementation

pub mod node;
pub mod tree;
pub mod util;
pub mod diff;

pub use node::{NodeData, NodeEntry, TreeEntry};
pub use tree::{Mst, WriteOp};
pub use diff::MstDiff;
