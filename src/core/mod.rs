// src/core/mod.rs

pub mod decode;
pub mod html;
pub mod tree;

pub use tree::{DocumentTree, NodeId};
