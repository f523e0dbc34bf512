pub mod digraph;
pub mod traversal;
