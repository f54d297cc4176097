pub mod backtrack;
pub mod binary_tree;
pub mod prim;
