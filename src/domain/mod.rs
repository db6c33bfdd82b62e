// Domain data structures for callsketch.

pub mod analysis;
pub mod callgraph;
pub mod source;
