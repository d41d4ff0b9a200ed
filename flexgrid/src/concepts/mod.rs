pub mod demand;
pub mod graph;
pub mod path;
pub mod table;
