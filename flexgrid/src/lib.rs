pub mod concepts;
pub mod engine;
pub mod feedback;
pub mod fill;
pub mod framework;
pub mod search;
pub mod util;
pub mod workload;
