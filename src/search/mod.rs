pub mod bellman_ford;
pub mod distance;
pub mod error;
pub mod trace;
