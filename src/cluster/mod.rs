// src/cluster/mod.rs

//! Cluster lifecycle: startup sequencing, readiness probing, teardown and
//! DFS data movement.

pub mod dfs;
pub mod readiness;
pub mod start;
pub mod stop;

pub use start::{start_cluster, StartOptions};
pub use stop::stop_all;
