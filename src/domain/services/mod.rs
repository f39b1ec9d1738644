//! Domain Services
//!
//! Stateless rules over deployments: ordering, retention, and build sequencing.

pub mod build_plan;
pub mod ordering;
pub mod retention;

pub use build_plan::BuildPlan;
pub use ordering::{find_by_commit_hash, position_of, sort_newest_first};
pub use retention::{RetentionPolicy, Verdict, KEEP_COUNT};
