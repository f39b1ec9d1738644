//! Ordering and lookup over a set of deployments

use crate::domain::value_objects::Deployment;

/// Sort newest to oldest by creation time.
///
/// The sort is stable, so deployments sharing a timestamp keep whatever
/// relative order the caller supplied (for a directory scan, that order is
/// not defined).
pub fn sort_newest_first(deployments: &mut [Deployment]) {
    deployments.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

/// First deployment built from `commit_hash`, in list order.
///
/// On a newest-first list this is the newest deployment for that commit.
pub fn find_by_commit_hash<'a>(
    deployments: &'a [Deployment],
    commit_hash: &str,
) -> Option<&'a Deployment> {
    deployments
        .iter()
        .find(|dep| dep.commit_hash() == commit_hash)
}

/// Index of `target` within `deployments`
pub fn position_of(deployments: &[Deployment], target: &Deployment) -> Option<usize> {
    deployments.iter().position(|dep| dep == target)
}
