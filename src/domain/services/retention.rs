//! Retention policy
//!
//! Decides which deployments a clean sweep removes. The newest `keep`
//! deployments always survive, and so does the active one wherever it sits.

use crate::domain::value_objects::Deployment;

/// Number of newest deployments kept by default
pub const KEEP_COUNT: usize = 3;

/// What the sweep does with a deployment outside the retention window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Remove,
    PreserveActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    keep: usize,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self { keep: KEEP_COUNT }
    }
}

impl RetentionPolicy {
    pub fn new(keep: usize) -> Self {
        Self { keep }
    }

    pub fn keep(&self) -> usize {
        self.keep
    }

    /// Deployments past the retention window, in list order, each with a verdict.
    ///
    /// `ordered` must be newest-first. Returns nothing when the list fits
    /// inside the window.
    pub fn sweep<'a>(
        &self,
        ordered: &'a [Deployment],
        active: Option<&Deployment>,
    ) -> Vec<(&'a Deployment, Verdict)> {
        if ordered.len() <= self.keep {
            return Vec::new();
        }

        ordered[self.keep..]
            .iter()
            .map(|dep| {
                let verdict = if Some(dep) == active {
                    Verdict::PreserveActive
                } else {
                    Verdict::Remove
                };
                (dep, verdict)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployments(count: i64) -> Vec<Deployment> {
        // Newest first: timestamps count, count-1, ..., 1
        (1..=count)
            .rev()
            .map(|t| Deployment::from_unix(t, format!("{:040}", t)))
            .collect()
    }

    #[test]
    fn no_sweep_within_window() {
        let deps = deployments(3);
        assert!(RetentionPolicy::default().sweep(&deps, None).is_empty());
    }

    #[test]
    fn sweeps_everything_past_window() {
        let deps = deployments(5);
        let sweep = RetentionPolicy::default().sweep(&deps, Some(&deps[0]));

        let removed: Vec<i64> = sweep
            .iter()
            .filter(|(_, v)| *v == Verdict::Remove)
            .map(|(d, _)| d.created_at())
            .collect();
        assert_eq!(removed, vec![2, 1]);
    }

    #[test]
    fn active_outside_window_is_preserved() {
        let deps = deployments(5);
        // Active is the oldest deployment
        let active = deps[4].clone();
        let sweep = RetentionPolicy::default().sweep(&deps, Some(&active));

        assert_eq!(sweep.len(), 2);
        assert_eq!(sweep[0], (&deps[3], Verdict::Remove));
        assert_eq!(sweep[1], (&deps[4], Verdict::PreserveActive));
    }

    #[test]
    fn zero_keep_sweeps_all_but_active() {
        let deps = deployments(2);
        let sweep = RetentionPolicy::new(0).sweep(&deps, Some(&deps[1]));
        assert_eq!(sweep[0].1, Verdict::Remove);
        assert_eq!(sweep[1].1, Verdict::PreserveActive);
    }
}
