//! Property tests for store listing order.

use proptest::prelude::*;

use mfd::infrastructure::MemoryRoot;
use mfd::{Deployment, DeploymentStore};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn list_is_strictly_newest_first(
        stamps in proptest::collection::btree_set(0i64..1_000_000, 0..20)
    ) {
        let root = MemoryRoot::new();
        // Insert oldest first so the scan order is the reverse of the result
        for (i, t) in stamps.iter().enumerate() {
            let hash = format!("{:040x}", i);
            root.add_dir(&Deployment::format(*t, &hash)).unwrap();
        }

        let listed = DeploymentStore::new(&root).list().unwrap();

        prop_assert_eq!(listed.len(), stamps.len());
        for pair in listed.windows(2) {
            prop_assert!(pair[0].created_at() > pair[1].created_at());
        }
    }

    #[test]
    fn junk_entries_never_reach_the_listing(junk in proptest::collection::vec("[a-z_]{1,12}", 0..10)) {
        let root = MemoryRoot::new();
        root.add_dir(&Deployment::format(1, &"a".repeat(40))).unwrap();
        for name in &junk {
            let _ = root.add_dir(name);
        }

        let listed = DeploymentStore::new(&root).list().unwrap();

        prop_assert_eq!(listed.len(), 1);
    }
}
