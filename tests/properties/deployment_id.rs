//! Property tests for deployment identity formatting/parsing.

use proptest::prelude::*;

use mfd::Deployment;

fn hash_strategy() -> impl Strategy<Value = String> {
    // Any 40 characters without '_' round-trip; content is not checked.
    proptest::string::string_regex("[0-9a-zA-Z.-]{40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn format_then_parse_round_trips(t in any::<i64>(), hash in hash_strategy()) {
        let name = Deployment::format(t, &hash);
        let parsed = Deployment::parse(&name).unwrap();
        prop_assert_eq!(parsed.created_at(), t);
        prop_assert_eq!(parsed.commit_hash(), hash.as_str());
        prop_assert_eq!(parsed.name(), name);
    }

    #[test]
    fn parse_never_panics(name in "\\PC*") {
        let _ = Deployment::parse(&name);
    }

    #[test]
    fn wrong_hash_length_is_rejected(t in any::<i64>(), hash in "[0-9a-f]{0,80}") {
        prop_assume!(hash.len() != 40);
        prop_assert!(Deployment::parse(&Deployment::format(t, &hash)).is_err());
    }

    #[test]
    fn non_integer_timestamp_is_rejected(stamp in "[a-z]{1,10}", hash in "[0-9a-f]{40}") {
        let name = format!("mfd_{}_{}", stamp, hash);
        prop_assert!(Deployment::parse(&name).is_err());
    }

    #[test]
    fn other_prefixes_are_rejected(prefix in "[a-z]{1,8}", t in any::<i64>(), hash in "[0-9a-f]{40}") {
        prop_assume!(prefix != "mfd");
        let name = format!("{}_{}_{}", prefix, t, hash);
        prop_assert!(Deployment::parse(&name).is_err());
    }
}
