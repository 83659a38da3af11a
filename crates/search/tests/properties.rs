//! Property tests for the query filter.

use profile_core::UserProfile;
use proptest::prelude::*;
use search::{QueryFilter, filter_candidates};

fn user_strategy() -> impl Strategy<Value = UserProfile> {
    (
        "\\PC{0,12}",
        proptest::option::of("\\PC{0,12}"),
        proptest::option::of("\\PC{0,12}"),
        proptest::option::of("\\PC{0,12}"),
    )
        .prop_map(|(name, title, company, location)| UserProfile {
            title,
            current_company: company,
            location,
            ..UserProfile::new("u", name)
        })
}

fn users_strategy() -> impl Strategy<Value = Vec<UserProfile>> {
    proptest::collection::vec(user_strategy(), 0..8)
}

proptest! {
    #[test]
    fn test_empty_query_is_identity(users in users_strategy()) {
        prop_assert_eq!(filter_candidates(&users, ""), users);
    }

    #[test]
    fn test_upper_case_query_matches_same_users(
        users in users_strategy(),
        query in "\\PC{0,4}",
    ) {
        prop_assert_eq!(
            filter_candidates(&users, &query),
            filter_candidates(&users, &query.to_uppercase())
        );
    }

    #[test]
    fn test_results_are_an_ordered_subsequence(
        users in users_strategy(),
        query in "[a-zA-Z]{0,3}",
    ) {
        let filter = QueryFilter::new(&query);
        let expected: Vec<UserProfile> = users
            .iter()
            .filter(|u| filter.matches(*u))
            .cloned()
            .collect();
        prop_assert_eq!(filter_candidates(&users, &query), expected);
    }

    #[test]
    fn test_every_name_finds_its_user(
        users in users_strategy(),
        index in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!users.is_empty());
        let user = &users[index.index(users.len())];
        prop_assert!(filter_candidates(&users, &user.name).contains(user));
    }
}
