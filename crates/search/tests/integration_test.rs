//! Integration tests for user search.
//!
//! These run a search session against the seed repository, the way the
//! CLI does.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use profile_core::{InMemoryRepository, RecordingNavigator, Route};
use search::{SearchConfig, UserSearch, filter_candidates};
use tokio::time::advance;

fn seed_repository() -> InMemoryRepository {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/seed");
    InMemoryRepository::load_from_dir(&dir).expect("seed data should load")
}

#[tokio::test(start_paused = true)]
async fn test_typing_a_company_name() {
    let repo = seed_repository();
    let navigator = Arc::new(RecordingNavigator::new());
    let config = SearchConfig::default().with_debounce(Duration::from_millis(250));
    let mut search = UserSearch::from_repository(&repo, &config, navigator.clone()).unwrap();

    let everyone = search.results().len();

    for prefix in ["n", "na", "nas", "nasa"] {
        search.set_query(prefix);
        advance(Duration::from_millis(40)).await;
    }
    assert!(search.is_settling());

    let results = search.next_evaluation().await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Katherine Johnson");
    assert_eq!(search.evaluations(), 1);
    assert!(everyone > 1);

    search.select("u-katherine").unwrap();
    assert_eq!(
        navigator.routes(),
        vec![Route::WriteRecommendation("u-katherine".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_matches_across_fields() {
    let repo = seed_repository();
    let navigator = Arc::new(RecordingNavigator::new());
    let mut search =
        UserSearch::from_repository(&repo, &SearchConfig::default(), navigator).unwrap();

    // "va" hits two locations and one surname (Torvalds)
    search.set_query("VA");
    let names: Vec<_> = search
        .next_evaluation()
        .await
        .unwrap()
        .iter()
        .map(|u| u.name.clone())
        .collect();
    assert_eq!(names, vec!["Grace Hopper", "Katherine Johnson", "Linus Torvalds"]);
}

#[test]
fn test_filter_is_stable_and_case_insensitive_on_seed() {
    use profile_core::ProfileRepository;

    let users = seed_repository().list_users().unwrap();
    let lower = filter_candidates(&users, "engineer");
    let upper = filter_candidates(&users, "ENGINEER");
    assert_eq!(lower, upper);

    let ids: Vec<_> = lower.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u-ada", "u-linus"]);
}
