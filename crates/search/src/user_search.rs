//! Search-as-you-type over the user directory.
//!
//! `UserSearch` keeps two copies of the query: the raw text, updated on
//! every keystroke, and the debounced text that the results were computed
//! from. Keystrokes go through a [`Debouncer`]; results only change when a
//! debounced value arrives.

use std::sync::Arc;
use std::time::Duration;

use profile_core::{Navigator, ProfileRepository, Route, UserProfile};
use tracing::{debug, instrument};

use crate::config::SearchConfig;
use crate::debounce::{DebouncedReceiver, Debouncer};
use crate::error::{Result, SearchError};
use crate::query_filter::QueryFilter;

pub struct UserSearch {
    candidates: Vec<UserProfile>,
    query: String,
    debounced_query: String,
    results: Vec<UserProfile>,
    evaluations: usize,
    debouncer: Debouncer<String>,
    updates: DebouncedReceiver<String>,
    navigator: Arc<dyn Navigator>,
}

impl UserSearch {
    /// Start a search session over `candidates`.
    ///
    /// Until the first query settles, every candidate is shown.
    pub fn new(
        candidates: Vec<UserProfile>,
        config: &SearchConfig,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let (debouncer, updates) = Debouncer::new(config.debounce)?;
        Ok(Self {
            results: candidates.clone(),
            candidates,
            query: String::new(),
            debounced_query: String::new(),
            evaluations: 0,
            debouncer,
            updates,
            navigator,
        })
    }

    /// Start a search session over every user in the repository.
    pub fn from_repository(
        repository: &dyn ProfileRepository,
        config: &SearchConfig,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let candidates = repository.list_users()?;
        debug!("Search session over {} users", candidates.len());
        Self::new(candidates, config, navigator)
    }

    /// The text as typed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The text the current results were computed from
    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn results(&self) -> &[UserProfile] {
        &self.results
    }

    /// Quiet period a query must survive before it is applied
    pub fn debounce_interval(&self) -> Duration {
        self.debouncer.interval()
    }

    /// How many times the filter has actually run
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Record a keystroke and schedule filtering.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.debouncer.push(self.query.clone());
    }

    /// Wait for the next debounced query and apply it.
    ///
    /// Returns `None` only if the debouncer is gone.
    pub async fn next_evaluation(&mut self) -> Option<&[UserProfile]> {
        let mut query = self.updates.recv().await?;
        while let Ok(newer) = self.updates.try_recv() {
            query = newer;
        }
        self.evaluate(query);
        Some(&self.results)
    }

    /// Apply a debounced query if one has already arrived.
    ///
    /// Returns whether the results were recomputed.
    pub fn poll_evaluation(&mut self) -> bool {
        let mut latest = None;
        while let Ok(query) = self.updates.try_recv() {
            latest = Some(query);
        }
        match latest {
            Some(query) => {
                self.evaluate(query);
                true
            }
            None => false,
        }
    }

    /// Whether a keystroke is still waiting out the debounce interval
    pub fn is_settling(&self) -> bool {
        self.debouncer.is_pending()
    }

    #[instrument(skip(self), fields(candidates = self.candidates.len()))]
    fn evaluate(&mut self, query: String) {
        self.results = QueryFilter::new(&query).apply_cloned(&self.candidates);
        self.debounced_query = query;
        self.evaluations += 1;
        debug!(results = self.results.len(), "search evaluated");
    }

    /// Message to show in place of an empty result list.
    pub fn empty_message(&self) -> Option<String> {
        self.results
            .is_empty()
            .then(|| format!("No users found matching \"{}\"", self.query))
    }

    /// Open the write-recommendation view for a displayed result.
    pub fn select(&self, user_id: &str) -> Result<()> {
        if !self.results.iter().any(|u| u.id == user_id) {
            return Err(SearchError::NotInResults {
                id: user_id.to_string(),
            });
        }
        self.navigator
            .navigate(Route::WriteRecommendation(user_id.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_core::RecordingNavigator;
    use tokio::time::advance;

    fn users() -> Vec<UserProfile> {
        vec![
            UserProfile::new("u1", "Ada Lovelace").with_title("Engineer"),
            UserProfile::new("u2", "Grace Hopper").with_company("Navy"),
        ]
    }

    fn session() -> (UserSearch, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::new());
        let search = UserSearch::new(users(), &SearchConfig::default(), navigator.clone()).unwrap();
        (search, navigator)
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_results_are_everyone() {
        let (search, _) = session();
        assert_eq!(search.debounce_interval(), SearchConfig::default().debounce);
        assert_eq!(search.results().len(), 2);
        assert_eq!(search.evaluations(), 0);
        assert!(search.empty_message().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_title_match_after_debounce() {
        let (mut search, _) = session();

        search.set_query("eng");
        // Raw text updates immediately, results do not
        assert_eq!(search.query(), "eng");
        assert_eq!(search.results().len(), 2);

        let results = search.next_evaluation().await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Ada Lovelace");
        assert_eq!(search.debounced_query(), "eng");
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystrokes_coalesce_into_one_evaluation() {
        let (mut search, _) = session();

        search.set_query("g");
        advance(Duration::from_millis(50)).await;
        search.set_query("gr");
        advance(Duration::from_millis(50)).await;
        search.set_query("gra");

        search.next_evaluation().await.unwrap();
        assert_eq!(search.evaluations(), 1);
        assert_eq!(search.debounced_query(), "gra");

        advance(Duration::from_secs(2)).await;
        assert!(!search.poll_evaluation());
        assert_eq!(search.evaluations(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_query_restores_everyone() {
        let (mut search, _) = session();

        search.set_query("navy");
        search.next_evaluation().await.unwrap();
        assert_eq!(search.results().len(), 1);

        search.set_query("");
        search.next_evaluation().await.unwrap();
        assert_eq!(search.results().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_message_uses_raw_query() {
        let (mut search, _) = session();

        search.set_query("zzz");
        search.next_evaluation().await.unwrap();
        assert_eq!(
            search.empty_message().as_deref(),
            Some("No users found matching \"zzz\"")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_navigates_to_write_recommendation() {
        let (mut search, navigator) = session();

        search.set_query("grace");
        search.next_evaluation().await.unwrap();

        search.select("u2").unwrap();
        assert!(matches!(
            search.select("u1"),
            Err(SearchError::NotInResults { .. })
        ));
        assert_eq!(
            navigator.routes(),
            vec![Route::WriteRecommendation("u2".to_string())]
        );
    }
}
