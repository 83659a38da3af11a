//! Single recommendation view.

use std::sync::Arc;

use tracing::{error, instrument};

use profile_core::{
    Document, Notifier, PortfolioItem, ProfileRepository, Recommendation, Skill, StoreError,
};

use crate::state::PageState;

/// Number of stars in the rating row
pub const MAX_RATING: usize = 5;

const LOAD_FAILED: &str = "Failed to load recommendation";

/// Display data derived from a recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationView {
    pub recommendation: Recommendation,
    /// Avatar fallback, e.g. "CB" for Charles Babbage
    pub author_initials: String,
    /// "{relationship} at {company} for {duration}"
    pub relationship_line: String,
    /// Filled state of each star, left to right
    pub stars: [bool; MAX_RATING],
}

impl RecommendationView {
    pub fn new(recommendation: Recommendation) -> Self {
        let author_initials = initials(&recommendation.author.name);
        let relationship_line = format!(
            "{} at {} for {}",
            recommendation.relationship, recommendation.company, recommendation.duration
        );
        let stars = std::array::from_fn(|i| i < recommendation.rating as usize);
        Self {
            recommendation,
            author_initials,
            relationship_line,
            stars,
        }
    }

    pub fn skills(&self) -> &[Skill] {
        &self.recommendation.skills
    }

    pub fn documents(&self) -> &[Document] {
        &self.recommendation.documents
    }

    pub fn portfolio_items(&self) -> &[PortfolioItem] {
        &self.recommendation.portfolio_items
    }
}

/// First letter of each word of a name
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

pub struct RecommendationPage {
    repository: Arc<dyn ProfileRepository>,
    notifier: Arc<dyn Notifier>,
    state: PageState<RecommendationView>,
}

impl RecommendationPage {
    pub fn new(repository: Arc<dyn ProfileRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repository,
            notifier,
            state: PageState::Loading,
        }
    }

    pub fn state(&self) -> &PageState<RecommendationView> {
        &self.state
    }

    /// Load the recommendation identified by `id`.
    ///
    /// Any failure shows the same generic message and raises an error
    /// notice; the cause only goes to the log.
    #[instrument(skip(self))]
    pub fn load(&mut self, id: Option<&str>) -> &PageState<RecommendationView> {
        self.state = PageState::Loading;

        let fetched = id
            .filter(|id| !id.is_empty())
            .ok_or(StoreError::MissingId {
                entity: "Recommendation",
            })
            .and_then(|id| self.repository.get_recommendation(id));

        self.state = match fetched {
            Ok(recommendation) => PageState::Ready(RecommendationView::new(recommendation)),
            Err(err) => {
                error!("Error fetching recommendation: {err}");
                self.notifier.error(LOAD_FAILED);
                PageState::Failed(LOAD_FAILED.to_string())
            }
        };
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_core::{
        Author, InMemoryRepository, NoticeLevel, RecommendationStatus, RecordingNotifier,
        UserProfile,
    };

    fn sample() -> Recommendation {
        Recommendation {
            id: "r1".to_string(),
            recipient_id: "u1".to_string(),
            author: Author {
                name: "Charles  Babbage".to_string(),
                title: Some("Inventor".to_string()),
                avatar: None,
                linkedin: None,
            },
            relationship: "Collaborator".to_string(),
            company: "Analytical Engines".to_string(),
            duration: "10 years".to_string(),
            rating: 3,
            endorsement: "Visionary.".to_string(),
            skills: vec![Skill::soft("Creativity")],
            documents: vec![Document {
                name: "Notes".to_string(),
                url: "https://example.org/notes.pdf".to_string(),
            }],
            portfolio_items: vec![],
            status: RecommendationStatus::Approved,
        }
    }

    fn page() -> (RecommendationPage, Arc<RecordingNotifier>) {
        let repo =
            InMemoryRepository::from_records(vec![UserProfile::new("u1", "Ada")], vec![sample()])
                .unwrap();
        let notifier = Arc::new(RecordingNotifier::new());
        (RecommendationPage::new(Arc::new(repo), notifier.clone()), notifier)
    }

    #[test]
    fn test_view_fields() {
        let view = RecommendationView::new(sample());
        assert_eq!(view.author_initials, "CB");
        assert_eq!(
            view.relationship_line,
            "Collaborator at Analytical Engines for 10 years"
        );
        assert_eq!(view.stars, [true, true, true, false, false]);
        assert_eq!(view.skills().len(), 1);
        assert_eq!(view.documents()[0].name, "Notes");
        assert!(view.portfolio_items().is_empty());
    }

    #[test]
    fn test_load_existing() {
        let (mut page, notifier) = page();
        assert!(page.state().is_loading());
        let view = page.load(Some("r1")).ready().unwrap();
        assert_eq!(view.recommendation.id, "r1");
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_load_failures_share_one_message() {
        let (mut page, notifier) = page();

        assert_eq!(page.load(None).error(), Some(LOAD_FAILED));
        assert_eq!(page.load(Some("r404")).error(), Some(LOAD_FAILED));

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(|n| n.level == NoticeLevel::Error));
    }

    #[test]
    fn test_initials_ignore_extra_spaces() {
        assert_eq!(initials("  Grace   Brewster Hopper "), "GBH");
        assert_eq!(initials(""), "");
    }
}
