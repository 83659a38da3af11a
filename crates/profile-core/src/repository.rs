//! Repository seam between the pages and wherever profiles live.
//!
//! Pages receive an `Arc<dyn ProfileRepository>` instead of reaching for a
//! process-wide store. `InMemoryRepository` backs the CLI and the tests; a
//! real backend would implement the same trait.

use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::types::{Recommendation, RecommendationId, RecommendationStatus, UserId, UserProfile};

/// Read/write access to users and their recommendations.
///
/// ## Design Note
/// - `Send + Sync` so one repository can be shared behind `Arc` by every page
/// - Methods return owned values; callers edit copies and hand them back
///   through `update_user`
pub trait ProfileRepository: Send + Sync {
    /// Fetch one user by id
    fn get_user(&self, id: &str) -> Result<UserProfile>;

    /// All users, in insertion order
    fn list_users(&self) -> Result<Vec<UserProfile>>;

    /// Replace an existing user record
    fn update_user(&self, user: UserProfile) -> Result<()>;

    /// Fetch one recommendation by id
    fn get_recommendation(&self, id: &str) -> Result<Recommendation>;

    /// Recommendations received by a user with the given status
    fn user_recommendations(
        &self,
        user_id: &str,
        status: RecommendationStatus,
    ) -> Result<Vec<Recommendation>>;
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserProfile>,
    user_index: HashMap<UserId, usize>,
    recommendations: Vec<Recommendation>,
    recommendation_index: HashMap<RecommendationId, usize>,
}

/// Repository held entirely in memory.
///
/// Vectors keep insertion order (the search results depend on it) and the
/// id maps give O(1) lookups into them.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    tables: RwLock<Tables>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from already-parsed records.
    ///
    /// Fails on duplicate ids or on recommendations that point at unknown
    /// users.
    pub fn from_records(
        users: Vec<UserProfile>,
        recommendations: Vec<Recommendation>,
    ) -> Result<Self> {
        let repository = Self::new();
        for user in users {
            repository.insert_user(user)?;
        }
        for recommendation in recommendations {
            repository.insert_recommendation(recommendation)?;
        }
        repository.validate()?;
        Ok(repository)
    }

    /// Insert a new user. Ids must be unique.
    pub fn insert_user(&self, user: UserProfile) -> Result<()> {
        let mut tables = self.write()?;
        if tables.user_index.contains_key(&user.id) {
            return Err(StoreError::DuplicateId {
                entity: "User".to_string(),
                id: user.id,
            });
        }
        let position = tables.users.len();
        tables.user_index.insert(user.id.clone(), position);
        tables.users.push(user);
        Ok(())
    }

    /// Insert a new recommendation. Ids must be unique.
    pub fn insert_recommendation(&self, recommendation: Recommendation) -> Result<()> {
        let mut tables = self.write()?;
        if tables.recommendation_index.contains_key(&recommendation.id) {
            return Err(StoreError::DuplicateId {
                entity: "Recommendation".to_string(),
                id: recommendation.id,
            });
        }
        let position = tables.recommendations.len();
        tables
            .recommendation_index
            .insert(recommendation.id.clone(), position);
        tables.recommendations.push(recommendation);
        Ok(())
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> Result<(usize, usize)> {
        let tables = self.read()?;
        Ok((tables.users.len(), tables.recommendations.len()))
    }

    /// Check referential integrity and value ranges.
    ///
    /// - no user holds the same (name, category) skill twice
    /// - every recommendation's recipient exists
    /// - ratings are within 1..=5
    pub fn validate(&self) -> Result<()> {
        let tables = self.read()?;
        for user in &tables.users {
            let mut seen = HashSet::new();
            for skill in &user.skills {
                if !seen.insert((skill.name.as_str(), skill.category)) {
                    return Err(StoreError::DuplicateSkill {
                        user_id: user.id.clone(),
                        name: skill.name.clone(),
                        category: skill.category.to_string(),
                    });
                }
            }
        }
        for recommendation in &tables.recommendations {
            if !tables.user_index.contains_key(&recommendation.recipient_id) {
                return Err(StoreError::MissingReference {
                    entity: "User".to_string(),
                    id: recommendation.recipient_id.clone(),
                });
            }
            if !(1..=5).contains(&recommendation.rating) {
                return Err(StoreError::InvalidValue {
                    field: "rating".to_string(),
                    value: recommendation.rating.to_string(),
                });
            }
        }
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ProfileRepository for InMemoryRepository {
    fn get_user(&self, id: &str) -> Result<UserProfile> {
        let tables = self.read()?;
        tables
            .user_index
            .get(id)
            .map(|&i| tables.users[i].clone())
            .ok_or_else(|| StoreError::UserNotFound { id: id.to_string() })
    }

    fn list_users(&self) -> Result<Vec<UserProfile>> {
        Ok(self.read()?.users.clone())
    }

    fn update_user(&self, user: UserProfile) -> Result<()> {
        let mut tables = self.write()?;
        let position = *tables
            .user_index
            .get(&user.id)
            .ok_or_else(|| StoreError::UserNotFound {
                id: user.id.clone(),
            })?;
        debug!(user_id = %user.id, "updating user");
        tables.users[position] = user;
        Ok(())
    }

    fn get_recommendation(&self, id: &str) -> Result<Recommendation> {
        let tables = self.read()?;
        tables
            .recommendation_index
            .get(id)
            .map(|&i| tables.recommendations[i].clone())
            .ok_or_else(|| StoreError::RecommendationNotFound { id: id.to_string() })
    }

    fn user_recommendations(
        &self,
        user_id: &str,
        status: RecommendationStatus,
    ) -> Result<Vec<Recommendation>> {
        let tables = self.read()?;
        Ok(tables
            .recommendations
            .iter()
            .filter(|r| r.recipient_id == user_id && r.status == status)
            .cloned()
            .collect())
    }
}
