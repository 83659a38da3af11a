//! Seed data loading.
//!
//! A seed directory holds two JSON files:
//! - users.json: array of user profiles
//! - recommendations.json: array of recommendations
//!
//! Both are parsed in parallel and then validated together.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{Result, StoreError};
use crate::repository::InMemoryRepository;
use crate::types::{Recommendation, UserProfile};

pub const USERS_FILE: &str = "users.json";
pub const RECOMMENDATIONS_FILE: &str = "recommendations.json";

/// Read a whole file and deserialize it as JSON.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(StoreError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    from_json_str(&path.display().to_string(), &content)
}

/// Deserialize JSON text, tagging parse errors with `file` for context.
pub fn from_json_str<T: DeserializeOwned>(file: &str, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|source| StoreError::ParseError {
        file: file.to_string(),
        source,
    })
}

/// Parse the users.json file
pub fn parse_users(path: &Path) -> Result<Vec<UserProfile>> {
    read_json(path)
}

/// Parse the recommendations.json file
pub fn parse_recommendations(path: &Path) -> Result<Vec<Recommendation>> {
    read_json(path)
}

impl InMemoryRepository {
    /// Load a repository from a seed directory.
    ///
    /// Steps:
    /// 1. Parse users.json and recommendations.json in parallel
    /// 2. Insert every record (rejecting duplicate ids)
    /// 3. Validate references and rating ranges
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading seed data from {:?}", data_dir);

        let users_path = data_dir.join(USERS_FILE);
        let recommendations_path = data_dir.join(RECOMMENDATIONS_FILE);

        let (users, recommendations) = rayon::join(
            || parse_users(&users_path),
            || parse_recommendations(&recommendations_path),
        );
        let users = users?;
        let recommendations = recommendations?;

        info!(
            "Parsed {} users, {} recommendations",
            users.len(),
            recommendations.len()
        );

        InMemoryRepository::from_records(users, recommendations)
    }
}
