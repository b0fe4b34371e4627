//! GitHub REST API records and search state.

use serde::{Deserialize, Serialize};

/// Subset of `GET /users/{username}` used by the viewer.
///
/// Optional profile fields come back as `null` or are absent; they
/// deserialize to `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub html_url: String,
}

impl GithubUser {
    /// Profile name, falling back to the login.
    pub fn display_name(&self) -> &str {
        non_empty(&self.name).unwrap_or(&self.login)
    }

    pub fn bio(&self) -> Option<&str> {
        non_empty(&self.bio)
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    pub fn blog(&self) -> Option<&str> {
        non_empty(&self.blog)
    }
}

/// Subset of an entry from `GET /users/{username}/repos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubRepo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    /// ISO-8601 timestamp; lexicographic order is chronological.
    #[serde(default)]
    pub updated_at: String,
}

impl GithubRepo {
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn language(&self) -> Option<&str> {
        non_empty(&self.language)
    }
}

/// Result of a successful search: the user and their recent repositories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GithubProfile {
    pub user: GithubUser,
    /// Most recently updated first, at most `config::github::REPO_LIMIT`.
    pub repos: Vec<GithubRepo>,
}

/// Lifecycle of the viewer's current search.
///
/// Profile data only exists in [`SearchState::Loaded`], so a failed search
/// can never leave stale panels on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Loaded(GithubProfile),
    Failed(String),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn profile(&self) -> Option<&GithubProfile> {
        match self {
            Self::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_with_nulls() {
        let json = r#"{
            "login": "octocat",
            "name": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "bio": null,
            "followers": 9000,
            "following": 9,
            "public_repos": 8,
            "location": "San Francisco",
            "blog": "",
            "html_url": "https://github.com/octocat",
            "site_admin": false
        }"#;
        let user: GithubUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "octocat");
        assert_eq!(user.bio(), None);
        assert_eq!(user.blog(), None);
        assert_eq!(user.location(), Some("San Francisco"));
        assert_eq!(user.followers, 9000);
    }

    #[test]
    fn test_display_name_prefers_name() {
        let user: GithubUser =
            serde_json::from_str(r#"{"login": "octocat", "name": "The Octocat"}"#).unwrap();
        assert_eq!(user.display_name(), "The Octocat");
    }

    #[test]
    fn test_repo_minimal_fields() {
        let repo: GithubRepo =
            serde_json::from_str(r#"{"id": 1, "name": "hello", "language": null}"#).unwrap();
        assert_eq!(repo.language(), None);
        assert_eq!(repo.description(), None);
        assert_eq!(repo.stargazers_count, 0);
    }

    #[test]
    fn test_search_state_accessors() {
        assert!(SearchState::Loading.is_loading());
        assert_eq!(SearchState::Idle.profile(), None);
        assert_eq!(
            SearchState::Failed("User not found".to_string()).error(),
            Some("User not found")
        );
        assert_eq!(SearchState::Loading.error(), None);
    }
}
