//! GitHub profile lookup.
//!
//! A search is two sequential requests: the user resource, then (only if that
//! succeeded) the user's most recently updated repositories. Either failure
//! aborts the whole search; callers receive a complete [`GithubProfile`] or an
//! error, never half of one.

use crate::config::github::{API_BASE, REPO_LIMIT};
use crate::core::error::{FetchError, GithubError};
use crate::models::{GithubProfile, GithubRepo, GithubUser};
use crate::utils::JsonFetcher;

/// Client for the unauthenticated GitHub REST API.
pub struct GithubClient<F> {
    fetcher: F,
    base_url: String,
}

impl<F: JsonFetcher> GithubClient<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_base_url(fetcher, API_BASE)
    }

    pub fn with_base_url(fetcher: F, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn user_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(username))
    }

    pub fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url,
            urlencoding::encode(username),
            REPO_LIMIT
        )
    }

    /// Look up a user and their recent repositories.
    ///
    /// `input` is trimmed; an empty username fails before any request.
    pub async fn fetch_profile(&self, input: &str) -> Result<GithubProfile, GithubError> {
        let username = input.trim();
        if username.is_empty() {
            return Err(GithubError::EmptyUsername);
        }

        let user = self.fetch_user(username).await?;
        let repos = self.fetch_repos(username).await?;

        Ok(GithubProfile { user, repos })
    }

    async fn fetch_user(&self, username: &str) -> Result<GithubUser, GithubError> {
        self.fetcher
            .get_json(&self.user_url(username))
            .await
            .map_err(|e| match e {
                FetchError::HttpError(_) => GithubError::UserNotFound,
                other => GithubError::Fetch(other),
            })
    }

    async fn fetch_repos(&self, username: &str) -> Result<Vec<GithubRepo>, GithubError> {
        let repos: Vec<GithubRepo> = self
            .fetcher
            .get_json(&self.repos_url(username))
            .await
            .map_err(|e| match e {
                FetchError::HttpError(_) => GithubError::ReposFailed,
                other => GithubError::Fetch(other),
            })?;

        Ok(most_recent(repos, REPO_LIMIT))
    }
}

/// Order by last update (newest first) and keep at most `limit`.
fn most_recent(mut repos: Vec<GithubRepo>, limit: usize) -> Vec<GithubRepo> {
    repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    repos.truncate(limit);
    repos
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use serde::de::DeserializeOwned;

    use super::*;

    /// Canned responses keyed by URL; unknown URLs answer 404.
    #[derive(Default)]
    struct MockFetcher {
        responses: HashMap<String, Result<String, FetchError>>,
        requests: RefCell<Vec<String>>,
    }

    impl MockFetcher {
        fn respond(mut self, url: &str, body: &str) -> Self {
            self.responses
                .insert(url.to_string(), Ok(body.to_string()));
            self
        }

        fn fail(mut self, url: &str, error: FetchError) -> Self {
            self.responses.insert(url.to_string(), Err(error));
            self
        }
    }

    impl JsonFetcher for MockFetcher {
        async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            let body = self
                .responses
                .get(url)
                .cloned()
                .unwrap_or(Err(FetchError::HttpError(404)))?;
            serde_json::from_str(&body).map_err(|e| FetchError::JsonParseError(e.to_string()))
        }
    }

    const USER_URL: &str = "https://api.github.com/users/octocat";
    const REPOS_URL: &str = "https://api.github.com/users/octocat/repos?sort=updated&per_page=10";

    fn user_json() -> &'static str {
        r#"{"login":"octocat","name":"The Octocat","avatar_url":"https://a/1","bio":null,
            "followers":10,"following":1,"public_repos":12,"location":null,"blog":"",
            "html_url":"https://github.com/octocat"}"#
    }

    fn repos_json(count: usize) -> String {
        // Deliberately out of order: day N is stored at position N
        let repos: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"id":{i},"name":"repo-{i}","html_url":"https://github.com/octocat/repo-{i}",
                        "stargazers_count":{i},"forks_count":0,"language":"Rust",
                        "updated_at":"2024-01-{:02}T00:00:00Z"}}"#,
                    i + 1
                )
            })
            .collect();
        format!("[{}]", repos.join(","))
    }

    #[test]
    fn test_urls() {
        let client = GithubClient::new(MockFetcher::default());
        assert_eq!(client.user_url("octocat"), USER_URL);
        assert_eq!(client.repos_url("octocat"), REPOS_URL);
        assert_eq!(
            client.user_url("bad name/../x"),
            "https://api.github.com/users/bad%20name%2F..%2Fx"
        );

        let local = GithubClient::with_base_url(MockFetcher::default(), "http://localhost:9000/");
        assert_eq!(local.user_url("a"), "http://localhost:9000/users/a");
    }

    #[tokio::test]
    async fn test_profile_with_many_repos() {
        let fetcher = MockFetcher::default()
            .respond(USER_URL, user_json())
            .respond(REPOS_URL, &repos_json(14));
        let client = GithubClient::new(fetcher);

        let profile = client.fetch_profile("  octocat ").await.unwrap();
        assert_eq!(profile.user.display_name(), "The Octocat");
        assert_eq!(profile.repos.len(), 10);
        assert_eq!(profile.repos[0].name, "repo-13");
        assert!(
            profile
                .repos
                .windows(2)
                .all(|w| w[0].updated_at >= w[1].updated_at)
        );
        assert_eq!(
            *client.fetcher.requests.borrow(),
            vec![USER_URL.to_string(), REPOS_URL.to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let client = GithubClient::new(MockFetcher::default());

        let err = client.fetch_profile("octocat").await.unwrap_err();
        assert_eq!(err, GithubError::UserNotFound);
        // The repo list is never requested
        assert_eq!(client.fetcher.requests.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_repo_failure_discards_user() {
        let fetcher = MockFetcher::default()
            .respond(USER_URL, user_json())
            .fail(REPOS_URL, FetchError::HttpError(500));
        let client = GithubClient::new(fetcher);

        let result = client.fetch_profile("octocat").await;
        assert_eq!(result, Err(GithubError::ReposFailed));
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let fetcher = MockFetcher::default().fail(USER_URL, FetchError::Timeout);
        let client = GithubClient::new(fetcher);

        let err = client.fetch_profile("octocat").await.unwrap_err();
        assert_eq!(err.to_string(), "Request timed out");
    }

    #[tokio::test]
    async fn test_empty_username_makes_no_request() {
        let client = GithubClient::new(MockFetcher::default());

        let err = client.fetch_profile("   ").await.unwrap_err();
        assert_eq!(err, GithubError::EmptyUsername);
        assert!(client.fetcher.requests.borrow().is_empty());
    }

    #[test]
    fn test_most_recent() {
        let repos: Vec<GithubRepo> = serde_json::from_str(&repos_json(3)).unwrap();
        let recent = most_recent(repos, 2);
        let names: Vec<&str> = recent.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["repo-2", "repo-1"]);
    }
}
