use chrono::{Duration as ChronoDuration, Utc};
use serde::Deserialize;
use std::time::Duration;

const GITHUB_API: &str = "https://api.github.com";

/// How far back an issue may have been updated and still count as "new".
const LOOKBACK_HOURS: i64 = 24;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// An issue fresh off the API, not yet deduplicated. The `html_url` doubles
/// as the dedupe identifier downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueCandidate {
    pub repo: String,
    pub title: String,
    pub url: String,
    pub labels: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawIssue {
    html_url: String,
    title: String,
    #[serde(default)]
    labels: Vec<RawLabel>,
    /// Present when the "issue" is actually a pull request.
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawLabel {
    name: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Lists recent labeled issues across the watched repositories.
///
/// Each (repo, label) combination is fetched independently: one failing
/// combination is logged and contributes zero issues without aborting the
/// rest of the sweep.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(token, GITHUB_API)
    }

    pub fn with_base_url(token: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(15))
                .user_agent(concat!("grind/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            token,
        }
    }

    /// Sweep every (repo, label) pair for open issues from the last 24h.
    /// Returns `(identifier, candidate)` pairs for the dedupe filter.
    pub async fn recent_labeled_issues(
        &self,
        repos: &[String],
        labels: &[String],
    ) -> Vec<(String, IssueCandidate)> {
        let since = (Utc::now() - ChronoDuration::hours(LOOKBACK_HOURS)).to_rfc3339();
        let mut candidates = Vec::new();

        for repo in repos {
            for label in labels {
                match self.fetch_issues(repo, label, &since).await {
                    Ok(issues) => {
                        for issue in issues {
                            if issue.pull_request.is_some() {
                                continue;
                            }
                            candidates.push((
                                issue.html_url.clone(),
                                IssueCandidate {
                                    repo: repo.clone(),
                                    title: issue.title,
                                    url: issue.html_url,
                                    labels: issue.labels.into_iter().map(|l| l.name).collect(),
                                },
                            ));
                        }
                    }
                    Err(e) => {
                        tracing::warn!("GitHub check failed for {repo} ({label}): {e}");
                    }
                }
            }
        }

        candidates
    }

    async fn fetch_issues(
        &self,
        repo: &str,
        label: &str,
        since: &str,
    ) -> crate::Result<Vec<RawIssue>> {
        let url = format!("{}/repos/{}/issues", self.base_url, repo);
        let mut req = self
            .http
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .query(&[
                ("labels", label),
                ("state", "open"),
                ("since", since),
                ("sort", "created"),
                ("direction", "desc"),
                ("per_page", "5"),
            ]);
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("token {token}"));
        }

        let resp = req.send().await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(crate::TransportError::Api { status, body });
        }
        Ok(resp.json().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
