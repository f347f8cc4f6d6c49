// src/tracker.rs

use reqwest::{
    blocking::Client,
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT},
    StatusCode,
};
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::issue::IssuePayload;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// Result of one create-issue call that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Created { title: String },
    Rejected {
        title: String,
        status: u16,
        response: String,
    },
}

/// Somewhere issues can be filed.
pub trait IssueSink {
    /// `Err` only for transport-level failures; a refused issue is
    /// `Ok(Submission::Rejected)`.
    fn submit(&self, payload: &IssuePayload) -> Result<Submission>;
}

/// Blocking client for the `POST /repos/{repo}/issues` endpoint.
pub struct GithubIssues {
    client: Client,
    url: String,
    debug: bool,
}

impl GithubIssues {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers(&config.token)?)
            .build()?;
        Ok(Self {
            client,
            url: config.issues_url(),
            debug: config.debug,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl IssueSink for GithubIssues {
    fn submit(&self, payload: &IssuePayload) -> Result<Submission> {
        let resp = self.client.post(&self.url).json(payload).send()?;
        let status = resp.status();
        let response = resp.text()?;

        if self.debug {
            debug!(
                url = %self.url,
                payload = %serde_json::to_string(payload)?,
                headers = %redacted_headers(),
                status = status.as_u16(),
                response = %response,
                "request echo"
            );
        }

        if status == StatusCode::CREATED {
            Ok(Submission::Created {
                title: payload.title.clone(),
            })
        } else {
            Ok(Submission::Rejected {
                title: payload.title.clone(),
                status: status.as_u16(),
                response,
            })
        }
    }
}

fn default_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GITHUB_JSON));
    let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| Error::Config("GITHUB_TOKEN is not a valid header value".into()))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("itsg33-issues/", env!("CARGO_PKG_VERSION"))),
    );
    Ok(headers)
}

fn redacted_headers() -> String {
    format!(
        "Accept: {ACCEPT_GITHUB_JSON}, Authorization: Bearer ***, {API_VERSION_HEADER}: {API_VERSION}"
    )
}
