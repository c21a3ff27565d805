use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::blog::domain::BlogPost;
use crate::experience::domain::Experience;
use crate::profile::domain::Profile;
use crate::project::domain::Project;
use crate::skill::domain::SkillCategory;

use super::fallback;
use super::store::ConnectionReport;

/// Reads give up after this long and fall back to the local datasets.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Human-readable message extracted from the server's error body.
    #[error("{0}")]
    Api(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result of a read: reads never fail outright, they carry the data that was
/// obtained (live or fallback) plus the connection report that goes with it.
pub struct FetchOutcome<T> {
    pub data: T,
    pub report: ConnectionReport,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExperienceDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub company: String,
    pub position: String,
    pub period: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
}

#[derive(Deserialize)]
struct BlogEnvelope {
    blog: BlogPost,
}

#[derive(Deserialize)]
struct ExperienceEnvelope {
    experience: Experience,
}

#[derive(Deserialize)]
struct MessageEnvelope {
    message: String,
}

/// Everything the landing page fetches in parallel.
pub struct LandingData {
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub experiences: Vec<Experience>,
    pub blogs: Vec<BlogPost>,
    pub report: ConnectionReport,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn from_env() -> Result<Self, ClientError> {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);
        let message = body
            .get("message")
            .or_else(|| body.get("error"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Err(ClientError::Api(message))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request_json(self.http.get(self.url(path))).await
    }

    fn degraded(err: &ClientError) -> ConnectionReport {
        warn!(error = %err, "falling back to local data");
        ConnectionReport::warning(&format!("Using local data: {err}"))
    }

    //
    // Reads: total, with fallback.
    //

    pub async fn blogs(&self) -> FetchOutcome<Vec<BlogPost>> {
        match self.get_json("/api/blogs").await {
            Ok(data) => FetchOutcome {
                data,
                report: ConnectionReport::connected(),
            },
            Err(err) => FetchOutcome {
                data: fallback::blogs(),
                report: Self::degraded(&err),
            },
        }
    }

    pub async fn blog(&self, id: &str) -> FetchOutcome<Option<BlogPost>> {
        // Mock identifiers resolve locally without touching the network.
        if id.starts_with("mock-blog") {
            return FetchOutcome {
                data: fallback::blogs().into_iter().find(|b| b.id == id),
                report: ConnectionReport::unknown(),
            };
        }
        match self.get_json(&format!("/api/blogs/{id}")).await {
            Ok(data) => FetchOutcome {
                data: Some(data),
                report: ConnectionReport::connected(),
            },
            Err(err) => FetchOutcome {
                data: None,
                report: Self::degraded(&err),
            },
        }
    }

    pub async fn projects(&self) -> FetchOutcome<Vec<Project>> {
        match self.get_json("/api/projects").await {
            Ok(data) => FetchOutcome {
                data,
                report: ConnectionReport::connected(),
            },
            Err(err) => FetchOutcome {
                data: fallback::projects(),
                report: Self::degraded(&err),
            },
        }
    }

    pub async fn skills(&self) -> FetchOutcome<Vec<SkillCategory>> {
        match self.get_json("/api/skills").await {
            Ok(data) => FetchOutcome {
                data,
                report: ConnectionReport::connected(),
            },
            Err(err) => FetchOutcome {
                data: fallback::skills(),
                report: Self::degraded(&err),
            },
        }
    }

    pub async fn experiences(&self) -> FetchOutcome<Vec<Experience>> {
        match self.get_json("/api/experience").await {
            Ok(data) => FetchOutcome {
                data,
                report: ConnectionReport::connected(),
            },
            Err(err) => FetchOutcome {
                data: fallback::experiences(),
                report: Self::degraded(&err),
            },
        }
    }

    pub async fn profile(&self) -> FetchOutcome<Profile> {
        match self.get_json("/api/profile").await {
            Ok(data) => FetchOutcome {
                data,
                report: ConnectionReport::connected(),
            },
            Err(err) => FetchOutcome {
                data: fallback::profile(),
                report: Self::degraded(&err),
            },
        }
    }

    /// The landing page's parallel fetch. The four calls are independent and
    /// unordered; the combined report keeps the worst individual one.
    pub async fn fetch_all(&self) -> LandingData {
        let (projects, skills, experiences, blogs) = tokio::join!(
            self.projects(),
            self.skills(),
            self.experiences(),
            self.blogs()
        );
        let report = projects
            .report
            .worst(skills.report)
            .worst(experiences.report)
            .worst(blogs.report);
        LandingData {
            projects: projects.data,
            skills: skills.data,
            experiences: experiences.data,
            blogs: blogs.data,
            report,
        }
    }

    //
    // Writes: failures propagate with the server's message.
    //

    pub async fn create_blog(&self, draft: &BlogDraft) -> Result<BlogPost, ClientError> {
        self.request_json::<BlogEnvelope>(self.http.post(self.url("/api/blogs/create")).json(draft))
            .await
            .map(|envelope| envelope.blog)
    }

    pub async fn update_blog(&self, id: &str, draft: &BlogDraft) -> Result<BlogPost, ClientError> {
        self.request_json::<BlogEnvelope>(
            self.http.put(self.url(&format!("/api/blogs/{id}"))).json(draft),
        )
        .await
        .map(|envelope| envelope.blog)
    }

    pub async fn delete_blog(&self, id: &str) -> Result<(), ClientError> {
        self.request_json::<MessageEnvelope>(
            self.http.delete(self.url(&format!("/api/blogs/{id}"))),
        )
        .await
        .map(|_| ())
    }

    pub async fn create_experience(
        &self,
        draft: &ExperienceDraft,
    ) -> Result<Experience, ClientError> {
        self.request_json::<ExperienceEnvelope>(
            self.http.post(self.url("/api/experience")).json(draft),
        )
        .await
        .map(|envelope| envelope.experience)
    }

    pub async fn update_experience(
        &self,
        draft: &ExperienceDraft,
    ) -> Result<Experience, ClientError> {
        self.request_json::<ExperienceEnvelope>(
            self.http.put(self.url("/api/experience")).json(draft),
        )
        .await
        .map(|envelope| envelope.experience)
    }

    pub async fn delete_experience(&self, id: &str) -> Result<(), ClientError> {
        self.request_json::<MessageEnvelope>(
            self.http
                .delete(self.url(&format!("/api/experience?id={id}"))),
        )
        .await
        .map(|_| ())
    }

    pub async fn submit_contact(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<String, ClientError> {
        self.request_json::<MessageEnvelope>(self.http.post(self.url("/api/contact")).json(
            &serde_json::json!({ "name": name, "email": email, "message": message }),
        ))
        .await
        .map(|envelope| envelope.message)
    }
}
