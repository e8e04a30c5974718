use std::env;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde::ser::Serialize;
use url::Url;

use crate::chat::ChatEndpoint;
use crate::error::{Error, Result};
use crate::observability::{CLIENT_REQUEST_DURATION, CLIENT_REQUEST_ERRORS, CLIENT_REQUESTS};
use crate::types::{Assignment, Course, LoginResponse, StudyPlan, StudyPlanRequest, UserProfile};

const DEFAULT_API_URL: &str = "http://localhost:5000/api/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the ClassMate backend API.
///
/// The client is unauthenticated until [`Classmate::login`] succeeds;
/// from then on every request carries the session id in the
/// `X-Session-Id` header, matching what the backend expects.
#[derive(Debug, Clone)]
pub struct Classmate {
    client: ReqwestClient,
    base_url: Url,
    session_id: Option<String>,
    timeout: Duration,
}

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    #[serde(rename = "canvasUrl")]
    canvas_url: &'a str,
    #[serde(rename = "apiKey")]
    api_key: &'a str,
}

#[derive(serde::Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
    reply: String,
}

#[derive(Deserialize)]
struct Acknowledgement {
    #[serde(default)]
    #[allow(dead_code)]
    success: bool,
}

impl Classmate {
    /// Create a new ClassMate client.
    ///
    /// The base URL can be provided directly or read from the
    /// CLASSMATE_API_URL environment variable; it defaults to a local
    /// development backend.
    pub fn new(base_url: Option<String>) -> Result<Self> {
        let base_url = match base_url {
            Some(url) => url,
            None => env::var("CLASSMATE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        };

        Self::with_options(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a new client with custom settings.
    pub fn with_options(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        // Routes are joined relative to the base, so it has to end in a
        // slash or the last path segment gets replaced.
        let mut base_url = base_url.as_ref().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)?;

        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            client,
            base_url,
            session_id: None,
            timeout,
        })
    }

    /// Returns the active session id, if logged in.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Returns true if a login session is active.
    pub fn is_authenticated(&self) -> bool {
        self.session_id.is_some()
    }

    /// Resumes a previously established session without logging in again.
    pub fn with_session_id(mut self, session_id: String) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Create and return default headers for API requests.
    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(session_id) = &self.session_id {
            let value = HeaderValue::from_str(session_id).map_err(|_| {
                Error::authentication("session id contains characters invalid in a header")
            })?;
            headers.insert("x-session-id", value);
        }
        Ok(headers)
    }

    /// Process API response errors and convert to our Error type.
    async fn process_error_response(response: Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|val| val.to_str().ok())
            .and_then(|val| val.parse::<u64>().ok());

        // The backend wraps every failure as {"error": "..."}.
        #[derive(Deserialize)]
        struct ErrorResponse {
            error: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        let error_message = serde_json::from_str::<ErrorResponse>(&error_body)
            .ok()
            .and_then(|e| e.error)
            .unwrap_or_else(|| error_body.clone());

        // Map HTTP status code to appropriate error type
        match status_code {
            400 => Error::bad_request(error_message, None),
            401 => Error::authentication(error_message),
            404 => Error::not_found(error_message),
            408 => Error::timeout(error_message, None),
            429 => Error::rate_limit(error_message, retry_after),
            500 => Error::internal_server(error_message),
            502..=504 => Error::service_unavailable(error_message, retry_after),
            _ => Error::api(status_code, error_message),
        }
    }

    fn triage_transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::timeout(
                format!("Request timed out: {}", e),
                Some(self.timeout.as_secs_f64()),
            )
        } else if e.is_connect() {
            Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
        } else {
            Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        CLIENT_REQUESTS.click();
        let start = Instant::now();

        let response = request
            .headers(self.default_headers()?)
            .send()
            .await
            .map_err(|e| self.triage_transport_error(e));
        CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                CLIENT_REQUEST_ERRORS.click();
                return Err(err);
            }
        };

        if !response.status().is_success() {
            CLIENT_REQUEST_ERRORS.click();
            return Err(Self::process_error_response(response).await);
        }

        response.json::<T>().await.map_err(|e| {
            Error::serialization(
                format!("Failed to parse response: {}", e),
                Some(Box::new(e)),
            )
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path)?;
        self.execute(self.client.get(url)).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.base_url.join(path)?;
        self.execute(self.client.post(url).json(body)).await
    }

    /// Authenticate against Canvas through the backend.
    ///
    /// On success the returned session id is stored and sent with all
    /// subsequent requests.
    pub async fn login(&mut self, canvas_url: &str, api_key: &str) -> Result<UserProfile> {
        let request = LoginRequest {
            canvas_url,
            api_key,
        };
        let response: LoginResponse = self.post("auth/login", &request).await?;
        self.session_id = Some(response.session_id);
        Ok(response.user)
    }

    /// End the active session.
    ///
    /// The stored session id is cleared even if the backend call fails;
    /// the server expires orphaned sessions on its own.
    pub async fn logout(&mut self) -> Result<()> {
        let result: Result<Acknowledgement> =
            self.post("auth/logout", &serde_json::json!({})).await;
        self.session_id = None;
        result.map(|_| ())
    }

    /// Fetch the current user's profile.
    pub async fn user(&self) -> Result<UserProfile> {
        self.get("user").await
    }

    /// Fetch all active course enrollments.
    pub async fn courses(&self) -> Result<Vec<Course>> {
        self.get("courses").await
    }

    /// Fetch assignments from one week ago into the future.
    pub async fn assignments(&self) -> Result<Vec<Assignment>> {
        self.get("assignments").await
    }

    /// Ask the backend to generate a study plan for a date range.
    pub async fn generate_study_plan(&self, request: &StudyPlanRequest) -> Result<StudyPlan> {
        self.post("study-plan/generate", request).await
    }

    /// Send one message to the ClassMate assistant and await its reply.
    pub async fn send_message(&self, text: &str) -> Result<String> {
        let request = ChatRequest { message: text };
        let reply: ChatReply = self.post("chat", &request).await?;
        Ok(reply.reply)
    }
}

#[async_trait::async_trait]
impl ChatEndpoint for Classmate {
    async fn send_message(&self, text: &str) -> Result<String> {
        Classmate::send_message(self, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client =
            Classmate::with_options("https://classmate.example.com/api", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            client.base_url.as_str(),
            "https://classmate.example.com/api/"
        );
        assert!(client.session_id().is_none());
        assert!(!client.is_authenticated());
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let client = Classmate::with_options("http://localhost:5000/api", DEFAULT_TIMEOUT).unwrap();
        let url = client.base_url.join("auth/login").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/auth/login");
    }

    #[test]
    fn session_id_resumption() {
        let client = Classmate::new(Some(DEFAULT_API_URL.to_string()))
            .unwrap()
            .with_session_id("42_1756000000.0".to_string());
        assert!(client.is_authenticated());
        assert_eq!(client.session_id(), Some("42_1756000000.0"));
    }

    #[test]
    fn session_header_present_after_resume() {
        let client = Classmate::new(Some(DEFAULT_API_URL.to_string()))
            .unwrap()
            .with_session_id("42_1756000000.0".to_string());
        let headers = client.default_headers().unwrap();
        assert_eq!(
            headers.get("x-session-id").unwrap().to_str().unwrap(),
            "42_1756000000.0"
        );
    }
}
