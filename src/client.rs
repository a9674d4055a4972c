use crate::error::Result;
use crate::handlers;
use crate::models::ApiResponse;
use reqwest::header::{HeaderMap, USER_AGENT};

pub struct SpamExpertsClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl SpamExpertsClient {
    /// Creates a client for a SpamExperts panel, e.g.
    /// `https://antispam.example.com`, authenticating API calls with the
    /// given admin credentials.
    pub fn new(base_url: &str, username: &str, password: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, "spamexperts-core/0.1".parse().unwrap());

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Requests a single-sign-on auth ticket for the given account
    /// (a filter domain or panel username).
    pub async fn get_auth_ticket(&self, account: &str) -> Result<String> {
        let response = self
            .get(&format!("/api/authticket/create/username/{}/", account))
            .await?;

        handlers::auth_ticket::extract_ticket(&response)
    }

    /// Fetches an auth ticket and builds the control-panel login URL that
    /// signs the account straight in.
    pub async fn login_url(&self, account: &str) -> Result<String> {
        let ticket = self.get_auth_ticket(account).await?;

        Ok(format!("{}/?authticket={}", self.base_url, ticket))
    }

    async fn get(&self, path: &str) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        ApiResponse::from_response(response).await
    }
}
