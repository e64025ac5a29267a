//! HTTP client for the NutriTrack REST API.
//!
//! Implements both remote ports against the server's JSON endpoints.
//! Transport failures and non-2xx statuses are folded into `ApiError`
//! here; callers never see reqwest types.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde_json::json;
use tracing::debug;

use nt_core::dashboard::{MealEntry, NutritionStats};
use nt_core::onboarding::OnboardingSubmission;
use nt_core::ports::{ApiError, AuthSession, DashboardApiPort, SessionApiPort};
use nt_core::user::UserRecord;

use super::dto::{AuthResponse, ErrorBody, MealsEnvelope, StatsEnvelope, UserEnvelope};

pub struct HttpApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Use a preconfigured client (timeouts, proxies).
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Pull the server's error message out of a failed response, falling
    /// back to the HTTP status line.
    async fn error_message(response: Response) -> String {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => body
                .error
                .or(body.message)
                .unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        }
    }

    /// Map a non-2xx response on an authenticated endpoint.
    async fn map_failure(response: Response) -> ApiError {
        let status = response.status();
        let message = Self::error_message(response).await;
        debug!(%status, %message, "api request rejected");
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::Validation(message)
            }
            _ => ApiError::Network(format!("unexpected status {}: {}", status, message)),
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(format!("malformed response body: {}", e)))
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[async_trait]
impl SessionApiPort for HttpApiClient {
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            // Login is the one endpoint where 401 means bad credentials
            // rather than a stale token.
            if response.status() == StatusCode::UNAUTHORIZED {
                return Err(ApiError::InvalidCredentials);
            }
            return Err(Self::map_failure(response).await);
        }

        let body: AuthResponse = Self::decode(response).await?;
        Ok(AuthSession {
            token: body.access_token,
            user: body.user.into_record(),
        })
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthSession, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&json!({
                "email": email,
                "password": password,
                "full_name": full_name,
            }))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::map_failure(response).await);
        }

        let body: AuthResponse = Self::decode(response).await?;
        Ok(AuthSession {
            token: body.access_token,
            user: body.user.into_record(),
        })
    }

    async fn fetch_current_user(&self, token: &str) -> Result<UserRecord, ApiError> {
        let response = self
            .http
            .get(self.url("/api/auth/me"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::map_failure(response).await);
        }

        let body: UserEnvelope = Self::decode(response).await?;
        Ok(body.user.into_record())
    }

    async fn submit_onboarding(
        &self,
        token: &str,
        submission: &OnboardingSubmission,
    ) -> Result<UserRecord, ApiError> {
        let response = self
            .http
            .post(self.url("/api/onboarding/complete"))
            .bearer_auth(token)
            .json(submission)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::map_failure(response).await);
        }

        let body: UserEnvelope = Self::decode(response).await?;
        Ok(body.user.into_record())
    }
}

#[async_trait]
impl DashboardApiPort for HttpApiClient {
    async fn meal_history(&self, token: &str, days: u32) -> Result<Vec<MealEntry>, ApiError> {
        let response = self
            .http
            .get(self.url("/api/meals/history"))
            .query(&[("days", days)])
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::map_failure(response).await);
        }

        let body: MealsEnvelope = Self::decode(response).await?;
        Ok(body.meals.into_iter().map(MealEntry::from).collect())
    }

    async fn nutrition_stats(&self, token: &str, days: u32) -> Result<NutritionStats, ApiError> {
        let response = self
            .http
            .get(self.url("/api/meals/stats"))
            .query(&[("days", days)])
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::map_failure(response).await);
        }

        let body: StatsEnvelope = Self::decode(response).await?;
        Ok(body.stats)
    }
}
