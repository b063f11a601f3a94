//! REST API helpers for the habit backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs returning [`ApiError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses carry the
//! backend's `message` when it sends one, otherwise a per-call fallback, so
//! pages can show the error text directly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    ChangePasswordDto, Habit, HabitRequest, LoginRequest, LoginResponse, RegisterRequest, UpdateUserDto, UserDto,
};
#[cfg(any(test, feature = "csr"))]
use super::types::ErrorResponse;
#[cfg(feature = "csr")]
use super::types::{ChatRequest, ChatResponse};
#[cfg(feature = "csr")]
use gloo_net::http::{Request, RequestBuilder, Response};

/// Backend origin used when `HABIT_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5237";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for a user-facing notice.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// API origin, configured at compile time through `HABIT_API_BASE`.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("HABIT_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "csr"))]
fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(path: &str) -> String {
    join_url(api_base(), path)
}

#[cfg(any(test, feature = "csr"))]
fn habit_endpoint(id: i64) -> String {
    endpoint(&format!("/api/Habit/{id}"))
}

/// Build the error for a non-2xx response from its raw body.
#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, body: &str, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned());
    ApiError::Status { status, message }
}

#[cfg(feature = "csr")]
fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &session::bearer_header(token))
}

#[cfg(feature = "csr")]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "csr")]
fn decode(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

#[cfg(feature = "csr")]
async fn read_error(resp: Response, fallback: &str) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("api: {} returned {status}", resp.url());
    status_error(status, &body, fallback)
}

#[cfg(feature = "csr")]
async fn expect_ok(resp: Response, fallback: &str) -> Result<Response, ApiError> {
    if resp.ok() { Ok(resp) } else { Err(read_error(resp, fallback).await) }
}

// =============================================================
// Auth
// =============================================================

/// Exchange credentials for a session token via `POST /api/Auth/login`.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure, non-OK status, or a malformed body.
pub async fn login(req: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = Request::post(&endpoint("/api/Auth/login"))
            .json(req)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let resp = expect_ok(resp, "Unknown error").await?;
        resp.json::<LoginResponse>().await.map_err(decode)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/Auth/register`. Only `201 Created` counts
/// as success.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure or any status other than 201.
pub async fn register(req: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = Request::post(&endpoint("/api/Auth/register"))
            .json(req)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if resp.status() == 201 {
            return Ok(());
        }
        Err(read_error(resp, "An error occurred during registration.").await)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Habits
// =============================================================

/// List the current user's habits via `GET /api/Habit`.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure, non-OK status, or a malformed body.
pub async fn fetch_habits(token: &str) -> Result<Vec<Habit>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(Request::get(&endpoint("/api/Habit")), token)
            .send()
            .await
            .map_err(network)?;
        let resp = expect_ok(resp, "Failed to fetch habits").await?;
        resp.json::<Vec<Habit>>().await.map_err(decode)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Create a habit via `POST /api/Habit`.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure or non-OK status.
pub async fn create_habit(token: &str, req: &HabitRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(Request::post(&endpoint("/api/Habit")), token)
            .json(req)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        expect_ok(resp, "Failed to create habit").await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, req);
        Err(ApiError::Unavailable)
    }
}

/// Replace a habit via `PUT /api/Habit/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure or non-OK status.
pub async fn update_habit(token: &str, id: i64, req: &HabitRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(Request::put(&habit_endpoint(id)), token)
            .json(req)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        expect_ok(resp, "Failed to update habit").await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id, req);
        Err(ApiError::Unavailable)
    }
}

/// Delete a habit via `DELETE /api/Habit/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure or non-OK status.
pub async fn delete_habit(token: &str, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(Request::delete(&habit_endpoint(id)), token)
            .send()
            .await
            .map_err(network)?;
        expect_ok(resp, "Failed to delete habit").await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Profile
// =============================================================

/// Fetch the signed-in user via `GET /api/User/me`.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure, non-OK status, or a malformed body.
pub async fn fetch_me(token: &str) -> Result<UserDto, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(Request::get(&endpoint("/api/User/me")), token)
            .send()
            .await
            .map_err(network)?;
        let resp = expect_ok(resp, "Error fetching profile").await?;
        resp.json::<UserDto>().await.map_err(decode)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Update name and email via `PUT /api/User/me`.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure or non-OK status.
pub async fn update_me(token: &str, dto: &UpdateUserDto) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(Request::put(&endpoint("/api/User/me")), token)
            .json(dto)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        expect_ok(resp, "Error updating profile").await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, dto);
        Err(ApiError::Unavailable)
    }
}

/// Change the password via `PUT /api/User/me/password`.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure or non-OK status.
pub async fn change_password(token: &str, dto: &ChangePasswordDto) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(Request::put(&endpoint("/api/User/me/password")), token)
            .json(dto)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        expect_ok(resp, "Error changing password").await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, dto);
        Err(ApiError::Unavailable)
    }
}

/// Delete the account via `DELETE /api/User/me`.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure or non-OK status.
pub async fn delete_me(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(Request::delete(&endpoint("/api/User/me")), token)
            .send()
            .await
            .map_err(network)?;
        expect_ok(resp, "Error deleting account").await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Assistant
// =============================================================

/// Ask the habits assistant via `POST /api/Chat/response`; returns the reply
/// as Markdown.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure, non-OK status, or a malformed body.
pub async fn ask_assistant(token: &str, prompt: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = ChatRequest { prompt: prompt.to_owned() };
        let resp = authorized(Request::post(&endpoint("/api/Chat/response")), token)
            .json(&body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let resp = expect_ok(resp, "Failed to fetch response from the bot").await?;
        let reply: ChatResponse = resp.json().await.map_err(decode)?;
        Ok(reply.response)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, prompt);
        Err(ApiError::Unavailable)
    }
}
