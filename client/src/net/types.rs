//! Wire DTOs for the habit REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional text fields are
//! omitted from request bodies when absent instead of being sent as empty
//! strings, since the backend parses `duration` as a time span.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================
// Auth
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Issued expiry. Not enforced client-side; the backend rejects stale tokens.
    #[serde(default)]
    pub expires_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================
// Habits
// =============================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HabitStatus {
    Uncompleted,
    OnGoing,
    Completed,
    #[default]
    Pending,
}

impl HabitStatus {
    pub const ALL: [Self; 4] = [Self::Uncompleted, Self::OnGoing, Self::Completed, Self::Pending];

    /// Wire name, also used as the display label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uncompleted => "Uncompleted",
            Self::OnGoing => "OnGoing",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    /// BEM modifier used for status accents (`habit-card--completed`).
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Uncompleted => "uncompleted",
            Self::OnGoing => "ongoing",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitLog {
    pub is_completed: HabitStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub user_id: i64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub current_log: Option<HabitLog>,
}

impl Habit {
    #[must_use]
    pub fn status(&self) -> Option<HabitStatus> {
        self.current_log.as_ref().map(|log| log.is_completed)
    }
}

/// Body for both `POST /api/Habit` and `PUT /api/Habit/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_log: Option<HabitLog>,
}

// =============================================================
// User
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&UserDto> for UpdateUserDto {
    fn from(user: &UserDto) -> Self {
        Self {
            name: user.name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

// =============================================================
// Chat
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub prompt: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
