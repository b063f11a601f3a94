//! Assistant chat state.
//!
//! The transcript lives only in memory and starts empty each time the
//! dashboard mounts; the bot greeting is shown until the first prompt. A
//! per-session quota caps user prompts.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatMessage, MessageRole};

pub const MAX_USER_MESSAGES: usize = 20;

pub const QUOTA_MESSAGE: &str =
    "You have reached the maximum number of messages for today, please try again tomorrow.";

pub const GREETING: &str = "Hello! I'm your healthy habits assistant. I can help with advice on exercise, \
nutrition, rest, hydration, or overall well-being. How would you like to improve today?";

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PromptRejected {
    #[error("message is empty")]
    Blank,
    #[error("{}", QUOTA_MESSAGE)]
    QuotaReached,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// A prompt is awaiting its reply.
    pub loading: bool,
    pub open: bool,
}

impl ChatState {
    /// Messages to display. An empty conversation shows the greeting.
    #[must_use]
    pub fn transcript(&self) -> Vec<ChatMessage> {
        if self.messages.is_empty() {
            vec![ChatMessage { role: MessageRole::Bot, content: GREETING.to_owned() }]
        } else {
            self.messages.clone()
        }
    }

    #[must_use]
    pub fn user_message_count(&self) -> usize {
        self.messages.iter().filter(|m| m.role == MessageRole::User).count()
    }

    #[must_use]
    pub fn quota_reached(&self) -> bool {
        self.user_message_count() >= MAX_USER_MESSAGES
    }

    /// Accept a draft as the next prompt, trimmed.
    ///
    /// # Errors
    ///
    /// [`PromptRejected::Blank`] for whitespace-only input and
    /// [`PromptRejected::QuotaReached`] once the quota is used up.
    pub fn prepare_prompt(&self, draft: &str) -> Result<String, PromptRejected> {
        let prompt = draft.trim();
        if prompt.is_empty() {
            return Err(PromptRejected::Blank);
        }
        if self.quota_reached() {
            return Err(PromptRejected::QuotaReached);
        }
        Ok(prompt.to_owned())
    }

    pub fn push_user(&mut self, prompt: String) {
        self.messages.push(ChatMessage { role: MessageRole::User, content: prompt });
        self.loading = true;
    }

    pub fn push_bot(&mut self, reply: String) {
        self.messages.push(ChatMessage { role: MessageRole::Bot, content: reply });
        self.loading = false;
    }

    /// The pending prompt got no reply; it still counts toward the quota.
    pub fn reply_failed(&mut self) {
        self.loading = false;
    }
}
