//! Floating assistant button and chat dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the dashboard-scoped `RwSignal<ChatState>`. Prompts go
//! to `POST /api/Chat/response`; replies are Markdown rendered to HTML with
//! raw HTML stripped.

#[cfg(test)]
#[path = "chat_bot_test.rs"]
mod chat_bot_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "csr"))]
use crate::net::api::ApiError;
use crate::net::types::MessageRole;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;
use crate::util::markdown::render_markdown_html;

#[cfg(any(test, feature = "csr"))]
const UNEXPECTED_REPLY_ERROR: &str = "An unexpected error occurred while fetching the bot response.";

/// Backend messages are shown as-is; transport failures get a generic line.
#[cfg(any(test, feature = "csr"))]
fn reply_error_text(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } => message.clone(),
        _ => UNEXPECTED_REPLY_ERROR.to_owned(),
    }
}

#[component]
pub fn ChatBot() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        chat.track();
        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let toggle = move |_| chat.update(|c| c.open = !c.open);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if chat.with_untracked(|c| c.loading) {
            return;
        }
        let prompt = match chat.with_untracked(|c| c.prepare_prompt(&input.get_untracked())) {
            Ok(prompt) => prompt,
            Err(crate::state::chat::PromptRejected::Blank) => return,
            Err(rejected) => {
                ui.update(|u| {
                    u.error(rejected.to_string());
                });
                return;
            }
        };
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        chat.update(|c| c.push_user(prompt.clone()));
        input.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::ask_assistant(&token, &prompt).await {
                Ok(reply) => chat.update(|c| c.push_bot(reply)),
                Err(e) => {
                    log::warn!("chat: assistant request failed: {e}");
                    chat.update(ChatState::reply_failed);
                    ui.update(|u| {
                        u.error(reply_error_text(&e));
                    });
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, prompt);
            chat.update(ChatState::reply_failed);
        }
    };

    view! {
        <button class="chat-bot__launcher" title="Open chat" on:click=toggle>
            "🤖"
        </button>
        <Show when=move || chat.with(|c| c.open)>
            <div class="chat-bot__backdrop" on:click=toggle>
                <div class="chat-bot__panel" role="dialog" on:click=move |ev| ev.stop_propagation()>
                    <header class="chat-bot__header">
                        <h2>"AI Assistant"</h2>
                        <button class="chat-bot__close" title="Close" aria-label="Close" on:click=toggle>
                            "✕"
                        </button>
                    </header>
                    <div class="chat-bot__messages" node_ref=messages_ref>
                        {move || {
                            chat.with(ChatState::transcript)
                                .into_iter()
                                .map(|msg| {
                                    let is_bot = msg.role == MessageRole::Bot;
                                    let body = if is_bot {
                                        let rendered = render_markdown_html(&msg.content);
                                        view! { <div class="chat-bot__markdown" inner_html=rendered></div> }
                                            .into_any()
                                    } else {
                                        view! { <span>{msg.content}</span> }.into_any()
                                    };
                                    view! {
                                        <div
                                            class="chat-bot__message"
                                            class:chat-bot__message--bot=is_bot
                                            class:chat-bot__message--user=!is_bot
                                        >
                                            {body}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <Show when=move || chat.with(|c| c.loading)>
                            <div class="chat-bot__message chat-bot__message--bot chat-bot__typing" aria-label="Typing">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </Show>
                    </div>
                    <form class="chat-bot__input-row" on:submit=on_submit>
                        <input
                            class="chat-bot__input"
                            type="text"
                            placeholder="Type your message..."
                            disabled=move || chat.with(|c| c.loading)
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || chat.with(|c| c.loading)>
                            "Send"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
