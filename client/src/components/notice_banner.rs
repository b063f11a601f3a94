//! Stacked success/error notices with auto-dismiss.

use leptos::prelude::*;

use crate::state::ui::{Notice, UiState};

#[cfg(feature = "csr")]
const NOTICE_TTL_MS: u32 = 4_000;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="notice-banner" role="status" aria-live="polite">
            <For
                each=move || ui.get().notices
                key=|notice| notice.id
                children=move |notice: Notice| view! { <NoticeItem notice=notice ui=ui/> }
            />
        </div>
    }
}

#[component]
fn NoticeItem(notice: Notice, ui: RwSignal<UiState>) -> impl IntoView {
    let id = notice.id;

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
        ui.update(|u| u.dismiss(id));
    });

    view! {
        <div class=format!("notice notice--{}", notice.kind.modifier())>
            <span class="notice__text">{notice.text}</span>
            <button
                class="notice__close"
                title="Dismiss"
                aria-label="Dismiss"
                on:click=move |_| ui.update(|u| u.dismiss(id))
            >
                "✕"
            </button>
        </div>
    }
}
