//! Profile page: account details, profile edit, password change and
//! account deletion.
//!
//! Deleting the account ends the session; the route guard then sends the
//! browser back to the entry view without any navigation here.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{ChangePasswordDto, UpdateUserDto, UserDto};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::time::display_date;
use crate::util::validation::{validate_password_change, validate_profile_update};

const DELETE_ACCOUNT_MESSAGE: &str =
    "This action will permanently delete your account and all your information. Are you sure you want to continue?";

/// Profile fetch lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum ProfileLoad {
    #[default]
    Loading,
    Loaded(UserDto),
    Failed(String),
}

/// Trim the editable profile fields before sending.
fn normalized_update(dto: &UpdateUserDto) -> UpdateUserDto {
    UpdateUserDto {
        name: dto.name.trim().to_owned(),
        last_name: dto.last_name.trim().to_owned(),
        email: dto.email.trim().to_owned(),
    }
}

fn load_profile(auth: RwSignal<AuthState>, profile: RwSignal<ProfileLoad>, edit: RwSignal<UpdateUserDto>) {
    let Some(token) = auth.with_untracked(AuthState::token) else {
        return;
    };
    profile.set(ProfileLoad::Loading);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_me(&token).await {
            Ok(user) => {
                edit.set(UpdateUserDto::from(&user));
                profile.set(ProfileLoad::Loaded(user));
            }
            Err(e) => {
                log::warn!("profile: fetch failed: {e}");
                profile.set(ProfileLoad::Failed(e.user_message()));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, edit);
        profile.set(ProfileLoad::Failed("Error fetching profile".to_owned()));
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let profile = RwSignal::new(ProfileLoad::default());
    let edit = RwSignal::new(UpdateUserDto::default());
    let passwords = RwSignal::new(ChangePasswordDto::default());
    let confirm_delete = RwSignal::new(false);

    load_profile(auth, profile, edit);

    let on_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = edit.with_untracked(normalized_update);
        if let Err(message) = validate_profile_update(&dto) {
            ui.update(|u| {
                u.error(message);
            });
            return;
        }
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_me(&token, &dto).await {
                Ok(()) => {
                    ui.update(|u| {
                        u.success("Profile updated");
                    });
                    load_profile(auth, profile, edit);
                }
                Err(e) => ui.update(|u| {
                    u.error(e.user_message());
                }),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, dto);
        }
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = passwords.get_untracked();
        if let Err(message) = validate_password_change(&dto) {
            ui.update(|u| {
                u.error(message);
            });
            return;
        }
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::change_password(&token, &dto).await {
                Ok(()) => {
                    ui.update(|u| {
                        u.success("Password updated");
                    });
                    passwords.set(ChangePasswordDto::default());
                }
                Err(e) => ui.update(|u| {
                    u.error(e.user_message());
                }),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, dto);
        }
    };

    let on_delete_cancel = Callback::new(move |()| confirm_delete.set(false));
    let on_delete_confirm = Callback::new(move |()| {
        confirm_delete.set(false);
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_me(&token).await {
                Ok(()) => {
                    ui.update(|u| {
                        u.success("Account deleted");
                    });
                    auth.update(AuthState::logout);
                }
                Err(e) => ui.update(|u| {
                    u.error(e.user_message());
                }),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    });

    view! {
        <div class="profile-page">
            <section class="profile-page__card">
                <h2>"Information"</h2>
                {move || match profile.get() {
                    ProfileLoad::Loading => view! { <p class="profile-page__status">"Loading..."</p> }.into_any(),
                    ProfileLoad::Failed(error) => view! { <p class="profile-page__error">{error}</p> }.into_any(),
                    ProfileLoad::Loaded(user) => {
                        let since = display_date(&user.created_at).to_owned();
                        view! {
                            <dl class="profile-page__info">
                                <dt>"Name"</dt>
                                <dd>{user.name}</dd>
                                <dt>"Last Name"</dt>
                                <dd>{user.last_name}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email}</dd>
                                <dt>"Member since"</dt>
                                <dd>{since}</dd>
                            </dl>
                        }
                            .into_any()
                    }
                }}
            </section>

            <section class="profile-page__card">
                <h2>"Edit Profile"</h2>
                <form class="profile-page__form" on:submit=on_update>
                    <ProfileInput
                        label="Name"
                        value=Signal::derive(move || edit.with(|d| d.name.clone()))
                        on_input=Callback::new(move |v: String| edit.update(|d| d.name = v))
                    />
                    <ProfileInput
                        label="Last Name"
                        value=Signal::derive(move || edit.with(|d| d.last_name.clone()))
                        on_input=Callback::new(move |v: String| edit.update(|d| d.last_name = v))
                    />
                    <ProfileInput
                        label="Email"
                        kind="email"
                        value=Signal::derive(move || edit.with(|d| d.email.clone()))
                        on_input=Callback::new(move |v: String| edit.update(|d| d.email = v))
                    />
                    <button class="btn btn--primary" type="submit">"Save Changes"</button>
                </form>
            </section>

            <section class="profile-page__card">
                <h2>"Change Password"</h2>
                <form class="profile-page__form" on:submit=on_change_password>
                    <ProfileInput
                        label="Current Password"
                        kind="password"
                        value=Signal::derive(move || passwords.with(|p| p.current_password.clone()))
                        on_input=Callback::new(move |v: String| passwords.update(|p| p.current_password = v))
                    />
                    <ProfileInput
                        label="New Password"
                        kind="password"
                        value=Signal::derive(move || passwords.with(|p| p.new_password.clone()))
                        on_input=Callback::new(move |v: String| passwords.update(|p| p.new_password = v))
                    />
                    <ProfileInput
                        label="Confirm New Password"
                        kind="password"
                        value=Signal::derive(move || passwords.with(|p| p.confirm_new_password.clone()))
                        on_input=Callback::new(move |v: String| passwords.update(|p| p.confirm_new_password = v))
                    />
                    <button class="btn btn--primary" type="submit">"Change Password"</button>
                </form>
            </section>

            <section class="profile-page__card profile-page__card--danger">
                <h2>"Delete Account"</h2>
                <p>
                    "This action will permanently delete your account and all your information. "
                    "You won't be able to recover it afterwards."
                </p>
                <button class="btn btn--danger" on:click=move |_| confirm_delete.set(true)>
                    "Delete Account"
                </button>
            </section>

            <Show when=move || confirm_delete.get()>
                <ConfirmDialog
                    title="Confirm Account Deletion"
                    message=DELETE_ACCOUNT_MESSAGE
                    confirm_label="Yes, delete account"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}

#[component]
fn ProfileInput(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="profile-page__label">
            {label}
            <input
                class="profile-page__input"
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}
