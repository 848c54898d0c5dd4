//! Login page with client/tutor role toggles and email + password auth.

use leptos::prelude::*;

use crate::config::LoginConfig;
use crate::net::auth::GraphqlAuth;
use crate::state::login::{LoginForm, Submission};
use crate::util::validators::Validators;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<LoginConfig>().unwrap_or_default();
    let auth = GraphqlAuth::new(config.graphql_endpoint);
    let token_key = config.token_key;
    let validators = Validators::default();
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = form.try_update(|f| f.begin_submit(&validators)) else {
            return;
        };
        match submission {
            Submission::Ready { role, credentials } => {
                #[cfg(feature = "csr")]
                {
                    let auth = auth.clone();
                    let token_key = token_key.clone();
                    leptos::task::spawn_local(async move {
                        let outcome = crate::net::auth::submit_login(
                            &auth,
                            &crate::util::session_storage::BrowserSessionStorage,
                            &token_key,
                            role,
                            &credentials,
                        )
                        .await;
                        // The page may be gone by the time the request resolves.
                        if form.try_update(|f| f.settle(&outcome)).is_none() {
                            log::debug!("login settled after unmount; result dropped");
                        }
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (role, credentials, &auth, &token_key);
                }
            }
            Submission::Skipped => log::debug!("login skipped: no single role selected"),
            Submission::Blocked(result) => log::debug!("login blocked by validation: {result:?}"),
            Submission::Busy => {}
        }
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <div class="login-page">
                <div class="border">
                    <div class="login-intro">
                        <div class="top-info">
                            <h1 class="login-title">"Login"</h1>
                            <div class="toggles-login">
                                <label class="switch">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.roles.client)
                                        on:change=move |_| form.update(LoginForm::toggle_client)
                                    />
                                    <span class="slider round">" Client"</span>
                                </label>
                                <label class="switch">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.roles.tutor)
                                        on:change=move |_| form.update(LoginForm::toggle_tutor)
                                    />
                                    <span class="slider round">" Tutor"</span>
                                </label>
                            </div>
                        </div>
                    </div>
                    <div class="login-boxes">
                        <div>
                            <input
                                class="email"
                                type="email"
                                placeholder="Email"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                            />
                        </div>
                        <div>
                            <input
                                class="password"
                                type="password"
                                placeholder="Password"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                            />
                        </div>
                        <div>
                            <button type="submit" disabled=move || form.with(LoginForm::is_submitting)>
                                "Login"
                            </button>
                        </div>
                        <div>
                            <p class="change-page">
                                "Do not have an account yet? "
                                <a href="/Signup" class="here">"Register Here"</a>
                            </p>
                        </div>
                    </div>
                    <For
                        each=move || form.with(LoginForm::visible_messages)
                        key=|message| *message
                        children=|message| view! { <p class="login-message">{message.text()}</p> }
                    />
                </div>
            </div>
        </form>
    }
}
