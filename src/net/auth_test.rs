use std::cell::RefCell;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::graphql::decode_login_response;
use crate::state::login::{LoginForm, Submission};
use crate::util::session_storage::MemorySessionStore;
use crate::util::validators::Validators;

/// Scripted mutation recording every call it receives.
struct FakeAuth {
    reply: Result<Option<Session>, LoginError>,
    calls: RefCell<Vec<(Role, Credentials)>>,
}

impl FakeAuth {
    fn replying(reply: Result<Option<Session>, LoginError>) -> Self {
        Self { reply, calls: RefCell::new(Vec::new()) }
    }
}

impl AuthMutation for FakeAuth {
    async fn login(&self, role: Role, credentials: &Credentials) -> Result<Option<Session>, LoginError> {
        self.calls.borrow_mut().push((role, credentials.clone()));
        self.reply.clone()
    }
}

/// Replies with whatever the server body decodes to for the called role.
struct FakeBody {
    body: String,
    calls: RefCell<Vec<Role>>,
}

impl FakeBody {
    fn new(body: serde_json::Value) -> Self {
        Self { body: body.to_string(), calls: RefCell::new(Vec::new()) }
    }
}

impl AuthMutation for FakeBody {
    async fn login(&self, role: Role, _credentials: &Credentials) -> Result<Option<Session>, LoginError> {
        self.calls.borrow_mut().push(role);
        decode_login_response(role, &self.body)
    }
}

/// Store that refuses every write.
struct FullStore;

impl SessionStore for FullStore {
    fn set(&self, _key: &str, _value: &str) -> Result<(), LoginError> {
        Err(LoginError::Storage("quota exceeded".to_owned()))
    }

    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}

fn creds() -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: "Passw0rd".to_owned() }
}

fn session(token: &str) -> Session {
    Session { token: token.to_owned() }
}

/// Drive one full attempt through the form the way the page does.
fn run_form<M: AuthMutation>(form: &mut LoginForm, auth: &M, store: &MemorySessionStore) {
    if let Submission::Ready { role, credentials } = form.begin_submit(&Validators::default()) {
        let outcome = block_on(submit_login(auth, store, "token", role, &credentials));
        form.settle(&outcome);
    }
}

fn filled_form(email: &str, password: &str) -> LoginForm {
    let mut form = LoginForm::default();
    form.set_email(email.to_owned());
    form.set_password(password.to_owned());
    form
}

// =============================================================
// submit_login
// =============================================================

#[test]
fn submit_login_stores_token_on_success() {
    let auth = FakeAuth::replying(Ok(Some(session("T1"))));
    let store = MemorySessionStore::new();
    let result = block_on(submit_login(&auth, &store, "token", Role::Client, &creds()));
    assert_eq!(result, Ok(session("T1")));
    assert_eq!(store.get("token").as_deref(), Some("T1"));
    assert_eq!(auth.calls.borrow().as_slice(), &[(Role::Client, creds())]);
}

#[test]
fn submit_login_without_data_is_missing_data_for_either_role() {
    for role in [Role::Client, Role::Tutor] {
        let auth = FakeAuth::replying(Ok(None));
        let store = MemorySessionStore::new();
        let result = block_on(submit_login(&auth, &store, "token", role, &creds()));
        assert_eq!(result, Err(LoginError::MissingData));
        assert!(store.is_empty());
    }
}

#[test]
fn submit_login_propagates_transport_error() {
    let auth = FakeAuth::replying(Err(LoginError::Transport("connection refused".to_owned())));
    let store = MemorySessionStore::new();
    let result = block_on(submit_login(&auth, &store, "token", Role::Tutor, &creds()));
    assert_eq!(result, Err(LoginError::Transport("connection refused".to_owned())));
    assert!(store.is_empty());
}

#[test]
fn submit_login_surfaces_storage_failure() {
    let auth = FakeAuth::replying(Ok(Some(session("T1"))));
    let result = block_on(submit_login(&auth, &FullStore, "token", Role::Client, &creds()));
    assert!(matches!(result, Err(LoginError::Storage(_))));
}

#[test]
fn submit_login_writes_configured_key() {
    let auth = FakeAuth::replying(Ok(Some(session("T9"))));
    let store = MemorySessionStore::new();
    block_on(submit_login(&auth, &store, "session_token", Role::Tutor, &creds())).unwrap();
    assert_eq!(store.get("session_token").as_deref(), Some("T9"));
    assert_eq!(store.get("token"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn graphql_auth_is_unavailable_outside_browser() {
    let auth = GraphqlAuth::new("/graphql");
    assert_eq!(auth.endpoint(), "/graphql");
    assert_eq!(block_on(auth.login(Role::Client, &creds())), Err(LoginError::Unavailable));
}

// =============================================================
// Full form flow
// =============================================================

#[test]
fn client_login_stores_token_and_clears_form() {
    let auth = FakeBody::new(json!({ "data": { "clientLogin": { "token": "T1" } } }));
    let store = MemorySessionStore::new();
    let mut form = filled_form("a@b.com", "Passw0rd");

    run_form(&mut form, &auth, &store);

    assert_eq!(store.get("token").as_deref(), Some("T1"));
    assert_eq!(auth.calls.borrow().as_slice(), &[Role::Client]);
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert!(!form.error);
    assert!(form.roles.client && !form.roles.tutor);
}

#[test]
fn tutor_login_uses_tutor_mutation_and_same_key() {
    let auth = FakeBody::new(json!({ "data": { "tutorLogin": { "token": "T2" } } }));
    let store = MemorySessionStore::new();
    let mut form = filled_form("a@b.com", "Passw0rd");
    form.toggle_tutor();

    run_form(&mut form, &auth, &store);

    assert_eq!(auth.calls.borrow().as_slice(), &[Role::Tutor]);
    assert_eq!(store.get("token").as_deref(), Some("T2"));
    assert!(form.roles.client && !form.roles.tutor);
}

#[test]
fn rejected_login_shows_failure_and_clears_form() {
    let auth = FakeAuth::replying(Err(LoginError::Rejected("Incorrect credentials".to_owned())));
    let store = MemorySessionStore::new();
    let mut form = filled_form("a@b.com", "Passw0rd");

    run_form(&mut form, &auth, &store);

    assert!(form.error);
    assert_eq!(form.visible_messages().first().map(|m| m.text()), Some("Login Failed"));
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert!(store.is_empty());
}

#[test]
fn tutor_login_without_data_shows_failure() {
    let auth = FakeBody::new(json!({ "data": { "tutorLogin": null } }));
    let store = MemorySessionStore::new();
    let mut form = filled_form("a@b.com", "Passw0rd");
    form.toggle_tutor();

    run_form(&mut form, &auth, &store);

    assert!(form.error);
    assert!(store.is_empty());
}

#[test]
fn no_role_selected_never_calls_mutation() {
    let auth = FakeAuth::replying(Ok(Some(session("T1"))));
    let store = MemorySessionStore::new();
    let mut form = filled_form("a@b.com", "Passw0rd");
    form.toggle_client();

    run_form(&mut form, &auth, &store);

    assert!(auth.calls.borrow().is_empty());
    assert!(store.is_empty());
    assert!(form.email.is_empty());
    assert!(form.roles.client && !form.roles.tutor);
}

#[test]
fn invalid_input_never_calls_mutation() {
    let auth = FakeAuth::replying(Ok(Some(session("T1"))));
    let store = MemorySessionStore::new();
    let mut form = filled_form("a@b", "passw0rd");

    run_form(&mut form, &auth, &store);

    assert!(auth.calls.borrow().is_empty());
    assert!(!form.email_valid);
    assert!(!form.password_valid);
    assert_eq!(form.email, "a@b");
}
