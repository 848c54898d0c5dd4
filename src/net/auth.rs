//! Login transport and the submit pipeline.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: [`GraphqlAuth`] returns [`LoginError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! `submit_login` never panics. Transport failures, GraphQL errors, missing
//! data and storage failures all come back as `Err` so the form can show one
//! generic failure message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::types::{Credentials, Role, Session};
use crate::error::LoginError;
use crate::util::session_storage::SessionStore;

/// Remote login capability, selected by role at call time.
pub trait AuthMutation {
    /// Run the role's login mutation.
    ///
    /// Resolves to `Ok(None)` when the server answered without data.
    fn login(&self, role: Role, credentials: &Credentials) -> impl Future<Output = Result<Option<Session>, LoginError>>;
}

/// [`AuthMutation`] backed by a GraphQL endpoint over HTTP.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphqlAuth {
    endpoint: String,
}

impl GraphqlAuth {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AuthMutation for GraphqlAuth {
    async fn login(&self, role: Role, credentials: &Credentials) -> Result<Option<Session>, LoginError> {
        #[cfg(feature = "csr")]
        {
            let payload = super::graphql::login_request(role, credentials);
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(&payload)
                .map_err(|e| LoginError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| LoginError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(LoginError::Status(resp.status()));
            }
            let body = resp.text().await.map_err(|e| LoginError::Transport(e.to_string()))?;
            super::graphql::decode_login_response(role, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (role, credentials);
            Err(LoginError::Unavailable)
        }
    }
}

/// Run one login attempt and persist the session on success.
///
/// # Errors
///
/// Returns the transport or rejection error from `mutation`,
/// [`LoginError::MissingData`] when the server answered without a session,
/// or the store's error if the token could not be written.
pub async fn submit_login<M, S>(
    mutation: &M,
    store: &S,
    token_key: &str,
    role: Role,
    credentials: &Credentials,
) -> Result<Session, LoginError>
where
    M: AuthMutation,
    S: SessionStore,
{
    log::info!("login started role={role}");
    let result = login_and_store(mutation, store, token_key, role, credentials).await;
    match &result {
        Ok(_) => log::info!("login succeeded role={role}"),
        Err(e) => log::warn!("login failed role={role}: {e}"),
    }
    result
}

async fn login_and_store<M, S>(
    mutation: &M,
    store: &S,
    token_key: &str,
    role: Role,
    credentials: &Credentials,
) -> Result<Session, LoginError>
where
    M: AuthMutation,
    S: SessionStore,
{
    let session = mutation.login(role, credentials).await?.ok_or(LoginError::MissingData)?;
    store.set(token_key, &session.token)?;
    Ok(session)
}
