//! GraphQL documents and envelopes for the two login mutations.
//!
//! DESIGN
//! ======
//! Both mutations take `{ loginInput: { email, password } }` and return
//! `{ token }` under a role-specific field, so one request builder and one
//! decoder cover both roles.

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use serde::{Deserialize, Serialize};

use super::types::{Credentials, Role, Session};
use crate::error::LoginError;

const CLIENT_LOGIN_DOCUMENT: &str = "mutation ClientLogin($loginInput: LoginInput!) {
  clientLogin(loginInput: $loginInput) {
    token
  }
}";

const TUTOR_LOGIN_DOCUMENT: &str = "mutation TutorLogin($loginInput: LoginInput!) {
  tutorLogin(loginInput: $loginInput) {
    token
  }
}";

/// Static description of one login mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginOperation {
    pub operation_name: &'static str,
    /// Field under `data` that carries the session.
    pub field: &'static str,
    pub document: &'static str,
}

impl LoginOperation {
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Client => Self { operation_name: "ClientLogin", field: "clientLogin", document: CLIENT_LOGIN_DOCUMENT },
            Role::Tutor => Self { operation_name: "TutorLogin", field: "tutorLogin", document: TUTOR_LOGIN_DOCUMENT },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginVariables<'a> {
    pub login_input: &'a Credentials,
}

/// JSON body posted to the GraphQL endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<'a> {
    pub query: &'static str,
    pub operation_name: &'static str,
    pub variables: LoginVariables<'a>,
}

#[must_use]
pub fn login_request(role: Role, credentials: &Credentials) -> GraphqlRequest<'_> {
    let op = LoginOperation::for_role(role);
    GraphqlRequest {
        query: op.document,
        operation_name: op.operation_name,
        variables: LoginVariables { login_input: credentials },
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

/// Decode a login response body.
///
/// Returns `Ok(None)` when the server answered without data for the role's
/// field.
///
/// # Errors
///
/// Returns [`LoginError::Rejected`] when the response lists GraphQL errors and
/// [`LoginError::Decode`] when the body is not a valid response.
pub fn decode_login_response(role: Role, body: &str) -> Result<Option<Session>, LoginError> {
    let response: GraphqlResponse = serde_json::from_str(body)?;
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let messages = errors.into_iter().map(|e| e.message).collect::<Vec<_>>();
        return Err(LoginError::Rejected(messages.join("; ")));
    }
    let field = LoginOperation::for_role(role).field;
    match response.data.and_then(|mut data| data.remove(field)) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
    }
}
