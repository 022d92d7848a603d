//! # Supabase REST backend
//!
//! Talks to a Supabase project over plain HTTPS with `reqwest`.
//!
//! ## Calls
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`create_account`](SupabaseClient::create_account) | `POST /auth/v1/signup` with `{email, password, data}` |
//! | [`insert_profile`](SupabaseClient::insert_profile) | `POST /rest/v1/users` with a one-row array, `Prefer: return=minimal`, as the new user when a session token is known |
//! | [`delete_account`](SupabaseClient::delete_account) | `DELETE /auth/v1/admin/users/{id}` (service-role key only) |
//!
//! ## Sign-up responses
//!
//! GoTrue answers a sign-up in one of two shapes: the bare user object when email
//! confirmation is enabled, or a session `{access_token, user, ...}` when it is not.
//! Both are accepted. The session's `access_token` is carried on the returned
//! [`Account`] so the profile insert runs as the freshly signed-up user, which is
//! what row-level security on `users` expects. A user whose `identities` list is empty is GoTrue's way of
//! saying the email is already taken without revealing it, and is reported as
//! [`AuthErrorKind::AlreadyRegistered`].
//!
//! ## Error classification
//!
//! [`classify_auth_error`] turns a GoTrue error body into an [`AuthError`], keyed on
//! the `error_code` field. Servers that predate `error_code` only send a message,
//! so for those the message is inspected instead: "already registered",
//! "Invalid email" and any mention of "Password" are recognised, everything else
//! is [`AuthErrorKind::Other`] and keeps its raw text.

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::{RegistrationBackend, SupabaseConfig};
use crate::error::{AuthError, AuthErrorKind, BackendError};
use crate::models::{Account, AccountId, AccountMetadata, ProfileRecord};

/// Table holding reader profiles.
pub const PROFILE_TABLE: &str = "users";

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a AccountMetadata,
}

/// GoTrue user object, reduced to the fields registration needs.
#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: String,
    #[serde(default)]
    identities: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    User(GoTrueUser),
    Session {
        access_token: Option<String>,
        user: Option<GoTrueUser>,
    },
}

/// Error body shared by GoTrue versions.
#[derive(Debug, Default, Deserialize)]
struct GoTrueError {
    error_code: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

/// PostgREST error body.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    #[serde(default)]
    details: Option<String>,
}

/// Supabase-backed [`RegistrationBackend`].
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url, path)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, table)
    }
}

impl RegistrationBackend for SupabaseClient {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        metadata: &AccountMetadata,
    ) -> Result<Option<Account>, BackendError> {
        let resp = self
            .http
            .post(self.auth_url("signup"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .json(&SignUpRequest {
                email,
                password,
                data: metadata,
            })
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = read_body(resp).await?;

        if !status.is_success() {
            return Err(classify_auth_error(status, &body).into());
        }

        let parsed: SignUpResponse = serde_json::from_str(&body)
            .map_err(|e| BackendError::Transport(format!("Invalid sign-up response: {}", e)))?;
        let (user, access_token) = match parsed {
            SignUpResponse::User(user) => (Some(user), None),
            SignUpResponse::Session { access_token, user } => (user, access_token),
        };

        let Some(user) = user else {
            return Ok(None);
        };
        if matches!(&user.identities, Some(identities) if identities.is_empty()) {
            return Err(AuthError::new(AuthErrorKind::AlreadyRegistered, "User already registered").into());
        }
        if user.id.is_empty() {
            return Ok(None);
        }
        let account = Account::new(AccountId::new(user.id));
        Ok(Some(match access_token {
            Some(token) if !token.is_empty() => account.with_access_token(token),
            _ => account,
        }))
    }

    async fn insert_profile(
        &self,
        profile: &ProfileRecord,
        access_token: Option<&str>,
    ) -> Result<(), BackendError> {
        let bearer = access_token.unwrap_or(self.config.write_key());
        let resp = self
            .http
            .post(self.rest_url(PROFILE_TABLE))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(bearer)
            .header("Prefer", "return=minimal")
            .json(&[profile])
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = read_body(resp).await?;
        let message = match serde_json::from_str::<PostgrestError>(&body) {
            Ok(PostgrestError {
                message,
                details: Some(details),
            }) => format!("{} ({})", message, details),
            Ok(PostgrestError { message, .. }) => message,
            Err(_) => format!("HTTP {}: {}", status.as_u16(), body),
        };
        Err(BackendError::Storage(message))
    }

    async fn delete_account(&self, id: &AccountId) -> Result<(), BackendError> {
        let Some(service_key) = self.config.service_role_key.as_deref() else {
            return Err(BackendError::Unsupported);
        };

        let resp = self
            .http
            .delete(self.auth_url(&format!("admin/users/{}", id)))
            .header("apikey", service_key)
            .bearer_auth(service_key)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = read_body(resp).await?;
        Err(BackendError::Storage(format!(
            "HTTP {}: {}",
            status.as_u16(),
            body
        )))
    }
}

async fn read_body(resp: Response) -> Result<String, BackendError> {
    resp.text()
        .await
        .map_err(|e| BackendError::Transport(e.to_string()))
}

/// Map a GoTrue error response to an [`AuthError`].
pub fn classify_auth_error(status: StatusCode, body: &str) -> AuthError {
    let parsed: GoTrueError = serde_json::from_str(body).unwrap_or_default();

    let message = parsed
        .msg
        .or(parsed.message)
        .or(parsed.error_description)
        .or(parsed.error)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                body.trim().to_string()
            }
        });

    let kind = match parsed.error_code.as_deref() {
        Some("user_already_exists" | "email_exists") => AuthErrorKind::AlreadyRegistered,
        Some("email_address_invalid") => AuthErrorKind::InvalidEmail,
        Some("weak_password") => AuthErrorKind::WeakPassword,
        Some(_) => AuthErrorKind::Other,
        None => legacy_kind(&message),
    };

    AuthError::new(kind, message)
}

/// Classification for servers that send no `error_code`.
fn legacy_kind(message: &str) -> AuthErrorKind {
    if message.contains("already registered") {
        AuthErrorKind::AlreadyRegistered
    } else if message.contains("Invalid email") {
        AuthErrorKind::InvalidEmail
    } else if message.contains("Password") {
        AuthErrorKind::WeakPassword
    } else {
        AuthErrorKind::Other
    }
}
