use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::RegistrationBackend;
use crate::error::{AuthError, AuthErrorKind, BackendError};
use crate::models::{Account, AccountId, AccountMetadata, ProfileRecord};

/// A call received by a [`MemoryBackend`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    CreateAccount {
        email: String,
        metadata: AccountMetadata,
    },
    InsertProfile {
        profile: ProfileRecord,
        access_token: Option<String>,
    },
    DeleteAccount(AccountId),
}

#[derive(Debug, Default)]
struct MemoryState {
    /// email -> account
    accounts: HashMap<String, AccountId>,
    profiles: HashMap<AccountId, ProfileRecord>,
    calls: Vec<BackendCall>,
    next_id: u64,
    signup_error: Option<AuthError>,
    transport_error: Option<String>,
    issue_sessions: bool,
    omit_identity: bool,
    insert_error: Option<String>,
    can_delete: bool,
}

/// In-memory backend for unit tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every sign-up with `err`.
    pub fn failing_signup(self, err: AuthError) -> Self {
        self.state.lock().unwrap().signup_error = Some(err);
        self
    }

    /// Fail every sign-up before it reaches the provider.
    pub fn failing_transport(self, message: &str) -> Self {
        self.state.lock().unwrap().transport_error = Some(message.to_string());
        self
    }

    /// Hand out a session token with each new account.
    pub fn with_sessions(self) -> Self {
        self.state.lock().unwrap().issue_sessions = true;
        self
    }

    /// Accept sign-ups but return no account identifier.
    pub fn without_identity(self) -> Self {
        self.state.lock().unwrap().omit_identity = true;
        self
    }

    /// Reject every profile insert with `message`.
    pub fn failing_insert(self, message: &str) -> Self {
        self.state.lock().unwrap().insert_error = Some(message.to_string());
        self
    }

    /// Allow compensating account deletes.
    pub fn with_account_deletion(self) -> Self {
        self.state.lock().unwrap().can_delete = true;
        self
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn account(&self, email: &str) -> Option<AccountId> {
        self.state.lock().unwrap().accounts.get(email).cloned()
    }

    pub fn profile(&self, id: &AccountId) -> Option<ProfileRecord> {
        self.state.lock().unwrap().profiles.get(id).cloned()
    }

    /// Accounts that have no profile row.
    pub fn orphaned_accounts(&self) -> Vec<AccountId> {
        let state = self.state.lock().unwrap();
        state
            .accounts
            .values()
            .filter(|id| !state.profiles.contains_key(*id))
            .cloned()
            .collect()
    }
}

impl RegistrationBackend for MemoryBackend {
    async fn create_account(
        &self,
        email: &str,
        _password: &str,
        metadata: &AccountMetadata,
    ) -> Result<Option<Account>, BackendError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(BackendCall::CreateAccount {
            email: email.to_string(),
            metadata: metadata.clone(),
        });

        if let Some(message) = state.transport_error.clone() {
            return Err(BackendError::Transport(message));
        }
        if let Some(err) = state.signup_error.clone() {
            return Err(err.into());
        }
        if state.accounts.contains_key(email) {
            return Err(AuthError::new(AuthErrorKind::AlreadyRegistered, "User already registered").into());
        }

        state.next_id += 1;
        let id = AccountId::new(format!("00000000-0000-4000-8000-{:012}", state.next_id));
        state.accounts.insert(email.to_string(), id.clone());

        if state.omit_identity {
            return Ok(None);
        }
        let account = Account::new(id);
        if state.issue_sessions {
            let token = format!("session-{}", state.next_id);
            return Ok(Some(account.with_access_token(token)));
        }
        Ok(Some(account))
    }

    async fn insert_profile(
        &self,
        profile: &ProfileRecord,
        access_token: Option<&str>,
    ) -> Result<(), BackendError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(BackendCall::InsertProfile {
            profile: profile.clone(),
            access_token: access_token.map(str::to_string),
        });

        if let Some(message) = state.insert_error.clone() {
            return Err(BackendError::Storage(message));
        }
        if state.profiles.contains_key(&profile.id) {
            return Err(BackendError::Storage(format!(
                "duplicate key value violates unique constraint \"users_pkey\" ({})",
                profile.id
            )));
        }
        state.profiles.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn delete_account(&self, id: &AccountId) -> Result<(), BackendError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(BackendCall::DeleteAccount(id.clone()));

        if !state.can_delete {
            return Err(BackendError::Unsupported);
        }
        state.accounts.retain(|_, account| account != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> AccountMetadata {
        AccountMetadata {
            full_name: "Nguyen Van A".to_string(),
            phone: String::new(),
        }
    }

    #[tokio::test]
    async fn test_second_signup_with_same_email_is_rejected() {
        let backend = MemoryBackend::new();

        let first = backend
            .create_account("a@example.com", "123456", &metadata())
            .await
            .unwrap();
        assert!(first.is_some());

        let err = backend
            .create_account("a@example.com", "123456", &metadata())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BackendError::Auth(AuthError {
                kind: AuthErrorKind::AlreadyRegistered,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_without_identity_still_creates_account() {
        let backend = MemoryBackend::new().without_identity();

        let id = backend
            .create_account("a@example.com", "123456", &metadata())
            .await
            .unwrap();
        assert!(id.is_none());
        assert!(backend.account("a@example.com").is_some());
    }

    #[tokio::test]
    async fn test_delete_requires_permission() {
        let backend = MemoryBackend::new();
        let id = backend
            .create_account("a@example.com", "123456", &metadata())
            .await
            .unwrap()
            .unwrap()
            .id;

        assert_eq!(
            backend.delete_account(&id).await,
            Err(BackendError::Unsupported)
        );
        assert_eq!(backend.orphaned_accounts(), vec![id.clone()]);

        let backend = backend.with_account_deletion();
        backend.delete_account(&id).await.unwrap();
        assert!(backend.orphaned_accounts().is_empty());
        assert!(backend.account("a@example.com").is_none());
    }
}
