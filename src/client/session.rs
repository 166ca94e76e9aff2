//! Session lifecycle state machine.
//!
//! One object owns the client's identity. The states and transitions:
//!
//! - **Anonymous** (initial) - no token, no user
//! - **Bootstrapping** - a stored session was found on startup and is being
//!   revalidated against the server
//! - **Authenticated** - token and redacted user in hand
//!
//! Transitions:
//!
//! - `login` success: Anonymous → Authenticated (session persisted)
//! - `bootstrap`: Anonymous → Bootstrapping → Authenticated on a 200
//!   profile, otherwise back to Anonymous with the stored token discarded
//! - `logout`: Authenticated → Anonymous (storage cleared)
//! - any authenticated request answered 401: forced logout to Anonymous
//!
//! Login and bootstrap are async; the UI is expected to disable the
//! submitting control while a call is in flight so a user cannot double
//! submit.

use serde::{Deserialize, Serialize};

use crate::client::api;
use crate::client::config::Config;
use crate::client::error::ClientError;
use crate::client::storage::SessionStorage;
use crate::shared::types::{SignupRequest, SignupResponse, UserSummary, UserView};

/// The authenticated identity held by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSession {
    /// Last-issued session token
    pub token: String,
    /// Redacted account view returned at login
    pub user: UserSummary,
}

/// Where the session lifecycle currently stands
#[derive(Debug, Clone)]
pub enum SessionState {
    /// No identity; the initial state
    Anonymous,
    /// Stored session found, revalidation in flight
    Bootstrapping,
    /// Logged in
    Authenticated(ClientSession),
}

/// Owner of the client session lifecycle
///
/// All identity reads in the application go through
/// [`current_session`](Self::current_session).
pub struct SessionManager {
    config: Config,
    http: reqwest::Client,
    storage: SessionStorage,
    state: SessionState,
}

impl SessionManager {
    /// Manager with the default storage location
    pub fn new(config: Config) -> Self {
        Self::with_storage(config, SessionStorage::default())
    }

    /// Manager with explicit storage (tests, custom data dirs)
    pub fn with_storage(config: Config, storage: SessionStorage) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            storage,
            state: SessionState::Anonymous,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// The current session, if logged in
    pub fn current_session(&self) -> Option<&ClientSession> {
        match &self.state {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// Revalidate a previously stored session on application start
    ///
    /// With no stored session this settles in `Anonymous` immediately.
    /// Otherwise the stored token is checked against the profile endpoint:
    /// a 200 moves to `Authenticated` with the freshly returned user and
    /// the stored token; anything else (rejection or transport failure)
    /// discards the stored session. Never fails - the outcome is the
    /// resulting state.
    ///
    /// Returns whether the manager ended up authenticated.
    pub async fn bootstrap(&mut self) -> bool {
        let Some(stored) = self.storage.load() else {
            self.state = SessionState::Anonymous;
            return false;
        };

        self.state = SessionState::Bootstrapping;

        match api::get_profile(&self.http, &self.config, &stored.token).await {
            Ok(view) => {
                let session = ClientSession {
                    token: stored.token,
                    user: UserSummary::from(view),
                };
                if let Err(err) = self.storage.save(&session) {
                    tracing::warn!("Failed to persist refreshed session: {}", err);
                }
                self.state = SessionState::Authenticated(session);
                true
            }
            Err(err) => {
                tracing::warn!("Stored session rejected, starting anonymous: {}", err);
                self.storage.clear();
                self.state = SessionState::Anonymous;
                false
            }
        }
    }

    /// Register a new account
    ///
    /// Registration does not log in; call [`login`](Self::login) with the
    /// new credentials afterwards.
    pub async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ClientError> {
        api::signup(&self.http, &self.config, request).await
    }

    /// Log in and persist the session
    ///
    /// On failure the state is unchanged; a 401 here is a wrong password,
    /// not a forced logout.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ClientError> {
        let response = api::login(&self.http, &self.config, email, password).await?;

        let session = ClientSession {
            token: response.token,
            user: response.user,
        };
        if let Err(err) = self.storage.save(&session) {
            tracing::warn!("Failed to persist session: {}", err);
        }
        self.state = SessionState::Authenticated(session);
        Ok(())
    }

    /// Fetch a fresh profile with the current session
    ///
    /// A 401 means the server no longer accepts the token: the session is
    /// discarded and the manager drops back to `Anonymous` before the error
    /// is returned.
    pub async fn profile(&mut self) -> Result<UserView, ClientError> {
        let token = match self.current_session() {
            Some(session) => session.token.clone(),
            None => {
                return Err(ClientError::Api {
                    status: 401,
                    message: "Not logged in".to_string(),
                })
            }
        };

        match api::get_profile(&self.http, &self.config, &token).await {
            Ok(view) => Ok(view),
            Err(err) => {
                if err.is_unauthorized() {
                    self.force_logout();
                }
                Err(err)
            }
        }
    }

    /// Explicit logout: discard token and user, clear storage
    pub fn logout(&mut self) {
        self.storage.clear();
        self.state = SessionState::Anonymous;
    }

    fn force_logout(&mut self) {
        tracing::warn!("Session rejected by server, discarding stored credentials");
        self.storage.clear();
        self.state = SessionState::Anonymous;
    }
}
