//! Session container: who is using the application right now
//!
//! Owned by the app struct and handed to renderers by reference. Login and
//! signup write the token and identity to storage; logout removes both;
//! `restore` adopts whatever a previous run left behind.

use tracing::{info, warn};

use crate::{
    Authenticator, BookMyBoxError, Credentials, DemoAuthenticator, DemoCredential, KeyValueStorage,
    Result, SignupProfile, UserIdentity, TOKEN_KEY, USER_KEY,
};

/// Observable session state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user: Option<UserIdentity>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

pub struct Session<S, A = DemoAuthenticator> {
    state: SessionState,
    storage: S,
    authenticator: A,
}

impl<S: KeyValueStorage, A: Authenticator> Session<S, A> {
    /// Unauthenticated session. Call `restore` to pick up a stored identity.
    pub fn new(storage: S, authenticator: A) -> Self {
        Self {
            state: SessionState::default(),
            storage,
            authenticator,
        }
    }

    /// Build a session and immediately restore any persisted identity
    pub fn restored(storage: S, authenticator: A) -> Self {
        let mut session = Self::new(storage, authenticator);
        session.restore();
        session
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    // ========================================================================
    // Operations
    // ========================================================================

    pub fn login(&mut self, email: &str, password: &str) -> Result<UserIdentity> {
        self.begin();
        let credentials = Credentials::new(email, password);
        let result = self
            .authenticator
            .authenticate(&credentials)
            .and_then(|user| self.adopt(user));
        match &result {
            Ok(user) => info!(user_id = user.id, role = ?user.role, "login succeeded"),
            Err(e) => warn!(email, "login failed: {}", e),
        }
        self.finish(result)
    }

    pub fn signup(&mut self, profile: &SignupProfile) -> Result<UserIdentity> {
        self.begin();
        let result = self
            .authenticator
            .register(profile)
            .and_then(|user| self.adopt(user));
        if let Ok(user) = &result {
            info!(user_id = user.id, role = ?user.role, "signed up");
        }
        self.finish(result)
    }

    /// Clear the identity and both stored entries. The in-memory identity is
    /// dropped even if storage refuses a removal; both removals are always
    /// attempted and the first failure is returned.
    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.state.user.take() {
            info!(user_id = user.id, "logged out");
        }
        let user_removed = self.storage.remove_item(USER_KEY);
        let token_removed = self.storage.remove_item(TOKEN_KEY);
        if let Err(e) = user_removed.as_ref().and(token_removed.as_ref()) {
            warn!("logout could not clear stored session: {}", e);
        }
        user_removed.and(token_removed)
    }

    /// Adopt a previously persisted identity without re-checking credentials.
    ///
    /// Fails closed: a token without an identity, an identity without a token,
    /// or an identity that does not parse leaves the session unauthenticated,
    /// and unparseable entries are removed so the next launch starts clean.
    pub fn restore(&mut self) -> Option<&UserIdentity> {
        match self.read_persisted() {
            Ok(Some(user)) => {
                info!(user_id = user.id, "restored session");
                self.state.user = Some(user);
            }
            Ok(None) => {
                self.state.user = None;
            }
            Err(e) => {
                warn!("discarding stored session: {}", e);
                self.state.user = None;
                let _ = self.storage.remove_item(TOKEN_KEY);
                let _ = self.storage.remove_item(USER_KEY);
            }
        }
        self.state.user.as_ref()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn begin(&mut self) {
        self.state.loading = true;
        self.state.error = None;
    }

    fn finish(&mut self, result: Result<UserIdentity>) -> Result<UserIdentity> {
        self.state.loading = false;
        if let Err(e) = &result {
            self.state.error = Some(e.to_string());
        }
        result
    }

    fn adopt(&mut self, user: UserIdentity) -> Result<UserIdentity> {
        let token = self.authenticator.session_token(&user);
        let serialized = serde_json::to_string(&user)?;
        self.storage.set_item(TOKEN_KEY, &token)?;
        self.storage.set_item(USER_KEY, &serialized)?;
        self.state.user = Some(user.clone());
        Ok(user)
    }

    fn read_persisted(&self) -> Result<Option<UserIdentity>> {
        let token = self.storage.get_item(TOKEN_KEY)?;
        let user = self.storage.get_item(USER_KEY)?;
        match (token, user) {
            (Some(_), Some(raw)) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| BookMyBoxError::CorruptSession(e.to_string())),
            _ => Ok(None),
        }
    }
}

impl<S: KeyValueStorage> Session<S, DemoAuthenticator> {
    /// Login hints for the demo accounts
    pub fn demo_credentials(&self) -> Vec<DemoCredential> {
        self.authenticator.demo_credentials()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStorage, Role, DEMO_SESSION_TOKEN};

    fn session() -> Session<MemoryStorage> {
        Session::new(MemoryStorage::new(), DemoAuthenticator::new())
    }

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(BookMyBoxError::Storage("quota exceeded".to_string()))
        }

        fn remove_item(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn starts_unauthenticated() {
        let s = session();
        assert!(!s.is_authenticated());
        assert!(!s.is_loading());
        assert_eq!(s.error(), None);
    }

    #[test]
    fn every_demo_account_logs_in() {
        for (email, password, id, role) in [
            ("user@demo.com", "user123", 1, Role::User),
            ("owner@demo.com", "owner123", 2, Role::Owner),
            ("admin@demo.com", "admin123", 3, Role::Admin),
        ] {
            let mut s = session();
            let user = s.login(email, password).unwrap();
            assert_eq!(user.id, id);
            assert_eq!(user.role, role);
            assert!(s.is_authenticated());
            assert_eq!(s.user(), Some(&user));
            assert!(!s.is_loading());
            assert_eq!(s.storage().get_item(TOKEN_KEY).unwrap().as_deref(), Some(DEMO_SESSION_TOKEN));
            let stored: UserIdentity = serde_json::from_str(&s.storage().get_item(USER_KEY).unwrap().unwrap()).unwrap();
            assert_eq!(stored, user);
        }
    }

    #[test]
    fn bad_credentials_leave_session_unauthenticated() {
        let mut s = session();
        for (email, password) in [("user@demo.com", "wrong"), ("nobody@demo.com", "user123"), ("", "")] {
            let err = s.login(email, password).unwrap_err();
            assert!(matches!(err, BookMyBoxError::InvalidCredentials(_)));
            assert!(!s.is_authenticated());
            assert!(!s.error().unwrap_or_default().is_empty());
        }
        assert!(s.storage().is_empty());
    }

    #[test]
    fn retry_after_failure_clears_error() {
        let mut s = session();
        assert!(s.login("user@demo.com", "bad").is_err());
        assert!(s.error().is_some());
        s.login("user@demo.com", "user123").unwrap();
        assert_eq!(s.error(), None);
    }

    #[test]
    fn logout_clears_identity_and_storage() {
        let mut s = session();
        s.login("owner@demo.com", "owner123").unwrap();
        s.logout().unwrap();
        assert!(!s.is_authenticated());
        assert_eq!(s.storage().get_item(USER_KEY).unwrap(), None);
        assert_eq!(s.storage().get_item(TOKEN_KEY).unwrap(), None);
    }

    /// Storage that refuses to remove the token entry
    #[derive(Default)]
    struct StickyTokenStorage {
        inner: MemoryStorage,
    }

    impl KeyValueStorage for StickyTokenStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            self.inner.get_item(key)
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
            self.inner.set_item(key, value)
        }

        fn remove_item(&mut self, key: &str) -> Result<()> {
            if key == TOKEN_KEY {
                return Err(BookMyBoxError::Storage("denied".to_string()));
            }
            self.inner.remove_item(key)
        }
    }

    #[test]
    fn logout_removes_identity_even_when_token_removal_fails() {
        let mut s = Session::new(StickyTokenStorage::default(), DemoAuthenticator::new());
        s.login("user@demo.com", "user123").unwrap();

        let err = s.logout().unwrap_err();
        assert_eq!(err, BookMyBoxError::Storage("denied".to_string()));
        assert!(!s.is_authenticated());
        assert_eq!(s.storage().get_item(USER_KEY).unwrap(), None);

        let relaunched = Session::restored(StickyTokenStorage { inner: s.storage().inner.clone() }, DemoAuthenticator::new());
        assert!(!relaunched.is_authenticated());
    }

    #[test]
    fn signup_with_email_and_name_is_a_user() {
        let mut s = session();
        let user = s
            .signup(&SignupProfile {
                email: "fresh@demo.com".to_string(),
                name: "Fresh Player".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(user.role, Role::User);
        assert!(s.is_authenticated());
        assert!(s.storage().get_item(USER_KEY).unwrap().is_some());
    }

    #[test]
    fn signup_keeps_requested_role() {
        let mut s = session();
        let user = s
            .signup(&SignupProfile {
                email: "venue@demo.com".to_string(),
                name: "Venue Owner".to_string(),
                role: Some(Role::Owner),
                phone: Some("+91 1".to_string()),
                location: None,
            })
            .unwrap();
        assert_eq!(user.role, Role::Owner);
        assert_eq!(user.phone, "+91 1");
    }

    #[test]
    fn restore_adopts_persisted_identity() {
        let mut first = session();
        let user = first.login("admin@demo.com", "admin123").unwrap();
        let storage = first.storage().clone();

        let second = Session::restored(storage, DemoAuthenticator::new());
        assert!(second.is_authenticated());
        assert_eq!(second.user(), Some(&user));
    }

    #[test]
    fn restore_with_empty_storage_is_unauthenticated() {
        let mut s = session();
        assert!(s.restore().is_none());
        assert!(!s.is_authenticated());
    }

    #[test]
    fn restore_requires_both_entries() {
        let mut storage = MemoryStorage::new();
        storage.set_item(USER_KEY, r#"{"id":1,"email":"a@b.c","name":"A"}"#).unwrap();
        let s = Session::restored(storage, DemoAuthenticator::new());
        assert!(!s.is_authenticated());
    }

    #[test]
    fn restore_fails_closed_on_malformed_identity() {
        let mut storage = MemoryStorage::new();
        storage.set_item(TOKEN_KEY, DEMO_SESSION_TOKEN).unwrap();
        storage.set_item(USER_KEY, "{not json").unwrap();

        let s = Session::restored(storage, DemoAuthenticator::new());
        assert!(!s.is_authenticated());
        assert!(s.storage().is_empty());
    }

    #[test]
    fn storage_failure_is_reported_and_not_authenticated() {
        let mut s = Session::new(ReadOnlyStorage, DemoAuthenticator::new());
        let err = s.login("user@demo.com", "user123").unwrap_err();
        assert!(matches!(err, BookMyBoxError::Storage(_)));
        assert!(!s.is_authenticated());
        assert!(s.error().unwrap().contains("quota exceeded"));
    }
}
