//! Credential checking behind a swappable trait
//!
//! `DemoAuthenticator` is the development fixture: three fixed accounts,
//! plain-text comparison, no network. A real backend implements
//! `Authenticator` and drops in without touching the session or the UI.

use chrono::Utc;

use crate::{BookMyBoxError, Credentials, Result, Role, SignupProfile, UserIdentity};

/// Message returned for any failed login. Wrong password and unknown email
/// are deliberately indistinguishable.
pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Invalid credentials. Use demo accounts: user@demo.com/user123, owner@demo.com/owner123, admin@demo.com/admin123";

/// Opaque token persisted alongside the identity
pub const DEMO_SESSION_TOKEN: &str = "demo-jwt-token";

pub trait Authenticator {
    /// Resolve credentials to an identity
    fn authenticate(&self, credentials: &Credentials) -> Result<UserIdentity>;

    /// Create an identity for a new account
    fn register(&self, profile: &SignupProfile) -> Result<UserIdentity>;

    /// Token stored next to the identity after a successful login or signup
    fn session_token(&self, _user: &UserIdentity) -> String {
        DEMO_SESSION_TOKEN.to_string()
    }
}

/// One fixed demo account
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub email: &'static str,
    pub password: &'static str,
    pub identity: UserIdentity,
}

/// Quick-fill hint shown on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCredential {
    pub role: Role,
    pub email: &'static str,
    pub password: &'static str,
}

#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    records: Vec<CredentialRecord>,
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoAuthenticator {
    pub fn new() -> Self {
        let records = vec![
            CredentialRecord {
                email: "user@demo.com",
                password: "user123",
                identity: UserIdentity {
                    id: 1,
                    email: "user@demo.com".to_string(),
                    name: "John Player".to_string(),
                    role: Role::User,
                    phone: "+91 98765 43210".to_string(),
                    location: "Mumbai, Maharashtra".to_string(),
                    avatar: None,
                    business_name: None,
                    total_boxes: None,
                    total_revenue: None,
                    permissions: Vec::new(),
                },
            },
            CredentialRecord {
                email: "owner@demo.com",
                password: "owner123",
                identity: UserIdentity {
                    id: 2,
                    email: "owner@demo.com".to_string(),
                    name: "Sarah Owner".to_string(),
                    role: Role::Owner,
                    phone: "+91 98765 43211".to_string(),
                    location: "Delhi, NCR".to_string(),
                    avatar: None,
                    business_name: Some("Elite Sports Complex".to_string()),
                    total_boxes: Some(3),
                    total_revenue: Some(125_000),
                    permissions: Vec::new(),
                },
            },
            CredentialRecord {
                email: "admin@demo.com",
                password: "admin123",
                identity: UserIdentity {
                    id: 3,
                    email: "admin@demo.com".to_string(),
                    name: "Mike Admin".to_string(),
                    role: Role::Admin,
                    phone: "+91 98765 43212".to_string(),
                    location: "Bangalore, Karnataka".to_string(),
                    avatar: None,
                    business_name: None,
                    total_boxes: None,
                    total_revenue: None,
                    permissions: vec!["all".to_string()],
                },
            },
        ];
        Self { records }
    }

    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }

    pub fn demo_credentials(&self) -> Vec<DemoCredential> {
        self.records
            .iter()
            .map(|r| DemoCredential {
                role: r.identity.role,
                email: r.email,
                password: r.password,
            })
            .collect()
    }
}

impl Authenticator for DemoAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<UserIdentity> {
        self.records
            .iter()
            .find(|r| r.email == credentials.email && r.password == credentials.password)
            .map(|r| r.identity.clone())
            .ok_or_else(|| BookMyBoxError::InvalidCredentials(INVALID_CREDENTIALS_MESSAGE.to_string()))
    }

    fn register(&self, profile: &SignupProfile) -> Result<UserIdentity> {
        // Local-only stand-in: no uniqueness check, nothing is created remotely.
        Ok(UserIdentity {
            id: Utc::now().timestamp_millis(),
            email: profile.email.clone(),
            name: profile.name.clone(),
            role: profile.role.unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
            location: profile.location.clone().unwrap_or_default(),
            avatar: None,
            business_name: None,
            total_boxes: None,
            total_revenue: None,
            permissions: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_sensitive() {
        let auth = DemoAuthenticator::new();
        assert!(auth.authenticate(&Credentials::new("user@demo.com", "user123")).is_ok());
        assert!(auth.authenticate(&Credentials::new("USER@demo.com", "user123")).is_err());
        assert!(auth.authenticate(&Credentials::new("user@demo.com", "USER123")).is_err());
    }

    #[test]
    fn wrong_password_and_unknown_email_look_the_same() {
        let auth = DemoAuthenticator::new();
        let wrong_password = auth.authenticate(&Credentials::new("owner@demo.com", "nope")).unwrap_err();
        let unknown = auth.authenticate(&Credentials::new("ghost@demo.com", "owner123")).unwrap_err();
        assert_eq!(wrong_password, unknown);
    }

    #[test]
    fn passwords_do_not_cross_accounts() {
        let auth = DemoAuthenticator::new();
        assert!(auth.authenticate(&Credentials::new("admin@demo.com", "user123")).is_err());
    }

    #[test]
    fn demo_credentials_cover_every_role() {
        let creds = DemoAuthenticator::new().demo_credentials();
        let roles: Vec<Role> = creds.iter().map(|c| c.role).collect();
        assert_eq!(roles, Role::ALL.to_vec());
    }

    #[test]
    fn register_fills_defaults() {
        let user = DemoAuthenticator::new()
            .register(&SignupProfile {
                email: "new@x.io".to_string(),
                name: "New Person".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.phone, "");
        assert_eq!(user.location, "");
        assert!(user.id > 0);
    }
}
