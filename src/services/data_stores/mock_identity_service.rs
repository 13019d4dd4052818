use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use uuid::Uuid;

use crate::domain::{IdentityError, IdentityService, SignedInUser, UserClaims};

struct MockUser {
    uid: String,
    password: String,
    email_verified: bool,
}

/// In-memory stand-in for the identity provider, used by unit and API
/// tests. Tokens issued by `sign_in` verify successfully afterwards;
/// anything unknown is rejected as invalid.
pub struct MockIdentityService {
    users: Mutex<HashMap<String, MockUser>>,
    tokens: Mutex<HashMap<String, UserClaims>>,
    expired_tokens: Mutex<HashSet<String>>,
    verify_calls: AtomicUsize,
    closed: AtomicBool,
}

impl MockIdentityService {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            tokens: Mutex::new(HashMap::new()),
            expired_tokens: Mutex::new(HashSet::new()),
            verify_calls: AtomicUsize::new(0),
            closed: AtomicBool::new(false),
        }
    }

    pub fn add_user(&mut self, email: &str, password: &str, uid: &str, email_verified: bool) {
        self.users.lock().unwrap().insert(
            email.to_owned(),
            MockUser {
                uid: uid.to_owned(),
                password: password.to_owned(),
                email_verified,
            },
        );
    }

    pub fn add_token(&mut self, raw_token: &str, claims: UserClaims) {
        self.tokens.lock().unwrap().insert(raw_token.to_owned(), claims);
    }

    pub fn add_expired_token(&mut self, raw_token: &str) {
        self.expired_tokens.lock().unwrap().insert(raw_token.to_owned());
    }

    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }

    pub fn was_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Default for MockIdentityService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IdentityService for MockIdentityService {
    async fn verify_token(&self, raw_token: &str) -> Result<UserClaims, IdentityError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);

        if self.expired_tokens.lock().unwrap().contains(raw_token) {
            return Err(IdentityError::TokenExpired);
        }
        self.tokens
            .lock()
            .unwrap()
            .get(raw_token)
            .cloned()
            .ok_or(IdentityError::TokenInvalid)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SignedInUser, IdentityError> {
        let (uid, email_verified) = {
            let users = self.users.lock().unwrap();
            let user = users.get(email).ok_or(IdentityError::UserNotFound)?;
            if user.password != password {
                return Err(IdentityError::InvalidCredentials);
            }
            (user.uid.clone(), user.email_verified)
        };

        let id_token = format!("mock-token-{}", Uuid::new_v4());
        self.tokens.lock().unwrap().insert(
            id_token.clone(),
            UserClaims {
                uid: uid.clone(),
                email: Some(email.to_owned()),
                email_verified,
                issued_at: chrono::Utc::now().timestamp(),
                expires_at: chrono::Utc::now().timestamp() + 3600,
            },
        );

        Ok(SignedInUser {
            uid,
            email: email.to_owned(),
            email_verified,
            id_token,
            expires_in: 3600,
        })
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
