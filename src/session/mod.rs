//! Session store and mock credential directory.
//!
//! Credentials are a fixed, compiled-in table; this is demo authentication,
//! not a security boundary. Password comparison is still constant-time to
//! keep the check shape honest.

use subtle::ConstantTimeEq;

use crate::errors::AppError;
use crate::models::{Role, User};
use crate::store::CollectionStore;

/// Reserved storage key for the persisted session.
pub const SESSION_KEY: &str = "communityUser";

/// One entry in the static credential directory.
pub struct Credential {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// The compiled-in credential directory. Not user-editable at runtime.
pub const DIRECTORY: &[Credential] = &[
    Credential {
        id: "1",
        name: "Utkarsh Pandey",
        email: "utkarshpandey.up.2004@gmail.com",
        password: "uttu123",
        role: Role::Admin,
    },
    Credential {
        id: "2",
        name: "Sujal Kumar",
        email: "sujalkumar@gmail.com",
        password: "suji123",
        role: Role::User,
    },
];

/// Holds the currently authenticated identity, persisted under
/// [`SESSION_KEY`] so it survives process restarts.
pub struct SessionStore {
    store: CollectionStore,
    current: Option<User>,
}

impl SessionStore {
    /// Initialize the session store, reloading a previously persisted
    /// session if one is present.
    ///
    /// A persisted, deserializable session is trusted as-is until explicit
    /// logout; corrupt session data is treated as "no session".
    pub fn load(store: CollectionStore) -> Result<Self, AppError> {
        let current = store.load::<User>(SESSION_KEY)?;
        if let Some(user) = &current {
            tracing::info!(email = %user.email, "Restored persisted session");
        }
        Ok(Self { store, current })
    }

    /// The currently authenticated identity, if any.
    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Validate credentials against the directory and start a session.
    ///
    /// On no match, returns a generic rejection without mutating any state.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AppError> {
        let entry = DIRECTORY
            .iter()
            .find(|c| c.email == email && constant_time_compare(password, c.password))
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        let user = User {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            email: entry.email.to_string(),
            role: entry.role,
            is_authenticated: true,
        };

        self.store.set(SESSION_KEY, &user)?;
        tracing::info!(email = %user.email, role = user.role.as_str(), "Login succeeded");
        self.current = Some(user.clone());
        Ok(user)
    }

    /// End the session, clearing memory and storage. Idempotent: logging out
    /// with no active session is a no-op, not an error.
    pub fn logout(&mut self) -> Result<(), AppError> {
        self.current = None;
        self.store.remove(SESSION_KEY)
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("suji123", "suji123"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("suji123", "suji124"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-password"));
    }

    #[test]
    fn test_constant_time_compare_empty() {
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("", "not-empty"));
    }

    #[test]
    fn test_directory_ids_are_unique() {
        for (i, a) in DIRECTORY.iter().enumerate() {
            for b in &DIRECTORY[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.email, b.email);
            }
        }
    }
}
