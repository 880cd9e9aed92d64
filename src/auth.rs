use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("that username is already registered")]
    DuplicateUser,
    #[error("username and password must not be empty")]
    InvalidInput,
    #[error("password confirmation does not match")]
    Mismatch,
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Explicit sign-in state, handed to the handlers that gate on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Flat-file mapping of username to password digest. The file is read fully
/// and rewritten fully on every mutation; keys stay sorted, and an
/// untouched store round-trips byte-identically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialStore {
    users: BTreeMap<String, String>,
}

impl CredentialStore {
    /// Reads the credential file. A missing file is an empty store.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read credential file {}", path.display()))?;
        let users: BTreeMap<String, String> = serde_json::from_str(&contents)
            .with_context(|| format!("credential file {} is not a JSON object", path.display()))?;

        Ok(Self { users })
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let contents = serde_json::to_string_pretty(&self.users)?;
        std::fs::write(path, contents)
            .with_context(|| format!("failed to write credential file {}", path.display()))?;
        Ok(())
    }

    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        confirm: &str,
    ) -> Result<(), AuthError> {
        if self.users.contains_key(username) {
            return Err(AuthError::DuplicateUser);
        }
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInput);
        }
        if password != confirm {
            return Err(AuthError::Mismatch);
        }

        self.users
            .insert(username.to_string(), hash_password(password));
        Ok(())
    }

    // Unknown user and wrong password return the same error.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        match self.users.get(username) {
            Some(stored) if *stored == hash_password(password) => Ok(Session {
                user: Some(username.to_string()),
            }),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Unsalted digest, matching the legacy credential file format.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_lowercase_hex_sha256() {
        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn register_then_authenticate_succeeds() {
        let mut store = CredentialStore::default();
        store.register("frontdesk", "s3cret", "s3cret").expect("register");

        let session = store.authenticate("frontdesk", "s3cret").expect("sign in");
        assert_eq!(session.user.as_deref(), Some("frontdesk"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn register_validates_input() {
        let mut store = CredentialStore::default();
        store.register("frontdesk", "s3cret", "s3cret").expect("register");

        assert_eq!(
            store.register("frontdesk", "other", "other"),
            Err(AuthError::DuplicateUser)
        );
        assert_eq!(store.register("", "s3cret", "s3cret"), Err(AuthError::InvalidInput));
        assert_eq!(store.register("nurse", "", ""), Err(AuthError::InvalidInput));
        assert_eq!(
            store.register("nurse", "s3cret", "s3cre7"),
            Err(AuthError::Mismatch)
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_user_and_wrong_password_fail_alike() {
        let mut store = CredentialStore::default();
        store.register("frontdesk", "s3cret", "s3cret").expect("register");

        assert_eq!(
            store.authenticate("nobody", "s3cret"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            store.authenticate("frontdesk", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn missing_file_loads_as_an_empty_store() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = CredentialStore::load(&dir.path().join("users.json")).expect("load");
        assert!(store.is_empty());
    }

    #[test]
    fn untouched_store_round_trips_byte_identically() {
        let dir = tempfile::tempdir().expect("temp dir");
        let first = dir.path().join("users.json");
        let second = dir.path().join("users-copy.json");

        let mut store = CredentialStore::default();
        store.register("frontdesk", "s3cret", "s3cret").expect("register");
        store.register("admin", "hunter2", "hunter2").expect("register");
        store.save(&first).expect("save");

        let reloaded = CredentialStore::load(&first).expect("load");
        reloaded.save(&second).expect("save copy");

        let original = std::fs::read(&first).expect("read original");
        let copy = std::fs::read(&second).expect("read copy");
        assert_eq!(original, copy);
        assert_eq!(store, reloaded);
    }
}
