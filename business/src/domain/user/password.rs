use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};
use uuid::Uuid;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Salted SHA-256 digest of a password, base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCredential {
    pub salt: String,
    pub digest: String,
}

impl PasswordCredential {
    pub fn hash(password: &str) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = digest(&salt, password);
        Self { salt, digest }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(salt: String, digest: String) -> Self {
        Self { salt, digest }
    }

    pub fn verify(&self, password: &str) -> bool {
        digest(&self.salt, password) == self.digest
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    STANDARD.encode(hasher.finalize())
}
