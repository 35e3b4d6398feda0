use command_use_case::port::password_hasher;
use sha2::{Digest as _, Sha256};
use write_model::value_object::PasswordDigest;

/// Upper bound of the salt length in hex characters (one simple-format UUID).
pub const MAX_SALT_LEN: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("salt length out of range (1..=32): {0}")]
    SaltLength(usize),
}

/// Salted SHA-256 digests in the form `"<salt>$<hex>"`.
///
/// The hex part is `sha256(salt || plaintext)`. A fresh random salt is drawn
/// for every call to `hash`, so hashing the same plaintext twice yields two
/// different digests that both verify.
#[derive(Clone, Debug)]
pub struct Sha256PasswordHasher {
    salt_len: usize,
}

impl Sha256PasswordHasher {
    pub fn new(salt_len: usize) -> Result<Self, Error> {
        if !(1..=MAX_SALT_LEN).contains(&salt_len) {
            return Err(Error::SaltLength(salt_len));
        }
        Ok(Self { salt_len })
    }

    pub fn verify(&self, plaintext: &str, digest: &PasswordDigest) -> bool {
        match digest.as_str().split_once('$') {
            None => false,
            Some((salt, hex)) => hex == digest_hex(salt, plaintext),
        }
    }

    fn salt(&self) -> String {
        uuid::Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(self.salt_len)
            .collect()
    }
}

fn digest_hex(salt: &str, plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

impl command_use_case::port::PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<PasswordDigest, password_hasher::Error> {
        let salt = self.salt();
        let hex = digest_hex(&salt, plaintext);
        Ok(PasswordDigest::new(format!("{}${}", salt, hex)))
    }
}
