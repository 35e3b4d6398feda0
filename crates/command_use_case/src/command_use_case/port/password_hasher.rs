use std::sync::Arc;

use write_model::value_object::PasswordDigest;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

/// One-way hash applied to plaintext passwords before they are stored.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait PasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<PasswordDigest, Error>;
}

pub trait HasPasswordHasher {
    fn password_hasher(&self) -> Arc<dyn PasswordHasher + Send + Sync>;
}
