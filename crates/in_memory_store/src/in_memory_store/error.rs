use write_model::value_object::Version;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("already exists ({0})")]
    AlreadyExists(String),
    #[error("not found ({0})")]
    NotFound(String),
    #[error("version mismatch (expected = {expected}, actual = {actual})")]
    VersionMismatch { actual: Version, expected: Version },
}
