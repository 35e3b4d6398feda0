mod password_hasher;

pub use self::password_hasher::*;
