mod in_memory_store;

pub use self::in_memory_store::*;
