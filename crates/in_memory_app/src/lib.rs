mod in_memory_app;

pub use self::in_memory_app::*;
