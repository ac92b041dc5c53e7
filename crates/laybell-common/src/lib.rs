pub mod errors;

pub use errors::{ConfigError, LaybellError};

pub type Result<T> = std::result::Result<T, LaybellError>;
