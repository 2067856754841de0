pub mod env;
pub mod settings;

pub use env::EnvSnapshot;
pub use settings::{CompletionConfig, LoggingConfig, ServerConfig, Settings};
