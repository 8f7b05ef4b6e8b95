mod settings;

pub use settings::{AuthorizerConfig, LogConfig, LogFormat, Settings};
