use std::borrow::Cow;

/// Errors raised while loading configuration or translation catalogs.
#[brigade_derive::brigade_error]
pub enum KernelError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Catalog I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Catalog is not valid JSON{}: {source}", format_context(.context))]
    Serde { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The catalog parsed but does not have the expected shape.
    #[error("Invalid catalog{}: {message}", format_context(.context))]
    Catalog { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal kernel error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
