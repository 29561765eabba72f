use std::borrow::Cow;

/// A specialized [`RecipeError`] enum of this crate.
#[brigade_derive::brigade_error]
pub enum RecipeError {
    /// The API answered with a non-success status.
    #[error("Recipe request failed with status {status}{}", format_context(.context))]
    Status { status: u16, context: Option<Cow<'static, str>> },

    /// The API reported success but sent no recipe.
    #[error("Recipe response had no payload{}", format_context(.context))]
    EmptyPayload { context: Option<Cow<'static, str>> },

    #[error("Recipe JSON is malformed{}: {source}", format_context(.context))]
    Serde { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Failure inside the data source itself (transport, auth, ...).
    #[error("Recipe source error{}: {message}", format_context(.context))]
    Source { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal recipe error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
