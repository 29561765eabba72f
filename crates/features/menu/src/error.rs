use std::borrow::Cow;

/// Error types specific to the menu feature.
#[brigade_derive::brigade_error]
pub enum MenuError {
    /// Text that does not describe an amount of money.
    #[error("Invalid price{}: {message}", format_context(.context))]
    InvalidPrice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown currency{}: {source}", format_context(.context))]
    Currency { source: strum::ParseError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal menu error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
