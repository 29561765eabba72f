use brigade_derive::brigade_error;
use std::borrow::Cow;

#[brigade_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<std::borrow::Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i64, DemoError> {
    raw.parse::<i64>().context("parsing demo value")
}

fn main() {
    let _ = parse("42");
    let _: DemoError = "boom".into();
}
