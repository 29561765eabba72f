#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros used across the Brigade workspace.
//!
//! Only one macro lives here today: [`macro@brigade_error`], which turns a plain enum into the
//! error type every Brigade crate exposes.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! brigade-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(...)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source error.
/// * **Conversions**: Implements `From<Source>` for variants carrying a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
/// * **`format_context`**: Emits a module-private helper used in `#[error(...)]` strings to
///   render an optional context as ` (context)`.
///
/// # Requirements
///
/// 1. Applied to an **enum** with **named-field** variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source error must also carry a `context` field.
/// 4. At most one `#[brigade_error]` enum per module (the helper function is module-scoped).
///
/// # Example
///
/// ```rust,ignore
/// use brigade_derive::brigade_error;
/// use std::borrow::Cow;
///
/// #[brigade_error]
/// pub enum CatalogError {
///     #[error("Catalog I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal catalog error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, CatalogError> {
///     std::fs::read_to_string(path).context("Reading catalog file")
/// }
/// ```
#[proc_macro_attribute]
pub fn brigade_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
