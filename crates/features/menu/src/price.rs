//! Prices are stored as integer minor units (cents) together with a currency, and only turned
//! into text at the edge.

use crate::error::MenuError;
use brigade_kernel::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Currencies the restaurants bill in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    #[serde(rename = "EUR")]
    #[strum(serialize = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    #[strum(serialize = "USD")]
    Usd,
    #[serde(rename = "GBP")]
    #[strum(serialize = "GBP")]
    Gbp,
    #[serde(rename = "CHF")]
    #[strum(serialize = "CHF")]
    Chf,
    #[serde(rename = "UAH")]
    #[strum(serialize = "UAH")]
    Uah,
}

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Chf => "CHF",
            Self::Uah => "UAH",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Usd => "$",
            Self::Gbp => "£",
            Self::Chf => "CHF",
            Self::Uah => "₴",
        }
    }

    /// Parses an ISO code, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`MenuError::Currency`] for codes outside the supported set.
    pub fn parse(code: &str) -> Result<Self, MenuError> {
        Self::from_str(code.trim()).map_err(|source| MenuError::Currency {
            source,
            context: Some(format!("'{}'", code.trim()).into()),
        })
    }
}

/// An amount of money in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    pub minor: i64,
    pub currency: Currency,
}

impl Price {
    #[must_use]
    pub const fn new(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }
}

struct NumberStyle {
    group: &'static str,
    decimal: char,
    symbol_first: bool,
}

const fn style(locale: Locale) -> NumberStyle {
    match locale {
        Locale::En => NumberStyle { group: ",", decimal: '.', symbol_first: true },
        Locale::De => NumberStyle { group: ".", decimal: ',', symbol_first: false },
        Locale::Fr | Locale::Uk => NumberStyle { group: " ", decimal: ',', symbol_first: false },
    }
}

/// Renders `price` the way `locale` writes money: grouped thousands, two decimals, currency
/// symbol in front (`en`) or behind (`de`, `fr`, `uk`).
///
/// ```rust
/// use brigade_kernel::i18n::Locale;
/// use brigade_menu::{Currency, Price, format_price};
///
/// assert_eq!(format_price(Price::new(123_450, Currency::Eur), Locale::En), "€1,234.50");
/// assert_eq!(format_price(Price::new(123_450, Currency::Eur), Locale::De), "1.234,50 €");
/// ```
#[must_use]
pub fn format_price(price: Price, locale: Locale) -> String {
    let style = style(locale);
    let abs = price.minor.unsigned_abs();
    let number = format!("{}{}{:02}", group_digits(abs / 100, style.group), style.decimal, abs % 100);

    let symbol = price.currency.symbol();
    let mut out = String::with_capacity(number.len() + symbol.len() + 2);
    if price.minor < 0 {
        out.push('-');
    }
    if style.symbol_first {
        out.push_str(symbol);
        if symbol.chars().all(char::is_alphabetic) {
            out.push(' ');
        }
        out.push_str(&number);
    } else {
        out.push_str(&number);
        out.push(' ');
        out.push_str(symbol);
    }
    out
}

fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Parses a price typed into a form field (`"12"`, `"12.5"`, `"-0,99"`) into minor units.
///
/// Either `.` or `,` is accepted as the decimal separator; grouping separators are not.
///
/// # Errors
/// Returns [`MenuError::InvalidPrice`] for empty input, non-digits, more than two fractional
/// digits, or amounts that do not fit in `i64` minor units.
pub fn parse_price(text: &str) -> Result<i64, MenuError> {
    let invalid = |message: &'static str| MenuError::InvalidPrice {
        message: message.into(),
        context: Some(format!("'{text}'").into()),
    };

    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (whole, fraction) = match unsigned.split_once(['.', ',']) {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };

    if whole.is_empty() {
        return Err(invalid("missing whole amount"));
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid("only digits and one decimal separator are allowed"));
    }
    if fraction.len() > 2 {
        return Err(invalid("at most two decimal places are allowed"));
    }

    let whole: i64 = whole.parse().map_err(|_| invalid("amount is too large"))?;
    let cents: i64 = match fraction.len() {
        0 => 0,
        1 => i64::from(fraction.as_bytes()[0] - b'0') * 10,
        _ => i64::from(fraction.as_bytes()[0] - b'0') * 10 + i64::from(fraction.as_bytes()[1] - b'0'),
    };

    let minor = whole
        .checked_mul(100)
        .and_then(|m| m.checked_add(cents))
        .ok_or_else(|| invalid("amount is too large"))?;

    Ok(if negative { -minor } else { minor })
}
