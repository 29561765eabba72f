use crate::models::args::PriceArgs;
use brigade::kernel::i18n::Translator;
use brigade::menu::{Price, format_price};

#[must_use]
pub fn price(args: &PriceArgs, translator: &Translator) -> String {
    let locale = args.locale.unwrap_or_else(|| translator.locale());
    format_price(Price::new(args.minor, args.currency), locale)
}
