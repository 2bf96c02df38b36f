use once_cell::sync::Lazy;
use regex::Regex;

static NON_PHONE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9+]").expect("static pattern"));

/// Normalize a raw phone number for SMS sending: the result starts with '+',
/// contains only digits afterward, and carries Ukraine's country code "38" when
/// no prefix is present.
///
/// The normalization is deliberately narrow: it only shapes the prefix and does
/// not validate digit count or length.
pub fn normalize_phone(phone_number: &str) -> String {
    let mut cleaned = NON_PHONE_CHARS.replace_all(phone_number, "").into_owned();

    // doubled '+' collapses to no prefix at all
    if cleaned.starts_with("++") {
        cleaned = cleaned.trim_start_matches('+').to_string();
    }

    if cleaned.starts_with("+380") {
        cleaned
    } else if cleaned.starts_with("380") {
        format!("+{cleaned}")
    } else if cleaned.starts_with("+38") {
        // rare '+38...' without the 0, preserved verbatim
        cleaned
    } else {
        format!("+38{}", cleaned.trim_start_matches('+'))
    }
}
