use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Quote codes tried as suffixes, in priority order, when a symbol has neither a
/// separator nor the six-letter FX shape.
pub const KNOWN_QUOTES: &[&str] = &[
    "USD", "EUR", "JPY", "GBP", "AUD", "CAD", "CHF", "NZD", "USDT", "BTC", "ETH",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedPair {
    pub base: String,
    pub quote: String,
}

impl NormalizedPair {
    fn new(base: &str, quote: &str) -> Self {
        Self {
            base: base.to_string(),
            quote: quote.to_string(),
        }
    }
}

impl fmt::Display for NormalizedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

static SEPARATED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z0-9]+)[/\-\s]([A-Z0-9]+)$").expect("valid pair pattern"));
static NON_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Z0-9]").expect("valid code pattern"));

/// Splits a raw symbol into base and quote codes. Returns `None` when no rule in
/// the chain (separator, 3/3 split, known-quote suffix) applies.
pub fn normalize_pair(raw: &str) -> Option<NormalizedPair> {
    let pair = raw.trim().to_uppercase();

    if let Some(caps) = SEPARATED.captures(&pair) {
        return Some(NormalizedPair::new(&caps[1], &caps[2]));
    }

    let clean = strip_to_code(&pair);
    if clean.len() == 6 {
        return Some(NormalizedPair::new(&clean[..3], &clean[3..]));
    }

    KNOWN_QUOTES
        .iter()
        .find(|q| clean.len() > q.len() && clean.ends_with(*q))
        .map(|q| NormalizedPair::new(&clean[..clean.len() - q.len()], q))
}

/// Grouping key for a symbol: uppercased, everything but ASCII letters and digits
/// removed. "eur/usd" and "EURUSD" share a key.
pub fn pair_key(raw: &str) -> String {
    strip_to_code(&raw.to_uppercase())
}

fn strip_to_code(pair: &str) -> String {
    NON_CODE.replace_all(pair, "").into_owned()
}
