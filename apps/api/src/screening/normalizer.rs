//! Normalizer — turns raw resume text into the cleaned string fed to the classifier.
//!
//! Rules run in a fixed order; later rules rely on punctuation that earlier rules
//! still see (a hashtag is only recognisable while its `#` is present).

use once_cell::sync::Lazy;
use regex::Regex;

/// `scheme://…` runs and anything starting with `http`.
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z][A-Za-z0-9+.\-]*://\S*|http\S+").expect("URL pattern is valid")
});

/// Maximal runs of ASCII letters and digits; `RT` and `cc` runs are dropped.
static ASCII_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9]+").expect("word pattern is valid"));

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#\S+").expect("hashtag pattern is valid"));

static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@\S+").expect("mention pattern is valid"));

static PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"[!"#$%&'()*+,\-./:;<=>?@\[\]^_`{|}~]"##).expect("punctuation pattern is valid")
});

/// Everything that is not printable ASCII, control characters included.
static NON_PRINTABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\x20-\x7E]").expect("ascii pattern is valid"));

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

const RETWEET_TOKENS: &[&str] = &["RT", "cc"];

/// Cleans `text` for classification.
///
/// Output is printable ASCII with single spaces between tokens. Characters outside
/// the punctuation set (such as `\`) are kept. Never fails; empty input yields an
/// empty string.
pub fn normalize(text: &str) -> String {
    let cleaned = URL_RE.replace_all(text, " ");
    let cleaned = strip_retweet_tokens(&cleaned);
    let cleaned = HASHTAG_RE.replace_all(&cleaned, " ");
    let cleaned = MENTION_RE.replace_all(&cleaned, " ");
    let cleaned = PUNCTUATION_RE.replace_all(&cleaned, " ");
    let cleaned = NON_PRINTABLE_RE.replace_all(&cleaned, " ");
    let cleaned = WHITESPACE_RE.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}

/// Replaces standalone `RT` / `cc` tokens (case-sensitive) with a space.
///
/// Boundaries are anything outside `[A-Za-z0-9]`, so `RT_x` and `éRT` both lose
/// their `RT`. Later rules turn those neighbours into spaces and would otherwise
/// expose a fresh standalone token on a second pass.
fn strip_retweet_tokens(text: &str) -> String {
    ASCII_WORD_RE
        .replace_all(text, |caps: &regex::Captures| {
            let token = &caps[0];
            if RETWEET_TOKENS.contains(&token) {
                " ".to_string()
            } else {
                token.to_string()
            }
        })
        .into_owned()
}
