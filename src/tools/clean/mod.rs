mod utils;

pub use utils::{normalize_language_punct, normalize_quotes, normalize_whitespace, strip_utm_params};

use crate::types::{ChangeKind, CleanOutcome, Options, Summary};
use tracing::debug;

/// Clean pasted text.
///
/// Performs the following operations in order:
/// 1. Normalize whitespace (collapse runs, trim lines, at most one blank line)
/// 2. Replace typographic quotes (`‘’“”` → `'` `"`)
/// 3. Strip `utm_*` query parameters from URLs
/// 4. Normalize language punctuation (only with `language_mode`)
///
/// The summary is only filled in when `summary_mode` is set.
///
/// # Examples
/// ```
/// use clipclean::tools::clean::clean;
/// use clipclean::{ChangeKind, Options};
///
/// let opts = Options::new().with_summary(true);
/// let out = clean("Read \u{201C}this\u{201D}:   https://x.com/p?utm_source=a", &opts);
/// assert_eq!(out.text, "Read \"this\": https://x.com/p");
/// assert_eq!(out.summary.count(ChangeKind::Quotes), 2);
/// assert_eq!(out.summary.count(ChangeKind::UtmParams), 1);
/// ```
pub fn clean(text: &str, opts: &Options) -> CleanOutcome {
    let mut summary = Summary::new();
    let mut note = |kind: ChangeKind, count: usize| {
        debug!(pass = kind.label(), count, "pass applied");
        if opts.summary_mode {
            summary.record(kind, count);
        }
    };

    // Step 1: Normalize whitespace
    let (result, count) = normalize_whitespace(text);
    note(ChangeKind::Whitespace, count);

    // Step 2: Normalize quotes
    let (result, count) = normalize_quotes(&result);
    note(ChangeKind::Quotes, count);

    // Step 3: Strip UTM parameters
    let (mut result, count) = strip_utm_params(&result);
    note(ChangeKind::UtmParams, count);

    // Step 4: Language punctuation
    if opts.language_mode {
        let (punct, count) = normalize_language_punct(&result);
        note(ChangeKind::LanguagePunct, count);
        result = punct;
    }

    CleanOutcome {
        text: result,
        summary,
    }
}

/// Clean text and return only the cleaned string.
///
/// # Examples
/// ```
/// use clipclean::tools::clean::clean_text;
/// use clipclean::Options;
///
/// let opts = Options::new().with_language(true);
/// assert_eq!(clean_text("  ¡Hola,   mundo!  ", &opts), "Hola, mundo!");
/// ```
pub fn clean_text(text: &str, opts: &Options) -> String {
    clean(text, opts).text
}

/// Clean all text strings in a collection.
///
/// # Examples
/// ```
/// use clipclean::tools::clean::clean_all;
/// use clipclean::Options;
///
/// let texts = vec![
///     "Text   stuff".to_string(),
///     "It\u{2019}s".to_string(),
/// ];
/// let cleaned = clean_all(&texts, &Options::default());
/// assert_eq!(cleaned[0], "Text stuff");
/// assert_eq!(cleaned[1], "It's");
/// ```
pub fn clean_all(texts: &[String], opts: &Options) -> Vec<String> {
    texts.iter().map(|t| clean_text(t, opts)).collect()
}
