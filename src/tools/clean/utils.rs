//! Private helper functions for text cleaning
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;
use url::Url;

/// URL candidates: an `http://` or `https://` scheme followed by printable ASCII
/// or non-ASCII letters and digits. Whitespace and non-ASCII punctuation or
/// symbols (`» … — 」`) end the candidate since they never appear raw in a URL.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:https?)://(?:[\x21-\x7E]|[^\x00-\x7F\s\p{P}\p{S}])+").expect("valid regex")
});

/// Sentence punctuation that ends a URL candidate rather than belonging to it.
const TRAILING_PUNCT: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"'];

/// Closing brackets and their openers; a closer is trimmed only when unbalanced.
const BRACKETS: &[(char, char)] = &[(')', '('), (']', '['), ('}', '{'), ('>', '<')];

/// Marks handled in language mode. An empty replacement means the mark is deleted.
const LANGUAGE_PUNCT: &[(char, &str)] = &[
    ('¿', ""),
    ('¡', ""),
    ('«', "\""),
    ('»', "\""),
    ('—', "-"),
    ('–', "-"),
    ('…', "..."),
];

/// Characters after which an inverted mark opens a word and may be deleted.
const WORD_OPENERS: &[char] = &['(', '[', '{', '"', '\'', '-'];

/// Normalize whitespace, keeping paragraphs.
///
/// - `\r\n` and lone `\r` → `\n`
/// - Runs of horizontal whitespace → single space
/// - Leading/trailing whitespace trimmed on every line
/// - Two or more blank lines → one blank line
/// - Blank lines at either end of the text dropped
///
/// The count is characters removed plus characters rewritten in place
/// (a tab that became a space, a lone `\r` that became `\n`).
pub fn normalize_whitespace(text: &str) -> (String, usize) {
    let lone_cr = text
        .match_indices('\r')
        .filter(|(idx, _)| !text[idx + 1..].starts_with('\n'))
        .count();
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut rewritten = lone_cr;
    let mut out = String::with_capacity(unified.len());
    let mut blank_pending = false;

    for line in unified.split('\n') {
        let line = collapse_line(line, &mut rewritten);
        if line.is_empty() {
            blank_pending = !out.is_empty();
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if blank_pending {
                out.push('\n');
            }
        }
        out.push_str(&line);
        blank_pending = false;
    }

    let removed = text
        .chars()
        .count()
        .saturating_sub(out.chars().count());
    (out, removed + rewritten)
}

/// Collapse horizontal whitespace inside a single line and trim its edges.
fn collapse_line(line: &str, rewritten: &mut usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_run = false;
    let mut run_has_space = false;

    for c in line.chars() {
        if c.is_whitespace() {
            in_run = true;
            run_has_space |= c == ' ';
            continue;
        }
        if in_run && !out.is_empty() {
            out.push(' ');
            if !run_has_space {
                *rewritten += 1;
            }
        }
        in_run = false;
        run_has_space = false;
        out.push(c);
    }

    out
}

/// Replace typographic quotes with ASCII quotes.
///
/// - `‘` `’` → `'`
/// - `“` `”` → `"`
pub fn normalize_quotes(text: &str) -> (String, usize) {
    let mut count = 0;
    let out: String = text
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => {
                count += 1;
                '\''
            }
            '\u{201C}' | '\u{201D}' => {
                count += 1;
                '"'
            }
            other => other,
        })
        .collect();
    (out, count)
}

/// Remove `utm_*` query parameters from every URL in the text.
///
/// URLs that fail to parse, or that carry no UTM parameters, are left
/// byte-for-byte untouched.
pub fn strip_utm_params(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut removed = 0;
    let mut last = 0;

    for span in url_spans(text) {
        if let Some((cleaned, count)) = strip_url(&text[span.clone()]) {
            out.push_str(&text[last..span.start]);
            out.push_str(&cleaned);
            last = span.end;
            removed += count;
        }
    }

    out.push_str(&text[last..]);
    (out, removed)
}

/// Byte ranges of the URLs in `text`: candidates with trailing punctuation
/// excluded that also parse as a `url::Url`.
fn url_spans(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    URL_REGEX.find_iter(text).filter_map(|m| {
        let span = m.start()..m.start() + url_len(m.as_str());
        Url::parse(&text[span.clone()]).ok().map(|_| span)
    })
}

/// Length of the URL inside a candidate once trailing punctuation is excluded.
fn url_len(candidate: &str) -> usize {
    let mut end = candidate.len();

    while let Some(last) = candidate[..end].chars().next_back() {
        let unbalanced = BRACKETS
            .iter()
            .find(|(closer, _)| *closer == last)
            .is_some_and(|(closer, opener)| {
                let head = &candidate[..end];
                head.matches(*opener).count() < head.matches(*closer).count()
            });
        if !TRAILING_PUNCT.contains(&last) && !unbalanced {
            break;
        }
        end -= last.len_utf8();
    }

    end
}

/// Rebuild one URL without its UTM parameters. `None` when nothing was removed.
fn strip_url(url: &str) -> Option<(String, usize)> {
    let (head, fragment) = match url.find('#') {
        Some(idx) => url.split_at(idx),
        None => (url, ""),
    };
    let (base, query) = head.split_once('?')?;

    let params: Vec<&str> = query.split('&').collect();
    let removed = params.iter().filter(|p| is_utm_param(p)).count();
    if removed == 0 {
        return None;
    }

    let kept: Vec<&str> = params
        .into_iter()
        .filter(|p| !p.is_empty() && !is_utm_param(p))
        .collect();

    let mut cleaned = String::with_capacity(url.len());
    cleaned.push_str(base);
    if !kept.is_empty() {
        cleaned.push('?');
        cleaned.push_str(&kept.join("&"));
    }
    cleaned.push_str(fragment);
    Some((cleaned, removed))
}

/// Whether a `key=value` pair has a key starting with `utm_` (any case).
fn is_utm_param(param: &str) -> bool {
    let key = param.split('=').next().unwrap_or(param);
    key.get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("utm_"))
}

/// Normalize language punctuation outside of URLs.
///
/// - `«` `»` → `"`
/// - `—` `–` → `-`
/// - `…` → `...`
/// - `¿` `¡` deleted when they open a word (start of text, after whitespace,
///   an opening bracket or quote, or another deleted mark). A mark standing
///   alone between spaces is kept so no double space is left behind.
///
/// URLs are copied as-is. So is any word that still holds both a scheme and a
/// `utm_` key, since a rewritten `—` could join them into one URL.
pub fn normalize_language_punct(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut count = 0;

    for word in text.split_inclusive(char::is_whitespace) {
        if holds_tracking_link(word) {
            out.push_str(word);
            continue;
        }

        let mut last = 0;
        for span in url_spans(word) {
            let following = word[span.start..].chars().next();
            count += rewrite_punct(&word[last..span.start], following, &mut out);
            out.push_str(&word[span.clone()]);
            last = span.end;
        }
        count += rewrite_punct(&word[last..], None, &mut out);
    }

    (out, count)
}

fn holds_tracking_link(word: &str) -> bool {
    word.contains("://") && word.to_ascii_lowercase().contains("utm_")
}

/// Rewrite one URL-free segment onto `out`, returning the number of marks handled.
/// `following` is the first character after the segment, if any.
fn rewrite_punct(segment: &str, following: Option<char>, out: &mut String) -> usize {
    let mut count = 0;
    let mut chars = segment.chars().peekable();

    while let Some(c) = chars.next() {
        let Some((_, replacement)) = LANGUAGE_PUNCT.iter().find(|(mark, _)| *mark == c) else {
            out.push(c);
            continue;
        };

        if !replacement.is_empty() {
            out.push_str(replacement);
            count += 1;
            continue;
        }

        let next = chars.peek().copied().or(following);
        let opens_word = next.is_some_and(|next| !next.is_whitespace())
            && out
                .chars()
                .next_back()
                .map_or(true, |prev| prev.is_whitespace() || WORD_OPENERS.contains(&prev));
        if opens_word {
            count += 1;
        } else {
            out.push(c);
        }
    }

    count
}
