use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Articles dropped from the start of a title
const LEADING_ARTICLES: &[&str] = &["the", "a", "an"];

/// Canonicalizes titles and answers so they can be compared.
///
/// One pass applies, in order:
/// 1. lowercase
/// 2. strip one leading article (`the`, `a`, `an`) and the whitespace after it
/// 3. drop everything except ASCII word characters and whitespace
/// 4. collapse whitespace runs to a single space
/// 5. trim
///
/// The pass is repeated until the output stops changing, so normalizing an
/// already-normalized string is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    /// Decompose accented letters and keep the base letter (`é` → `e`)
    pub fold_diacritics: bool,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diacritic_folding() -> Self {
        Self {
            fold_diacritics: true,
        }
    }

    pub fn normalize(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        let mut current = if self.fold_diacritics {
            fold_diacritics(input)
        } else {
            input.to_string()
        };

        loop {
            let next = single_pass(&current);
            if next == current {
                return next;
            }
            current = next;
        }
    }
}

/// Normalize with default settings
pub fn normalize(input: &str) -> String {
    Normalizer::new().normalize(input)
}

fn fold_diacritics(input: &str) -> String {
    input.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

fn single_pass(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped = strip_leading_article(&lowered);

    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            pending_space = true;
        } else if is_word_char(c) {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
    }
    out
}

/// Strips `article` + at least one whitespace char, only at position 0
fn strip_leading_article(s: &str) -> &str {
    for article in LEADING_ARTICLES {
        if let Some(rest) = s.strip_prefix(article) {
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start_matches(char::is_whitespace);
            }
        }
    }
    s
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
