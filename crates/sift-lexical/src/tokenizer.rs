//! Text analysis: lowercase word tokens, stopword removal, n-grams.

use crate::stopwords::is_stopword;

/// Split text into lowercase word tokens of at least two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| s.chars().count() >= 2)
        .map(|s| s.to_lowercase())
        .collect()
}

/// Full analyzer: tokenize, drop stopwords, then emit every n-gram with
/// `ngram_min <= n <= ngram_max` over the surviving tokens, joined by a space.
pub fn analyze(text: &str, ngram_min: usize, ngram_max: usize) -> Vec<String> {
    let tokens: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|t| !is_stopword(t))
        .collect();

    let mut terms = Vec::new();
    for n in ngram_min.max(1)..=ngram_max {
        if n > tokens.len() {
            break;
        }
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_drops_short_tokens() {
        assert_eq!(
            tokenize("Install Python 3 on Windows!"),
            vec!["install", "python", "on", "windows"]
        );
    }

    #[test]
    fn tokenize_keeps_underscores() {
        assert_eq!(tokenize("set MAX_RETRIES"), vec!["set", "max_retries"]);
    }

    #[test]
    fn analyze_removes_stopwords_before_ngrams() {
        let terms = analyze("install python on windows", 1, 2);
        assert_eq!(
            terms,
            vec![
                "install",
                "python",
                "windows",
                "install python",
                "python windows"
            ]
        );
    }

    #[test]
    fn analyze_trigrams() {
        let terms = analyze("access control list", 3, 3);
        assert_eq!(terms, vec!["access control list"]);
    }

    #[test]
    fn analyze_stopword_only_text_is_empty() {
        assert!(analyze("the is a", 1, 3).is_empty());
    }
}
