//! Line tokenizer for the conch interactive shell.
//!
//! This crate splits one entered line into a sequence of tokens. Maximal
//! runs of non-whitespace, non-quote characters form one token each; a
//! double- or single-quoted span forms one token whose value is the span's
//! interior with the quotes stripped. Quote styles cannot be intermixed
//! within one span (`"x y"` and `'x y'` are spans, `"x y'` is not).
//!
//! # Example
//!
//! ```rust
//! use conch_lexer::tokenize;
//!
//! let tokens: Vec<_> = tokenize(r#"greet --name "Ada Lovelace" --n 2"#).collect();
//! assert_eq!(tokens, ["greet", "--name", "Ada Lovelace", "--n", "2"]);
//! ```
//!
//! # Permissive quoting
//!
//! Tokenizing never fails. An unmatched quote character is skipped and
//! scanning resumes at the next character, so malformed input degrades to
//! plain character runs instead of producing a parse error:
//!
//! ```rust
//! use conch_lexer::tokenize;
//!
//! let tokens: Vec<_> = tokenize(r#""unterminated span"#).collect();
//! assert_eq!(tokens, ["unterminated", "span"]);
//! ```
//!
//! An empty input line yields an empty sequence, and an empty quoted span
//! (`""` or `''`) yields one empty token.

/// Tokenizes a line into a lazy sequence of tokens.
///
/// The returned iterator borrows from `line` and yields sub-slices; quoted
/// interiors are returned without copying. The sequence is finite and, like
/// any iterator, consumed as it is advanced.
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens { src: line, pos: 0 }
}

/// Iterator over the tokens of one line. Created by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let rest = &self.src[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();

            let mut chars = trimmed.chars();
            let first = chars.next()?;

            if first == '"' || first == '\'' {
                let interior = chars.as_str();
                match interior.find(first) {
                    Some(close) => {
                        // Quote bytes: one opening, one closing.
                        self.pos += close + 2;
                        return Some(&interior[..close]);
                    }
                    None => {
                        // Unmatched quote: drop it and keep scanning.
                        self.pos += first.len_utf8();
                        continue;
                    }
                }
            }

            let end = trimmed
                .find(|c: char| c.is_whitespace() || c == '"' || c == '\'')
                .unwrap_or(trimmed.len());
            self.pos += end;
            return Some(&trimmed[..end]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(line: &str) -> Vec<&str> {
        tokenize(line).collect()
    }

    #[test]
    fn test_empty_line_yields_no_tokens() {
        assert!(all("").is_empty());
        assert!(all("   \t  ").is_empty());
    }

    #[test]
    fn test_whitespace_delimited_runs() {
        assert_eq!(all("push a b c"), ["push", "a", "b", "c"]);
        assert_eq!(all("  spaced\tout\n"), ["spaced", "out"]);
    }

    #[test]
    fn test_marker_tokens_pass_through() {
        assert_eq!(
            all(r#"cmd --a 1 2 --b "x y" z"#),
            ["cmd", "--a", "1", "2", "--b", "x y", "z"]
        );
    }

    #[test]
    fn test_double_quoted_span() {
        assert_eq!(all(r#"say "hello world""#), ["say", "hello world"]);
    }

    #[test]
    fn test_single_quoted_span() {
        assert_eq!(all("say 'hello world'"), ["say", "hello world"]);
    }

    #[test]
    fn test_quotes_do_not_intermix() {
        // A double-quoted span may contain single quotes and vice versa.
        assert_eq!(all(r#""it's fine""#), ["it's fine"]);
        assert_eq!(all(r#"'she said "hi"'"#), [r#"she said "hi""#]);
    }

    #[test]
    fn test_empty_quoted_span_is_one_empty_token() {
        assert_eq!(all(r#"set key """#), ["set", "key", ""]);
        assert_eq!(all("set key ''"), ["set", "key", ""]);
    }

    #[test]
    fn test_unterminated_quote_falls_back_to_runs() {
        assert_eq!(all(r#""a b"#), ["a", "b"]);
        assert_eq!(all("don't"), ["don", "t"]);
    }

    #[test]
    fn test_quote_terminates_a_run() {
        assert_eq!(all(r#"a"bc""#), ["a", "bc"]);
        assert_eq!(all("ab'c d'e"), ["ab", "c d", "e"]);
    }

    #[test]
    fn test_adjacent_quoted_spans() {
        assert_eq!(all(r#""a""b""#), ["a", "b"]);
    }

    #[test]
    fn test_unicode_content() {
        assert_eq!(all("écho \"héllo wörld\""), ["écho", "héllo wörld"]);
    }
}
