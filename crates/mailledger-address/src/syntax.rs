//! Character classes from RFC 5321/5322.

/// `atext`: ALPHA / DIGIT / ``!#$%&'*+-/=?^_`{|}~``
pub const fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '-'
                | '/'
                | '='
                | '?'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
        )
}

/// `qtextSMTP`: %d32-33 / %d35-91 / %d93-126
pub const fn is_qtext(c: char) -> bool {
    matches!(c, ' ' | '!' | '#'..='[' | ']'..='~')
}

/// Second character of a `quoted-pairSMTP`: %d32-126
pub const fn is_quoted_pair_char(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// `Let-dig`: ALPHA / DIGIT
pub const fn is_let_dig(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Returns true if `s` is a `Dot-string`, i.e. can be written without quoting.
pub fn is_dot_string(s: &str) -> bool {
    !s.is_empty()
        && s
            .split('.')
            .all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}
