//! Position tracking and token scanning over grid file text.

/// A whitespace-delimited token and the line it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub line: usize,
}

impl Token<'_> {
    /// Section keywords start with a letter or underscore; numbers never do.
    pub fn is_keyword(&self) -> bool {
        self.text
            .bytes()
            .next()
            .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_')
    }
}

/// A byte offset into the input plus the 1-based line at that offset.
///
/// Cheap to copy, so lookahead is done on a copy.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
        }
    }

    /// Line number at the current position.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Returns the rest of the current line without its terminator and moves
    /// to the start of the next line.
    pub fn next_line(&mut self) -> Option<&'a str> {
        if self.is_at_end() {
            return None;
        }

        let rest = &self.text[self.pos..];
        let (line, advance) = match rest.find('\n') {
            Some(end) => {
                self.line += 1;
                (&rest[..end], end + 1)
            }
            None => (rest, rest.len()),
        };
        self.pos += advance;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            if !b.is_ascii_whitespace() {
                break;
            }
            if b == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    /// Consumes and returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        self.skip_whitespace();
        if self.is_at_end() {
            return None;
        }

        let rest = &self.text[self.pos..];
        let len = rest
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(rest.len());
        let token = Token {
            text: &rest[..len],
            line: self.line,
        };
        self.pos += len;
        Some(token)
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&self) -> Option<Token<'a>> {
        let mut lookahead = *self;
        lookahead.next_token()
    }
}

/// Parses a decimal number: optional sign, digits with an optional fraction,
/// and an optional signed exponent. At least one mantissa digit is required,
/// and values too large for an `f64` are rejected rather than becoming infinite.
pub(crate) fn parse_decimal(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let mut i = 0;
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        mantissa_digits += frac_end - (i + 1);
        i = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_end = digits_from(i);
        if exp_end == i {
            return None;
        }
        i = exp_end;
    }

    if i != bytes.len() {
        return None;
    }
    token.parse().ok().filter(|v: &f64| v.is_finite())
}

/// Parses an optionally signed integer, saturating at the `i32` range.
pub(crate) fn parse_integer(token: &str) -> Option<i32> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let saturated = if token.starts_with('-') { i32::MIN } else { i32::MAX };
    Some(token.parse().unwrap_or(saturated))
}

/// Parses an unsigned digit string.
pub(crate) fn parse_index(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Parses a section count: a positive integer without leading zeros.
pub(crate) fn parse_count(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    match bytes.first() {
        Some(b'1'..=b'9') if bytes.iter().all(u8::is_ascii_digit) => token.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_line() {
        let mut cursor = Cursor::new("first\r\nsecond\nthird");
        assert_eq!(cursor.next_line(), Some("first"));
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.next_line(), Some("second"));
        assert_eq!(cursor.next_line(), Some("third"));
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn test_empty_line() {
        let mut cursor = Cursor::new("\nx");
        assert_eq!(cursor.next_line(), Some(""));
        assert_eq!(cursor.next_line(), Some("x"));
    }

    #[test]
    fn test_tokens_track_lines() {
        let mut cursor = Cursor::new("POINTS 4 float\n  0 0\n\n1\n");
        let tokens: Vec<_> = std::iter::from_fn(|| cursor.next_token()).collect();
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 1, 2, 2, 4]);
        assert_eq!(tokens[2].text, "float");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = Cursor::new("  POLYGONS 1 4");
        assert_eq!(cursor.peek_token().map(|t| t.text), Some("POLYGONS"));
        assert_eq!(cursor.next_token().map(|t| t.text), Some("POLYGONS"));
        assert_eq!(cursor.next_token().map(|t| t.text), Some("1"));
    }

    #[test]
    fn test_keyword_detection() {
        let token = |text| Token { text, line: 1 };
        assert!(token("POINT_DATA").is_keyword());
        assert!(token("_x").is_keyword());
        assert!(!token("-1.5").is_keyword());
        assert!(!token(".5").is_keyword());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("0"), Some(0.0));
        assert_eq!(parse_decimal("-12.5"), Some(-12.5));
        assert_eq!(parse_decimal("+3"), Some(3.0));
        assert_eq!(parse_decimal("1."), Some(1.0));
        assert_eq!(parse_decimal(".25"), Some(0.25));
        assert_eq!(parse_decimal("1e3"), Some(1000.0));
        assert_eq!(parse_decimal("2.5E-1"), Some(0.25));
        assert_eq!(parse_decimal("-7e+2"), Some(-700.0));
        assert_eq!(parse_decimal("1e-400"), Some(0.0));
    }

    #[test]
    fn test_parse_decimal_rejects_overflow() {
        assert_eq!(parse_decimal("1e400"), None);
        assert_eq!(parse_decimal("-1e400"), None);
        assert_eq!(parse_decimal(&"9".repeat(400)), None);
    }

    #[test]
    fn test_parse_decimal_rejects() {
        for token in ["", "-", ".", "1.2.3", "1e", "1e+", "e5", "nan", "inf", "1,5", "0x10", "12a"] {
            assert_eq!(parse_decimal(token), None, "accepted '{token}'");
        }
    }

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse_integer("-4"), Some(-4));
        assert_eq!(parse_integer("255"), Some(255));
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_integer("+"), None);
        assert_eq!(parse_integer("3000000000"), Some(i32::MAX));
        assert_eq!(parse_integer("-3000000000"), Some(i32::MIN));
        assert_eq!(parse_integer("+99999999999999999999"), Some(i32::MAX));

        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("4294967296"), None);

        assert_eq!(parse_count("16"), Some(16));
        assert_eq!(parse_count("0"), None);
        assert_eq!(parse_count("04"), None);
        assert_eq!(parse_count("4.0"), None);
    }
}
