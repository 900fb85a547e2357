use crate::location::Location;
use std::fmt;

pub type Number = f32;

const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

#[derive(Debug, PartialEq, Clone)]
pub enum TokenType {
    /// A [`<at-keyword-token>`](https://drafts.csswg.org/css-syntax/#at-keyword-token-diagram)
    ///
    /// The value does not include the `@` marker.
    AtKeyword(String),
    Ident(String),
    /// An ident immediately followed by `(`. The value does not include the paren.
    Function(String),
    Url(String),
    BadUrl(String),
    Dimension {
        value: Number,
        unit: String,
    },
    Percentage(Number),
    Number(Number),
    /// A [`<string-token>`](https://drafts.csswg.org/css-syntax/#string-token-diagram)
    ///
    /// The value does not include the quotes.
    QuotedString(String),
    /// A `<bad-string-token>`. This token always indicates a parse error.
    BadString(String),
    /// A [`<whitespace-token>`](https://drafts.csswg.org/css-syntax/#whitespace-token-diagram)
    Whitespace,
    /// A [`<hash-token>`](https://drafts.csswg.org/css-syntax/#hash-token-diagram)
    ///
    /// The value does not include the `#` marker.
    Hash(String),
    /// A `<delim-token>`
    Delim(char),
    /// A `<{-token>`
    LCurly,
    /// A `<}-token>`
    RCurly,
    /// A `<(-token>`
    LParen,
    /// A `<)-token>`
    RParen,
    /// A `<[-token>`
    LBracket,
    /// A `<]-token>`
    RBracket,
    /// A `,` `<comma-token>`
    Comma,
    /// A `:` `<colon-token>`
    Colon,
    /// A `;` `<semicolon-token>`
    Semicolon,
    // A `<!--` `<CDO-token>`
    Cdo,
    // A `-->` `<CDC-token>`
    Cdc,
    /// A `<unicode-range-token>` such as `U+0-10FFFF`
    UnicodeRange {
        start: u32,
        end: u32,
    },
    // A `<EOF-token>`
    Eof,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    /// Type of the token
    pub token_type: TokenType,
    /// Location of the token in the source
    pub location: Location,
}

impl Token {
    /// Returns a new token for the given type on the given location
    pub fn new(token_type: TokenType, location: Location) -> Token {
        Token {
            token_type,
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = match self.token_type.clone() {
            TokenType::AtKeyword(val) => format!("@{}", val),
            TokenType::Url(val) => format!("url({})", val),
            TokenType::Hash(val) => format!("#{}", val),
            TokenType::Function(val) => format!("{}(", val),
            TokenType::BadUrl(val)
            | TokenType::Ident(val)
            | TokenType::QuotedString(val)
            | TokenType::BadString(val) => val,
            TokenType::Delim(val) => val.to_string(),
            TokenType::Number(val) => val.to_string(),
            TokenType::Percentage(val) => format!("{}%", val),
            TokenType::Dimension { value, unit } => format!("{}{}", value, unit),
            TokenType::UnicodeRange { start, end } => {
                if start == end {
                    format!("U+{:04X}", start)
                } else {
                    format!("U+{:04X}-{:04X}", start, end)
                }
            }
            TokenType::Cdc => "-->".into(),
            TokenType::Cdo => "<!--".into(),
            TokenType::Colon => ":".into(),
            TokenType::Semicolon => ";".into(),
            TokenType::Comma => ",".into(),
            TokenType::LBracket => "[".into(),
            TokenType::RBracket => "]".into(),
            TokenType::LCurly => "{".into(),
            TokenType::RCurly => "}".into(),
            TokenType::LParen => "(".into(),
            TokenType::RParen => ")".into(),
            TokenType::Whitespace => " ".into(),
            TokenType::Eof => "eof".into(),
        };

        write!(f, "{string}")
    }
}

/// CSS tokenizer loosely following the [w3 specification](https://www.w3.org/TR/css-syntax-3/#tokenization).
///
/// Once the source is exhausted, `next_token` returns `Eof` forever. A single
/// pushback slot lets the block consumer undo its last pull; the slot is LIFO
/// of depth one, which is all the consumer ever needs.
pub struct Tokenizer {
    chars: Vec<char>,
    /// Position of the NEXT character to consume
    position: usize,
    line: u32,
    column: u32,
    /// Depth-1 pushback slot; filled by `pushback`, drained by `next_token`
    pushback: Option<Token>,
}

impl Tokenizer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            pushback: None,
        }
    }

    /// Returns the next token from the stream, or the pushed-back token if any.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.pushback.take() {
            return token;
        }

        self.skip_comments();

        let location = self.current_location();
        let Some(current) = self.peek(0) else {
            return Token::new(TokenType::Eof, location);
        };

        let token_type = match current {
            c if c.is_whitespace() => self.consume_whitespace(),
            '"' | '\'' => self.consume_string(),
            '#' => {
                self.read();
                if self.peek_is(0, is_ident_char) || self.is_escape_start(0) {
                    TokenType::Hash(self.consume_name())
                } else {
                    TokenType::Delim('#')
                }
            }
            '{' => self.consume_single(TokenType::LCurly),
            '}' => self.consume_single(TokenType::RCurly),
            '(' => self.consume_single(TokenType::LParen),
            ')' => self.consume_single(TokenType::RParen),
            '[' => self.consume_single(TokenType::LBracket),
            ']' => self.consume_single(TokenType::RBracket),
            ',' => self.consume_single(TokenType::Comma),
            ':' => self.consume_single(TokenType::Colon),
            ';' => self.consume_single(TokenType::Semicolon),
            '+' | '.' => {
                if self.peek_is(1, |c| c.is_ascii_digit()) {
                    self.consume_numeric()
                } else {
                    self.consume_single(TokenType::Delim(current))
                }
            }
            '-' => {
                if self.lookahead_is("-->") {
                    self.skip(3);
                    TokenType::Cdc
                } else if self.peek_is(1, |c| c.is_ascii_digit()) {
                    self.consume_numeric()
                } else if self.peek_is(1, is_ident_start)
                    || self.peek_is(1, |c| c == '-')
                    || self.is_escape_start(1)
                {
                    self.consume_ident_like()
                } else {
                    self.consume_single(TokenType::Delim('-'))
                }
            }
            '<' => {
                if self.lookahead_is("<!--") {
                    self.skip(4);
                    TokenType::Cdo
                } else {
                    self.consume_single(TokenType::Delim('<'))
                }
            }
            '@' => {
                self.read();
                if self.peek_is(0, is_ident_start)
                    || self.peek_is(0, |c| c == '-')
                    || self.is_escape_start(0)
                {
                    TokenType::AtKeyword(self.consume_name())
                } else {
                    TokenType::Delim('@')
                }
            }
            '\\' => {
                if self.is_escape_start(0) {
                    self.consume_ident_like()
                } else {
                    self.consume_single(TokenType::Delim('\\'))
                }
            }
            'u' | 'U' => {
                let next_is_range = self.peek_is(1, |c| c == '+')
                    && (self.peek_is(2, |c| c.is_ascii_hexdigit()) || self.peek_is(2, |c| c == '?'));
                if next_is_range {
                    self.consume_unicode_range()
                } else {
                    self.consume_ident_like()
                }
            }
            c if c.is_ascii_digit() => self.consume_numeric(),
            c if is_ident_start(c) => self.consume_ident_like(),
            c => self.consume_single(TokenType::Delim(c)),
        };

        Token::new(token_type, location)
    }

    /// Pushes a token back onto the stream. The slot is depth-1: the next
    /// `next_token` call returns exactly this token.
    pub fn pushback(&mut self, token: Token) {
        debug_assert!(self.pushback.is_none(), "pushback slot already occupied");
        self.pushback = Some(token);
    }

    fn current_location(&self) -> Location {
        Location::new(self.line, self.column, self.position as u32)
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    fn peek_is<F>(&self, offset: usize, pred: F) -> bool
    where
        F: Fn(char) -> bool,
    {
        self.peek(offset).is_some_and(pred)
    }

    fn read(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        self.position += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip(&mut self, len: usize) {
        for _ in 0..len {
            if self.read().is_none() {
                break;
            }
        }
    }

    fn consume_single(&mut self, token_type: TokenType) -> TokenType {
        self.read();
        token_type
    }

    fn lookahead_is(&self, expected: &str) -> bool {
        expected
            .chars()
            .enumerate()
            .all(|(i, c)| self.peek(i) == Some(c))
    }

    /// 4.3.2. [Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    ///
    /// Comments never reach the consumer; an unterminated comment runs to the
    /// end of the input.
    fn skip_comments(&mut self) {
        while self.lookahead_is("/*") {
            self.skip(2);
            loop {
                if self.peek(0).is_none() {
                    return;
                }
                if self.lookahead_is("*/") {
                    self.skip(2);
                    break;
                }
                self.read();
            }
        }
    }

    fn consume_whitespace(&mut self) -> TokenType {
        while self.peek_is(0, char::is_whitespace) {
            self.read();
        }

        TokenType::Whitespace
    }

    /// 4.3.5. [Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    ///
    /// Returns either a `<string-token>` or `<bad-string-token>`.
    fn consume_string(&mut self) -> TokenType {
        let Some(ending) = self.read() else {
            return TokenType::BadString(String::new());
        };
        let mut value = String::new();

        loop {
            let Some(c) = self.peek(0) else {
                // eof inside a string: tolerated, return what we have
                return TokenType::QuotedString(value);
            };

            if c == ending {
                self.read();
                return TokenType::QuotedString(value);
            }

            // newline: parser error; the newline is not consumed
            if c == '\n' {
                return TokenType::BadString(value);
            }

            if c == '\\' && self.peek(1) == Some('\n') {
                // escaped newline, line continuation
                self.skip(2);
                continue;
            }

            if self.is_escape_start(0) {
                value.push(self.consume_escaped());
                continue;
            }

            if let Some(c) = self.read() {
                value.push(c);
            }
        }
    }

    /// 4.3.11. [Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_name(&mut self) -> String {
        let mut value = String::new();

        loop {
            if self.peek_is(0, is_ident_char) {
                if let Some(c) = self.read() {
                    value.push(c);
                }
            } else if self.is_escape_start(0) {
                value.push(self.consume_escaped());
            } else {
                break;
            }
        }

        value
    }

    /// 4.3.4. [Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    ///
    /// Returns: `<ident-token>`, `<function-token>`, `<url-token>`, or `<bad-url-token>`.
    fn consume_ident_like(&mut self) -> TokenType {
        let value = self.consume_name();

        if value.eq_ignore_ascii_case("url") && self.peek(0) == Some('(') {
            self.read();
            while self.peek_is(0, char::is_whitespace) {
                self.read();
            }

            if self.peek_is(0, |c| c == '"' || c == '\'') {
                return TokenType::Function(value);
            }

            return self.consume_url();
        } else if self.peek(0) == Some('(') {
            self.read();
            return TokenType::Function(value);
        }

        TokenType::Ident(value)
    }

    /// 4.3.6. [Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-a-url-token)
    ///
    /// Returns either a `<url-token>` or a `<bad-url-token>`.
    fn consume_url(&mut self) -> TokenType {
        let mut url = String::new();

        loop {
            let Some(c) = self.peek(0) else {
                // eof: parser error, tolerated
                break;
            };

            if c == ')' {
                self.read();
                break;
            }

            if c.is_whitespace() {
                while self.peek_is(0, char::is_whitespace) {
                    self.read();
                }
                continue;
            }

            if c == '"' || c == '\'' || c == '(' || is_non_printable(c) {
                self.consume_bad_url_remnants();
                return TokenType::BadUrl(url);
            }

            if self.is_escape_start(0) {
                url.push(self.consume_escaped());
                continue;
            }

            if let Some(c) = self.read() {
                url.push(c);
            }
        }

        TokenType::Url(url)
    }

    /// 4.3.14. [Consume the remnants of a bad url](https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url)
    ///
    /// Consumes enough of the input to reach a recovery point where normal
    /// tokenizing can resume.
    fn consume_bad_url_remnants(&mut self) {
        loop {
            match self.peek(0) {
                None => break,
                Some(')') => {
                    self.read();
                    break;
                }
                _ => {
                    if self.is_escape_start(0) {
                        self.consume_escaped();
                    } else {
                        self.read();
                    }
                }
            }
        }
    }

    /// 4.3.7. [Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-an-escaped-code-point)
    fn consume_escaped(&mut self) -> char {
        // consume '\'
        self.read();

        let mut value = String::new();
        while self.peek_is(0, |c| c.is_ascii_hexdigit()) && value.len() < 6 {
            if let Some(c) = self.read() {
                value.push(c);
            }
        }

        if value.is_empty() {
            // not a hex escape: the escaped character stands for itself
            return self.read().unwrap_or(REPLACEMENT_CHARACTER);
        }

        // a single trailing whitespace is part of the escape
        if self.peek_is(0, char::is_whitespace) {
            self.read();
        }

        let Ok(as_u32) = u32::from_str_radix(&value, 16) else {
            return REPLACEMENT_CHARACTER;
        };

        if as_u32 == 0 || as_u32 > 0x10FFFF {
            return REPLACEMENT_CHARACTER;
        }

        char::from_u32(as_u32).unwrap_or(REPLACEMENT_CHARACTER)
    }

    /// 4.3.3. [Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    ///
    /// Returns either a `<number-token>`, `<percentage-token>`, or `<dimension-token>`.
    fn consume_numeric(&mut self) -> TokenType {
        let number = self.consume_number();

        if self.peek_is(0, is_ident_start) {
            let unit = self.consume_name();

            return TokenType::Dimension {
                value: number,
                unit,
            };
        } else if self.peek(0) == Some('%') {
            self.read();
            return TokenType::Percentage(number);
        }

        TokenType::Number(number)
    }

    /// 4.3.12. [Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    fn consume_number(&mut self) -> Number {
        let mut value = String::new();

        if self.peek_is(0, |c| c == '+' || c == '-') {
            if let Some(c) = self.read() {
                value.push(c);
            }
        }

        value.push_str(&self.consume_digits());

        if self.peek(0) == Some('.') && self.peek_is(1, |c| c.is_ascii_digit()) {
            if let Some(c) = self.read() {
                value.push(c);
            }
            value.push_str(&self.consume_digits());
        }

        let exponent_follows = self.peek_is(0, |c| c == 'e' || c == 'E')
            && (self.peek_is(1, |c| c.is_ascii_digit())
                || (self.peek_is(1, |c| c == '+' || c == '-')
                    && self.peek_is(2, |c| c.is_ascii_digit())));
        if exponent_follows {
            if let Some(c) = self.read() {
                value.push(c);
            }
            if self.peek_is(0, |c| c == '+' || c == '-') {
                if let Some(c) = self.read() {
                    value.push(c);
                }
            }
            value.push_str(&self.consume_digits());
        }

        value.parse().unwrap_or(0.0)
    }

    fn consume_digits(&mut self) -> String {
        let mut value = String::new();

        while self.peek_is(0, |c| c.is_ascii_digit()) {
            if let Some(c) = self.read() {
                value.push(c);
            }
        }

        value
    }

    /// Consume a `u+XXXX`, `u+XX??` or `u+XXXX-YYYY` range. The caller has
    /// verified that a `+` and a hex digit or `?` follow.
    fn consume_unicode_range(&mut self) -> TokenType {
        // consume 'u' and '+'
        self.skip(2);

        let mut start_digits = String::new();
        let mut has_question_marks = false;
        while start_digits.len() < 6 {
            if self.peek_is(0, |c| c.is_ascii_hexdigit()) && !has_question_marks {
                if let Some(c) = self.read() {
                    start_digits.push(c);
                }
            } else if self.peek(0) == Some('?') {
                has_question_marks = true;
                self.read();
                start_digits.push('?');
            } else {
                break;
            }
        }

        let start = u32::from_str_radix(&start_digits.replace('?', "0"), 16).unwrap_or(0);
        let mut end = u32::from_str_radix(&start_digits.replace('?', "F"), 16).unwrap_or(0);

        if !has_question_marks
            && self.peek(0) == Some('-')
            && self.peek_is(1, |c| c.is_ascii_hexdigit())
        {
            self.read();
            let mut end_digits = String::new();
            while end_digits.len() < 6 && self.peek_is(0, |c| c.is_ascii_hexdigit()) {
                if let Some(c) = self.read() {
                    end_digits.push(c);
                }
            }
            end = u32::from_str_radix(&end_digits, 16).unwrap_or(start);
        }

        TokenType::UnicodeRange { start, end }
    }

    fn is_escape_start(&self, offset: usize) -> bool {
        self.peek(offset) == Some('\\') && self.peek(offset + 1) != Some('\n')
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || !c.is_ascii() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit() || c == '-'
}

/// [non-printable code point](https://www.w3.org/TR/css-syntax-3/#non-printable-code-point)
fn is_non_printable(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{0008}' | '\u{000B}' | '\u{000E}'..='\u{001F}' | '\u{007F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<TokenType> {
        let mut tokenizer = Tokenizer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = tokenizer.next_token();
            let eof = token.token_type == TokenType::Eof;
            tokens.push(token.token_type);
            if eof {
                break;
            }
        }
        tokens
    }

    #[test]
    fn parse_comment() {
        assert_eq!(tokenize("/* css comment */"), vec![TokenType::Eof]);
        // unterminated comments run to the end of the input
        assert_eq!(tokenize("/* no end"), vec![TokenType::Eof]);
    }

    #[test]
    fn parse_numbers() {
        let num_tokens = vec![
            ("12", 12.0),
            ("+34", 34.0),
            ("-56", -56.0),
            ("7.8", 7.8),
            ("-9.10", -9.10),
            ("0.0001", 0.0001),
            ("1e+1", 1e+1),
            ("1e1", 1e1),
            ("1e-1", 1e-1),
        ];

        for (raw_num, expected) in num_tokens {
            let mut tokenizer = Tokenizer::new(raw_num);
            assert_eq!(tokenizer.consume_number(), expected);
        }
    }

    #[test]
    fn parse_numeric_tokens() {
        let numeric_tokens = vec![
            (
                "1.1rem",
                TokenType::Dimension {
                    value: 1.1,
                    unit: "rem".into(),
                },
            ),
            (
                "1px",
                TokenType::Dimension {
                    value: 1.0,
                    unit: "px".into(),
                },
            ),
            ("100%", TokenType::Percentage(100.0)),
            ("42", TokenType::Number(42.0)),
            ("1em", TokenType::Dimension {
                value: 1.0,
                unit: "em".into(),
            }),
        ];

        for (raw_token, expected) in numeric_tokens {
            let mut tokenizer = Tokenizer::new(raw_token);
            assert_eq!(tokenizer.next_token().token_type, expected);
        }
    }

    #[test]
    fn parse_ident_tokens() {
        let ident_tokens = vec![
            ("-ident", "-ident"),
            ("_123-ident", "_123-ident"),
            ("--custom-prop", "--custom-prop"),
            ("ide  nt", "ide"),
        ];

        for (raw_ident, expected) in ident_tokens {
            let mut tokenizer = Tokenizer::new(raw_ident);
            assert_eq!(
                tokenizer.next_token().token_type,
                TokenType::Ident(expected.to_string())
            );
        }
    }

    #[test]
    fn parse_string_tokens() {
        let string_tokens = vec![
            ("'line\nnewline'", TokenType::BadString("line".into())),
            (
                "\"double quotes\"",
                TokenType::QuotedString("double quotes".into()),
            ),
            (
                "'single quotes'",
                TokenType::QuotedString("single quotes".into()),
            ),
            ("\"eof", TokenType::QuotedString("eof".into())),
            ("\"\"", TokenType::QuotedString("".into())),
        ];

        for (raw_string, expected) in string_tokens {
            let mut tokenizer = Tokenizer::new(raw_string);
            assert_eq!(tokenizer.next_token().token_type, expected);
        }
    }

    #[test]
    fn parse_urls() {
        let urls = vec![
            (
                "url(https://example.com/)",
                TokenType::Url("https://example.com/".into()),
            ),
            ("url(  example.com   )", TokenType::Url("example.com".into())),
            ("url(\"", TokenType::Function("url".into())),
            ("url( '", TokenType::Function("url".into())),
            ("url(bad\u{0000}url)", TokenType::BadUrl("bad".into())),
        ];

        for (raw_url, expected) in urls {
            let mut tokenizer = Tokenizer::new(raw_url);
            assert_eq!(tokenizer.next_token().token_type, expected);
        }
    }

    #[test]
    fn parse_function_tokens() {
        let functions = vec![
            ("rgb(", TokenType::Function("rgb".into())),
            ("rotateX(", TokenType::Function("rotateX".into())),
            ("attr('", TokenType::Function("attr".into())),
        ];

        for (raw_function, expected) in functions {
            let mut tokenizer = Tokenizer::new(raw_function);
            assert_eq!(tokenizer.next_token().token_type, expected);
        }
    }

    #[test]
    fn parse_hash_and_at_keyword() {
        assert_eq!(
            tokenize("#f00"),
            vec![TokenType::Hash("f00".into()), TokenType::Eof]
        );
        assert_eq!(
            tokenize("@media"),
            vec![TokenType::AtKeyword("media".into()), TokenType::Eof]
        );
        // a lone marker degrades to a delimiter
        assert_eq!(
            tokenize("# @"),
            vec![
                TokenType::Delim('#'),
                TokenType::Whitespace,
                TokenType::Delim('@'),
                TokenType::Eof
            ]
        );
    }

    #[test]
    fn parse_cdo_cdc() {
        assert_eq!(
            tokenize("<!-- -->"),
            vec![
                TokenType::Cdo,
                TokenType::Whitespace,
                TokenType::Cdc,
                TokenType::Eof
            ]
        );
    }

    #[test]
    fn parse_unicode_ranges() {
        assert_eq!(
            tokenize("U+0025"),
            vec![
                TokenType::UnicodeRange {
                    start: 0x25,
                    end: 0x25
                },
                TokenType::Eof
            ]
        );
        assert_eq!(
            tokenize("u+00??"),
            vec![
                TokenType::UnicodeRange {
                    start: 0x0000,
                    end: 0x00FF
                },
                TokenType::Eof
            ]
        );
        assert_eq!(
            tokenize("U+0-10FFFF"),
            vec![
                TokenType::UnicodeRange {
                    start: 0x0,
                    end: 0x10FFFF
                },
                TokenType::Eof
            ]
        );
    }

    #[test]
    fn parse_escaped_idents() {
        let mut tokenizer = Tokenizer::new("\\2A x");
        assert_eq!(
            tokenizer.next_token().token_type,
            TokenType::Ident("*x".into())
        );
    }

    #[test]
    fn eof_forever() {
        let mut tokenizer = Tokenizer::new("a");
        assert_eq!(
            tokenizer.next_token().token_type,
            TokenType::Ident("a".into())
        );
        assert_eq!(tokenizer.next_token().token_type, TokenType::Eof);
        assert_eq!(tokenizer.next_token().token_type, TokenType::Eof);
        assert_eq!(tokenizer.next_token().token_type, TokenType::Eof);
    }

    #[test]
    fn pushback_slot() {
        let mut tokenizer = Tokenizer::new("a b");
        let first = tokenizer.next_token();
        assert_eq!(first.token_type, TokenType::Ident("a".into()));

        tokenizer.pushback(first.clone());
        assert_eq!(tokenizer.next_token(), first);
        assert_eq!(tokenizer.next_token().token_type, TokenType::Whitespace);
    }
}
