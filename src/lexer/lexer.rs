use std::{collections::VecDeque, io::BufRead};

use log::trace;

use crate::{
    errors::errors::{ErrorImpl, FrontendResult},
    reserved::reserved::ReservedRegistry,
    MK_ERROR, MK_TOKEN,
};

use super::{
    source::CharacterSource,
    tokens::{Token, TokenKind},
};

/// A digit run with an optional fraction, defaults already substituted.
struct NumberPart {
    value: String,
    is_float: bool,
}

/// Pull-based tokenizer over a character stream.
///
/// Lexemes are classified in a fixed order: end of stream, identifier or
/// reserved word, number, operator. Whitespace is skipped before each token
/// and newlines advance the line counter.
pub struct Tokenizer<'a, R> {
    source: CharacterSource<R>,
    registry: &'a ReservedRegistry,
    buffer: VecDeque<Token>,
    line: u32,
}

impl<'a, R: BufRead> Tokenizer<'a, R> {
    pub fn new(reader: R, registry: &'a ReservedRegistry) -> Self {
        Tokenizer {
            source: CharacterSource::new(reader),
            registry,
            buffer: VecDeque::new(),
            line: 1,
        }
    }

    /// Returns the next token without consuming it.
    pub fn lookahead(&mut self) -> FrontendResult<&Token> {
        if self.buffer.is_empty() {
            let token = self.next_token()?;
            self.buffer.push_back(token);
        }

        Ok(&self.buffer[0])
    }

    pub fn consume(&mut self) -> FrontendResult<Token> {
        match self.buffer.pop_front() {
            Some(token) => Ok(token),
            None => self.next_token(),
        }
    }

    fn next_token(&mut self) -> FrontendResult<Token> {
        self.skip_whitespace()?;
        let line = self.line;

        let Some(c) = self.source.peek()? else {
            return Ok(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), line));
        };

        let token = if let Some(token) = self.word_token()? {
            token
        } else if let Some(token) = self.scientific_number_token()? {
            token
        } else if let Some(token) = self.operator_token()? {
            token
        } else {
            return Err(MK_ERROR!(ErrorImpl::InvalidSyntax { character: c }, line));
        };

        trace!("{} on line {}", token, token.line);
        Ok(token)
    }

    fn skip_whitespace(&mut self) -> FrontendResult<()> {
        while let Some(c) = self.source.peek()? {
            if !c.is_whitespace() {
                break;
            }

            if c == '\n' {
                self.line += 1;
            }
            self.source.read()?;
        }

        Ok(())
    }

    /// Consumes `expected` if the stream continues with it, otherwise
    /// restores everything read.
    fn match_str(&mut self, expected: &str) -> FrontendResult<bool> {
        let mut read = String::new();

        for wanted in expected.chars() {
            match self.source.read()? {
                Some(c) => {
                    read.push(c);
                    if c != wanted {
                        self.source.put_back(&read);
                        return Ok(false);
                    }
                }
                None => {
                    if !read.is_empty() {
                        self.source.put_back(&read);
                    }
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    fn is_separator(&self, c: char) -> bool {
        c.is_whitespace() || c == ';'
    }

    fn word_token(&mut self) -> FrontendResult<Option<Token>> {
        match self.source.peek()? {
            Some(c) if c.is_alphabetic() || c == '_' => {}
            _ => return Ok(None),
        }

        let line = self.line;
        let mut word = String::new();

        while let Some(c) = self.source.peek()? {
            if c.is_alphanumeric() || c == '_' {
                word.push(c);
                self.source.read()?;
            } else if self.is_separator(c) || self.registry.is_special_char(c) {
                break;
            } else {
                return Err(MK_ERROR!(
                    ErrorImpl::InvalidCharacter {
                        character: c,
                        after: word
                    },
                    line
                ));
            }
        }

        let kind = self.registry.classify_word(&word);
        Ok(Some(MK_TOKEN!(kind, word, line)))
    }

    fn digit_run(&mut self) -> FrontendResult<String> {
        let mut digits = String::new();

        while let Some(c) = self.source.peek()? {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.source.read()?;
        }

        Ok(digits)
    }

    /// `digits? ('.' digits?)?`, with absent digit runs read as `0`.
    /// Fails without consuming anything when neither digits nor a point
    /// are present.
    fn number_part(&mut self) -> FrontendResult<Option<NumberPart>> {
        let integer = self.digit_run()?;
        let has_point = self.match_str(".")?;

        if integer.is_empty() && !has_point {
            return Ok(None);
        }

        let mut value = if integer.is_empty() {
            String::from("0")
        } else {
            integer
        };

        if has_point {
            let fraction = self.digit_run()?;
            value.push('.');
            value.push_str(if fraction.is_empty() { "0" } else { &fraction });
        }

        Ok(Some(NumberPart {
            value,
            is_float: has_point,
        }))
    }

    fn scientific_number_token(&mut self) -> FrontendResult<Option<Token>> {
        let line = self.line;

        let Some(mantissa) = self.number_part()? else {
            return Ok(None);
        };

        if self.match_str("e")? {
            let mut value = mantissa.value;
            value.push('e');

            if let Some(sign @ ('+' | '-')) = self.source.peek()? {
                value.push(sign);
                self.source.read()?;
            }

            let Some(exponent) = self.number_part()? else {
                return Err(MK_ERROR!(ErrorImpl::InvalidNumber { after: value }, line));
            };

            value.push_str(&exponent.value);
            return Ok(Some(MK_TOKEN!(TokenKind::FloatLiteral, value, line)));
        }

        match self.source.peek()? {
            None => {}
            Some(c) if c.is_whitespace() || (c != '.' && self.registry.is_special_char(c)) => {}
            Some(_) => {
                return Err(MK_ERROR!(
                    ErrorImpl::InvalidNumber {
                        after: mantissa.value
                    },
                    line
                ))
            }
        }

        let kind = if mantissa.is_float {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        };

        Ok(Some(MK_TOKEN!(kind, mantissa.value, line)))
    }

    /// Greedy operator match: keeps extending while the longer lexeme is
    /// still a registered operator.
    fn operator_token(&mut self) -> FrontendResult<Option<Token>> {
        let line = self.line;
        let mut lexeme = String::new();
        let mut kind = None;

        while let Some(c) = self.source.read()? {
            lexeme.push(c);

            match self.registry.operator_kind(&lexeme) {
                Some(extended) => kind = Some(extended),
                None => {
                    lexeme.pop();
                    self.source.put_back(&c.to_string());
                    break;
                }
            }
        }

        Ok(kind.map(|kind| MK_TOKEN!(kind, lexeme, line)))
    }
}

/// Tokenizes a whole stream, EOF token included.
pub fn tokenize<R: BufRead>(reader: R, registry: &ReservedRegistry) -> FrontendResult<Vec<Token>> {
    let mut tokenizer = Tokenizer::new(reader, registry);
    let mut tokens = vec![];

    loop {
        let token = tokenizer.consume()?;
        let at_end = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_end {
            return Ok(tokens);
        }
    }
}
