//! Condition expression parsing and evaluation

use std::fmt;

use super::symbols::FeatureTable;
use crate::error::ConditionError;

/// Nesting limit for `!` and parentheses
const MAX_DEPTH: usize = 64;

/// Boolean expression over feature symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Feature reference (e.g., DEBUG)
    Symbol(String),
    /// Integer literal, true when non-zero
    Constant(bool),
    /// Logical NOT
    Not(Box<Condition>),
    /// Logical OR
    Or(Box<Condition>, Box<Condition>),
    /// Logical AND
    And(Box<Condition>, Box<Condition>),
    /// Defined check
    Defined(String),
}

impl Condition {
    /// Parse a condition such as `DEBUG && !defined(NO_SIMD)`
    pub fn parse(input: &str) -> Result<Self, ConditionError> {
        let mut parser = ConditionParser {
            tokens: tokenize(input)?,
            position: 0,
            depth: 0,
        };
        let condition = parser.disjunction()?;

        match parser.next() {
            Some(token) => Err(ConditionError::UnexpectedToken(token.to_string())),
            None => Ok(condition),
        }
    }

    /// Evaluate the condition against a feature table
    pub fn eval(&self, features: &FeatureTable) -> bool {
        match self {
            Condition::Symbol(name) => features.get(name).as_bool(),
            Condition::Constant(val) => *val,
            Condition::Not(expr) => !expr.eval(features),
            Condition::Or(left, right) => left.eval(features) || right.eval(features),
            Condition::And(left, right) => left.eval(features) && right.eval(features),
            Condition::Defined(name) => features.is_defined(name),
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Not,
    And,
    Or,
    Open,
    Close,
    /// Identifier, `defined`, or integer literal
    Word(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Not => f.write_str("!"),
            Token::And => f.write_str("&&"),
            Token::Or => f.write_str("||"),
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
            Token::Word(word) => f.write_str(word),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn tokenize(input: &str) -> Result<Vec<Token>, ConditionError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let token = match ch {
            c if c.is_whitespace() => continue,
            '!' => Token::Not,
            '(' => Token::Open,
            ')' => Token::Close,
            '&' | '|' => {
                if chars.next_if(|&(_, next)| next == ch).is_none() {
                    return Err(ConditionError::UnexpectedToken(ch.to_string()));
                }
                if ch == '&' {
                    Token::And
                } else {
                    Token::Or
                }
            }
            c if is_word_char(c) => {
                let mut end = start + c.len_utf8();
                while let Some((i, c)) = chars.next_if(|&(_, next)| is_word_char(next)) {
                    end = i + c.len_utf8();
                }
                Token::Word(input[start..end].to_string())
            }
            other => return Err(ConditionError::UnexpectedToken(other.to_string())),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Truth value of a decimal or `0x` integer literal, `None` if `word` is not one
fn integer_literal(word: &str) -> Option<bool> {
    let digits = match word.strip_prefix("0x").or_else(|| word.strip_prefix("0X")) {
        Some(hex) if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) => hex,
        Some(_) => return None,
        None if word.chars().all(|c| c.is_ascii_digit()) => word,
        None => return None,
    };
    Some(digits.chars().any(|c| c != '0'))
}

fn is_identifier(word: &str) -> bool {
    word.chars().next().is_some_and(|c| !c.is_ascii_digit()) && word.chars().all(is_word_char)
}

/// Recursive-descent parser; `||` binds loosest, then `&&`, then `!`
struct ConditionParser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
}

impl ConditionParser {
    fn disjunction(&mut self) -> Result<Condition, ConditionError> {
        let mut left = self.conjunction()?;
        while self.eat(&Token::Or) {
            let right = self.conjunction()?;
            left = Condition::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn conjunction(&mut self) -> Result<Condition, ConditionError> {
        let mut left = self.unary()?;
        while self.eat(&Token::And) {
            let right = self.unary()?;
            left = Condition::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Condition, ConditionError> {
        if self.eat(&Token::Not) {
            let operand = self.nested(Self::unary)?;
            return Ok(Condition::Not(Box::new(operand)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Condition, ConditionError> {
        match self.next() {
            Some(Token::Open) => {
                let inner = self.nested(Self::disjunction)?;
                self.expect_close()?;
                Ok(inner)
            }
            Some(Token::Word(word)) if word == "defined" => {
                let parenthesized = self.eat(&Token::Open);
                let name = self.identifier()?;
                if parenthesized {
                    self.expect_close()?;
                }
                Ok(Condition::Defined(name))
            }
            Some(Token::Word(word)) => {
                if let Some(value) = integer_literal(&word) {
                    Ok(Condition::Constant(value))
                } else if is_identifier(&word) {
                    Ok(Condition::Symbol(word))
                } else {
                    Err(ConditionError::InvalidName(word))
                }
            }
            Some(token) => Err(ConditionError::UnexpectedToken(token.to_string())),
            None => Err(ConditionError::UnexpectedEnd),
        }
    }

    /// Run `parse` one nesting level deeper
    fn nested(
        &mut self,
        parse: fn(&mut Self) -> Result<Condition, ConditionError>,
    ) -> Result<Condition, ConditionError> {
        if self.depth >= MAX_DEPTH {
            return Err(ConditionError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn identifier(&mut self) -> Result<String, ConditionError> {
        match self.next() {
            Some(Token::Word(word)) if is_identifier(&word) => Ok(word),
            Some(Token::Word(word)) => Err(ConditionError::InvalidName(word)),
            _ => Err(ConditionError::MissingName),
        }
    }

    fn expect_close(&mut self) -> Result<(), ConditionError> {
        if self.eat(&Token::Close) {
            Ok(())
        } else {
            Err(ConditionError::MissingParen)
        }
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.tokens.get(self.position) == Some(token) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }
}
