use crate::error::LectorError;
use crate::parsing::fields;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// One raw OCR row: column name to cell text, exactly as the OCR source emitted it.
pub type Record = HashMap<String, String>;

/// Tesseract's layout hierarchy. Only used to describe a record, never to group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Page,
    Block,
    Paragraph,
    Line,
    Word,
    Unknown,
}

impl Level {
    pub fn from_depth(depth: i64) -> Level {
        match depth {
            1 => Level::Page,
            2 => Level::Block,
            3 => Level::Paragraph,
            4 => Level::Line,
            5 => Level::Word,
            _ => Level::Unknown,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Page => write!(f, "page"),
            Level::Block => write!(f, "block"),
            Level::Paragraph => write!(f, "paragraph"),
            Level::Line => write!(f, "line"),
            Level::Word => write!(f, "word"),
            Level::Unknown => write!(f, "unknown"),
        }
    }
}

/// Structural position of a token in the OCR hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub level: i64,
    pub page: i64,
    pub block: i64,
    pub paragraph: i64,
    pub line: i64,
    pub word: i64,
}

/// Grouping key for a visual line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub page: i64,
    pub paragraph: i64,
    pub block: i64,
    pub line: i64,
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p{}/b{}/par{}/l{}",
            self.page, self.block, self.paragraph, self.line
        )
    }
}

/// Bounding box in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A recognized word.
///
/// Everything except the geometry is fixed at construction. Geometry is only
/// rewritten by line normalization, which happens inside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    index: usize,
    position: Position,
    geometry: Geometry,
    confidence: String,
    text: String,
}

impl Token {
    pub fn new(position: Position, geometry: Geometry, confidence: &str, text: &str) -> Token {
        Token {
            index: 0,
            position,
            geometry,
            confidence: confidence.to_string(),
            text: text.to_string(),
        }
    }

    /// Build a token from one OCR record. `row` is only used in error messages.
    ///
    /// Every field must be present; there are no defaults.
    pub fn from_record(row: usize, record: &Record) -> Result<Token, LectorError> {
        let position = Position {
            level: int_field(row, record, fields::LEVEL)?,
            page: int_field(row, record, fields::PAGE)?,
            block: int_field(row, record, fields::BLOCK)?,
            paragraph: int_field(row, record, fields::PARAGRAPH)?,
            line: int_field(row, record, fields::LINE)?,
            word: int_field(row, record, fields::WORD)?,
        };
        let geometry = Geometry {
            left: float_field(row, record, fields::LEFT)?,
            top: float_field(row, record, fields::TOP)?,
            width: float_field(row, record, fields::WIDTH)?,
            height: float_field(row, record, fields::HEIGHT)?,
        };
        let confidence = field(row, record, fields::CONF)?;
        let text = field(row, record, fields::TEXT)?;

        Ok(Token::new(position, geometry, confidence, text))
    }

    /// Position of this token in the canonical sequence it belongs to.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn level(&self) -> Level {
        Level::from_depth(self.position.level)
    }

    pub fn line(&self) -> i64 {
        self.position.line
    }

    pub fn key(&self) -> LineKey {
        LineKey {
            page: self.position.page,
            paragraph: self.position.paragraph,
            block: self.position.block,
            line: self.position.line,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub(crate) fn geometry_mut(&mut self) -> &mut Geometry {
        &mut self.geometry
    }

    pub fn confidence(&self) -> &str {
        &self.confidence
    }

    /// The recognized text, untrimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Equality on everything the OCR source produced, ignoring the sequence index.
    pub fn same_record(&self, other: &Token) -> bool {
        self.position == other.position
            && self.geometry == other.geometry
            && self.confidence == other.confidence
            && self.text == other.text
    }
}

fn field<'a>(row: usize, record: &'a Record, name: &'static str) -> Result<&'a str, LectorError> {
    record
        .get(name)
        .map(|s| s.as_str())
        .ok_or(LectorError::MissingField { row, field: name })
}

fn int_field(row: usize, record: &Record, name: &'static str) -> Result<i64, LectorError> {
    let raw = field(row, record, name)?;
    raw.trim()
        .parse()
        .map_err(|_| LectorError::MalformedRecord {
            row,
            field: name,
            value: raw.to_string(),
        })
}

fn float_field(row: usize, record: &Record, name: &'static str) -> Result<f64, LectorError> {
    let raw = field(row, record, name)?;
    raw.trim()
        .parse()
        .map_err(|_| LectorError::MalformedRecord {
            row,
            field: name,
            value: raw.to_string(),
        })
}

/// The canonical, ordered token list for one loaded image.
///
/// Each token's `index()` equals its position here; the sequence is replaced
/// wholesale when a new image is loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Token>", into = "Vec<Token>")]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new(mut tokens: Vec<Token>) -> TokenSequence {
        for (i, token) in tokens.iter_mut().enumerate() {
            token.index = i;
        }
        TokenSequence { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Like `get`, for indices that come from user input.
    pub fn token(&self, index: usize) -> Result<&Token, LectorError> {
        self.tokens.get(index).ok_or(LectorError::IndexOutOfRange {
            index,
            len: self.tokens.len(),
        })
    }

    /// Resolve a token to its position in this sequence.
    ///
    /// Uses the token's own index first and falls back to a scan when the
    /// token was not handed out by this sequence.
    pub fn position_of(&self, token: &Token) -> Option<usize> {
        if let Some(found) = self.tokens.get(token.index) {
            if found.same_record(token) {
                return Some(token.index);
            }
        }

        let found = self.tokens.iter().position(|t| t.same_record(token));
        if found.is_some() {
            tracing::warn!(
                index = token.index,
                text = %token.text,
                "token index is stale, resolved by scanning the sequence"
            );
        }
        found
    }

    /// Number of distinct visual lines.
    pub fn line_count(&self) -> usize {
        self.tokens
            .iter()
            .map(|t| t.key())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn page_count(&self) -> usize {
        self.tokens
            .iter()
            .map(|t| t.position.page)
            .collect::<HashSet<_>>()
            .len()
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        TokenSequence::new(tokens)
    }
}

impl From<TokenSequence> for Vec<Token> {
    fn from(sequence: TokenSequence) -> Self {
        sequence.tokens
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
