pub mod tsv;

use crate::error::LectorError;
use crate::model::{Record, Token};
use crate::ExtractOptions;

/// Column names of tesseract's TSV output.
pub mod fields {
    pub const LEVEL: &str = "level";
    pub const PAGE: &str = "page_num";
    pub const BLOCK: &str = "block_num";
    pub const PARAGRAPH: &str = "par_num";
    pub const LINE: &str = "line_num";
    pub const WORD: &str = "word_num";
    pub const LEFT: &str = "left";
    pub const TOP: &str = "top";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const CONF: &str = "conf";
    pub const TEXT: &str = "text";
}

/// Turn raw OCR records into tokens, in source order.
///
/// The batch is all-or-nothing: the first bad record fails the whole call.
/// Blank tokens are dropped unless `options.include_empty` is set.
pub fn build_tokens(records: &[Record], options: &ExtractOptions) -> Result<Vec<Token>, LectorError> {
    let tokens = records
        .iter()
        .enumerate()
        .map(|(i, record)| Token::from_record(i + 1, record))
        .collect::<Result<Vec<_>, _>>()?;

    let total = tokens.len();
    let tokens: Vec<Token> = if options.include_empty {
        tokens
    } else {
        tokens.into_iter().filter(|t| !t.is_blank()).collect()
    };

    tracing::debug!(
        records = total,
        kept = tokens.len(),
        include_empty = options.include_empty,
        "built tokens"
    );

    Ok(tokens)
}
