pub mod error;
pub mod extraction;
pub mod model;
pub mod normalize;
pub mod parsing;
pub mod select;
pub mod text;

use error::LectorError;
use extraction::OcrEngine;
use model::{Token, TokenSequence};

/// Options for turning OCR output into a token sequence.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Keep tokens whose text is empty or whitespace. Kept tokens also take
    /// part in their line's height and top.
    pub include_empty: bool,
    /// OCR language codes, passed to the engine in order.
    pub languages: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            include_empty: false,
            languages: vec!["eng".into(), "heb".into()],
        }
    }
}

/// Build the normalized token sequence from tesseract TSV text.
///
/// Blank tokens are filtered before normalization, so they never affect a
/// line's bounds unless `include_empty` is set.
pub fn tokens_from_tsv(tsv: &str, options: &ExtractOptions) -> Result<TokenSequence, LectorError> {
    let records = parsing::tsv::parse_tsv(tsv)?;
    let tokens = parsing::build_tokens(&records, options)?;
    let tokens = normalize::normalize_lines(tokens);
    Ok(TokenSequence::new(tokens))
}

/// Main API entry point: OCR an image and build its token sequence.
pub fn extract_tokens(
    image: &[u8],
    engine: &dyn OcrEngine,
    options: &ExtractOptions,
) -> Result<TokenSequence, LectorError> {
    let tsv = engine.recognize(image, &options.languages)?;
    let sequence = tokens_from_tsv(&tsv, options)?;

    tracing::info!(
        backend = engine.backend_name(),
        tokens = sequence.len(),
        lines = sequence.line_count(),
        "extracted tokens"
    );

    Ok(sequence)
}

/// Plain text for the range between two tokens, as copied to a clipboard.
pub fn copy_range(
    sequence: &TokenSequence,
    first: &Token,
    second: &Token,
) -> Result<String, LectorError> {
    let range = select::select_range(sequence, first, second)?;
    Ok(text::plain_text(range))
}
