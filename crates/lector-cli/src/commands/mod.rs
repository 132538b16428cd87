pub mod info;
pub mod lines;
pub mod text;
pub mod tokens;

use lector_core::error::LectorError;
use lector_core::extraction::tesseract::TesseractEngine;
use lector_core::model::TokenSequence;
use lector_core::ExtractOptions;
use std::path::Path;

use crate::InputArgs;

/// Where a token sequence was read from.
pub enum Source {
    Tsv,
    Ocr(&'static str),
}

impl Source {
    pub fn describe(&self) -> &str {
        match self {
            Source::Tsv => "tsv file",
            Source::Ocr(backend) => backend,
        }
    }
}

pub fn options(input: &InputArgs) -> ExtractOptions {
    let mut options = ExtractOptions {
        include_empty: input.include_empty,
        ..ExtractOptions::default()
    };
    if !input.lang.is_empty() {
        options.languages = input.lang.clone();
    }
    options
}

/// `.tsv` files hold pre-extracted OCR data; everything else is an image.
pub fn is_tsv(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("tsv"))
        .unwrap_or(false)
}

/// Load the token sequence for an input file.
///
/// `.tsv` files are read as pre-extracted OCR data; anything else is sent
/// to tesseract as an image.
pub fn load(input: &InputArgs) -> Result<(TokenSequence, Source), LectorError> {
    let options = options(input);
    tracing::debug!(
        file = %input.input_file.display(),
        include_empty = options.include_empty,
        "loading input"
    );

    if is_tsv(&input.input_file) {
        let tsv = std::fs::read_to_string(&input.input_file)?;
        let sequence = lector_core::tokens_from_tsv(&tsv, &options)?;
        return Ok((sequence, Source::Tsv));
    }

    let engine = match &input.tesseract {
        Some(path) => TesseractEngine::with_binary(path),
        None => TesseractEngine::new(),
    };
    if !engine.is_available() {
        return Err(LectorError::TesseractNotFound);
    }

    let image = std::fs::read(&input.input_file)?;
    let sequence = lector_core::extract_tokens(&image, &engine, &options)?;
    Ok((sequence, Source::Ocr("tesseract")))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;

    pub(crate) fn input(path: PathBuf) -> InputArgs {
        InputArgs {
            input_file: path,
            include_empty: false,
            lang: Vec::new(),
            tesseract: None,
        }
    }

    #[test]
    fn test_is_tsv() {
        assert!(is_tsv(Path::new("scan.tsv")));
        assert!(is_tsv(Path::new("SCAN.TSV")));
        assert!(!is_tsv(Path::new("scan.png")));
        assert!(!is_tsv(Path::new("scan")));
    }

    #[test]
    fn test_load_empty_tsv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.tsv");
        std::fs::write(&path, "").unwrap();

        let (sequence, source) = load(&input(path)).unwrap();
        assert!(sequence.is_empty());
        assert_eq!(source.describe(), "tsv file");
    }

    #[test]
    fn test_missing_tesseract_is_reported_before_reading_image() {
        let mut args = input(PathBuf::from("/nonexistent/scan.png"));
        args.tesseract = Some(PathBuf::from("/nonexistent/lector-tesseract-test"));
        assert!(matches!(load(&args), Err(LectorError::TesseractNotFound)));
    }

    #[test]
    fn test_languages_override_defaults() {
        let mut args = input(PathBuf::from("scan.png"));
        assert_eq!(options(&args).languages, vec!["eng", "heb"]);
        args.lang = vec!["deu".into()];
        args.include_empty = true;
        let opts = options(&args);
        assert_eq!(opts.languages, vec!["deu"]);
        assert!(opts.include_empty);
    }
}
