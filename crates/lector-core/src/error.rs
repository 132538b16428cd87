#[derive(Debug, thiserror::Error)]
pub enum LectorError {
    #[error("OCR row {row}: missing field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("OCR row {row}: field '{field}' is not numeric: '{value}'")]
    MalformedRecord {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("token #{index} ('{text}') is not part of the current token sequence")]
    UnknownToken { index: usize, text: String },

    #[error("token index {index} is out of range: the sequence has {len} token(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("tesseract not found. Install it: brew install tesseract (macOS) or apt install tesseract-ocr (Linux)")]
    TesseractNotFound,

    #[error("tesseract failed with exit code {code}: {stderr}")]
    TesseractFailed { code: i32, stderr: String },

    #[error("OCR extraction failed: {0}")]
    Extraction(String),

    #[error("invalid OCR data: {0}")]
    TsvFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
