pub mod tesseract;

use crate::error::LectorError;

/// Trait for OCR backends.
pub trait OcrEngine: Send + Sync {
    /// Recognize text in an encoded image, returning tesseract-style TSV
    /// (one header row, one row per layout element).
    fn recognize(&self, image: &[u8], languages: &[String]) -> Result<String, LectorError>;

    /// Name of this OCR backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
