use crate::error::LectorError;
use crate::extraction::OcrEngine;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// OCR backend that shells out to the `tesseract` binary.
///
/// Runs `tesseract <image> stdout -l <langs> tsv` and returns the TSV as-is.
pub struct TesseractEngine {
    binary: PathBuf,
}

impl TesseractEngine {
    pub fn new() -> Self {
        TesseractEngine {
            binary: PathBuf::from("tesseract"),
        }
    }

    /// Use a specific tesseract executable instead of the one on `PATH`.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        TesseractEngine {
            binary: binary.into(),
        }
    }

    /// Check if tesseract is available on the system.
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Join language codes the way tesseract's `-l` flag expects (`eng+heb`).
pub fn language_arg(languages: &[String]) -> String {
    let joined = languages
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("+");
    if joined.is_empty() {
        "eng".to_string()
    } else {
        joined
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &[u8], languages: &[String]) -> Result<String, LectorError> {
        // tesseract reads images from disk
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| LectorError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(image)
            .map_err(|e| LectorError::Extraction(e.to_string()))?;

        let langs = language_arg(languages);
        tracing::info!(
            binary = %self.binary.display(),
            languages = %langs,
            bytes = image.len(),
            "running tesseract"
        );

        let output = Command::new(&self.binary)
            .arg(tmpfile.path())
            .arg("stdout")
            .arg("-l")
            .arg(&langs)
            .arg("tsv")
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    LectorError::TesseractNotFound
                } else {
                    LectorError::Extraction(format!("tesseract failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(LectorError::TesseractFailed { code, stderr });
        }

        let tsv = String::from_utf8_lossy(&output.stdout).to_string();
        if tsv.trim().is_empty() {
            return Err(LectorError::TsvFormat("tesseract produced no output".into()));
        }

        Ok(tsv)
    }

    fn backend_name(&self) -> &str {
        "tesseract"
    }
}
