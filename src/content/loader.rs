//! Content domain: RON loader for the CV data file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::CvData;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// RON options with extensions enabled for more flexible authoring.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse CV data from a RON string.
pub fn parse_cv(source: &str, file: &str) -> Result<CvData, ContentLoadError> {
    ron_options()
        .from_str(source)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load CV data from `assets/data/cv.ron`.
pub fn load_cv(path: &Path) -> Result<CvData, ContentLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file.clone(),
        message: format!("IO error: {}", e),
    })?;
    parse_cv(&contents, &file)
}
