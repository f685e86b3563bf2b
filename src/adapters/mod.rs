use crate::domain::ports::{SentenceSegmenter, Storage, TextSource};
use crate::utils::error::Result;

/// Default text source: the résumé is already a plain-text file. PDF or
/// OCR extraction belongs to an external collaborator behind `TextSource`.
#[derive(Debug, Clone)]
pub struct PlainTextSource<S: Storage> {
    storage: S,
}

impl<S: Storage> PlainTextSource<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: Storage> TextSource for PlainTextSource<S> {
    async fn load_text(&self, path: &str) -> Result<String> {
        let bytes = self.storage.read_file(path).await?;
        // Lossy conversion keeps the pipeline total over odd encodings
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Terminator-based sentence splitter. Deliberately naive: the core only
/// needs a sequence of sentences, and a proper NLP segmenter can be
/// swapped in through the `SentenceSegmenter` port.
#[derive(Debug, Clone, Default)]
pub struct NaiveSentenceSegmenter;

impl SentenceSegmenter for NaiveSentenceSegmenter {
    fn split(&self, text: &str) -> Vec<String> {
        text.split(|c| matches!(c, '.' | '!' | '?' | '\n'))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
