use crate::document::Document;
use crate::store::Snapshot;

/// The loaded document plus the shared word cursor.
///
/// `position` ranges over `0..=len`; `len` means the document has been read
/// to completion. Every scheduler and every jump goes through the clamped
/// setters so the cursor can never point past the end.
pub struct ReaderState {
    pub(in crate::app) document: Document,
    pub(in crate::app) position: usize,
}

impl ReaderState {
    pub(in crate::app) fn new() -> Self {
        Self {
            document: Document::empty(),
            position: 0,
        }
    }

    /// Replace the document wholesale and rewind to the first word.
    pub(in crate::app) fn load(&mut self, text: &str) {
        self.document = Document::from_text(text);
        self.position = 0;
        tracing::info!(words = self.document.len(), "Loaded document");
    }

    /// Rebuild state from a persisted session, clamping the saved cursor.
    pub(in crate::app) fn restore(&mut self, snapshot: &Snapshot) {
        self.document = Document::from_text(&snapshot.text);
        let len = self.document.len();
        let index = usize::try_from(snapshot.current_index).unwrap_or(0);
        self.position = if len == 0 {
            0
        } else {
            index.min(len.saturating_sub(1))
        };
        tracing::info!(
            words = len,
            position = self.position,
            "Restored document from saved session"
        );
    }

    pub(in crate::app) fn len(&self) -> usize {
        self.document.len()
    }

    pub(in crate::app) fn set_position_clamped(&mut self, position: usize) {
        let len = self.document.len();
        self.position = if len == 0 {
            0
        } else {
            position.min(len.saturating_sub(1))
        };
    }

    pub(in crate::app) fn jump_clamped(&mut self, delta: i64) {
        let target = self.position as i64 + delta;
        self.set_position_clamped(target.max(0) as usize);
    }

    /// True once the cursor has advanced past the last word.
    pub(in crate::app) fn at_end(&self) -> bool {
        !self.document.is_empty() && self.position >= self.document.len()
    }

    pub(in crate::app) fn current_word(&self) -> Option<&str> {
        self.document.word(self.position)
    }

    pub(in crate::app) fn progress_label(&self) -> String {
        let len = self.document.len();
        if len == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", (self.position + 1).min(len), len)
    }
}
