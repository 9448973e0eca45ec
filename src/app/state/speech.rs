use crate::document::Document;
use crate::speech::{SpeechEngine, SpeechPlayback};
use std::collections::VecDeque;

/// One narration unit: a bounded run of words synthesized as a single audio
/// file. The bound exists because the engine degrades on very long inputs,
/// not because chunks align with sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechChunk {
    pub start: usize,
    pub word_count: usize,
    pub text: String,
}

/// Split the words from `from` to the end of the document into FIFO chunks
/// of at most `chunk_words` words.
pub(in crate::app) fn build_chunks(
    document: &Document,
    from: usize,
    chunk_words: usize,
) -> VecDeque<SpeechChunk> {
    let chunk_words = chunk_words.max(1);
    let len = document.len();
    let mut queue = VecDeque::new();
    let mut start = from.min(len);
    while start < len {
        let word_count = chunk_words.min(len - start);
        queue.push_back(SpeechChunk {
            start,
            word_count,
            text: document.slice_text(start, word_count),
        });
        start += word_count;
    }
    queue
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechLifecycle {
    Idle,
    Preparing { request_id: u64 },
    Speaking { request_id: u64 },
}

/// Runtime narration model (configuration lives in `AppConfig`).
pub struct SpeechState {
    pub(in crate::app) engine: Option<SpeechEngine>,
    pub(in crate::app) playback: Option<SpeechPlayback>,
    pub(in crate::app) lifecycle: SpeechLifecycle,
    pub(in crate::app) queue: VecDeque<SpeechChunk>,
    pub(in crate::app) current_chunk: Option<SpeechChunk>,
    pub(in crate::app) spoken_words: usize,
    pub(in crate::app) request_id: u64,
}

impl SpeechState {
    pub(in crate::app) fn new(engine: Option<SpeechEngine>) -> Self {
        Self {
            engine,
            playback: None,
            lifecycle: SpeechLifecycle::Idle,
            queue: VecDeque::new(),
            current_chunk: None,
            spoken_words: 0,
            request_id: 0,
        }
    }

    pub(in crate::app) fn is_active(&self) -> bool {
        !matches!(self.lifecycle, SpeechLifecycle::Idle)
    }

    pub(in crate::app) fn active_request_id(&self) -> Option<u64> {
        match self.lifecycle {
            SpeechLifecycle::Idle => None,
            SpeechLifecycle::Preparing { request_id } => Some(request_id),
            SpeechLifecycle::Speaking { request_id } => Some(request_id),
        }
    }

    /// Cancel any in-flight narration. Bumping the request id makes late
    /// synthesis callbacks recognizably stale.
    pub(in crate::app) fn stop_narration(&mut self) {
        self.request_id = self.request_id.wrapping_add(1);
        if let Some(playback) = self.playback.take() {
            playback.stop();
        }
        self.lifecycle = SpeechLifecycle::Idle;
        self.queue.clear();
        self.current_chunk = None;
        self.spoken_words = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_of(words: usize) -> Document {
        let text = (0..words).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        Document::from_text(&text)
    }

    #[test]
    fn splits_450_words_into_200_200_50() {
        let doc = document_of(450);
        let chunks = build_chunks(&doc, 0, 200);
        let sizes: Vec<usize> = chunks.iter().map(|c| c.word_count).collect();
        let starts: Vec<usize> = chunks.iter().map(|c| c.start).collect();
        assert_eq!(sizes, vec![200, 200, 50]);
        assert_eq!(starts, vec![0, 200, 400]);
    }

    #[test]
    fn chunks_start_mid_document() {
        let doc = document_of(10);
        let chunks = build_chunks(&doc, 7, 4);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start, 7);
        assert_eq!(chunks[0].word_count, 3);
        assert_eq!(chunks[0].text, "w7 w8 w9");
    }

    #[test]
    fn no_chunks_from_the_end_or_for_empty_documents() {
        let doc = document_of(5);
        assert!(build_chunks(&doc, 5, 3).is_empty());
        assert!(build_chunks(&Document::empty(), 0, 3).is_empty());
    }

    #[test]
    fn chunk_text_covers_exactly_its_words() {
        let doc = document_of(7);
        let chunks = build_chunks(&doc, 0, 3);
        assert_eq!(chunks[0].text, "w0 w1 w2");
        assert_eq!(chunks[1].text, "w3 w4 w5");
        assert_eq!(chunks[2].text, "w6");
    }

    #[test]
    fn stop_narration_bumps_request_id_and_clears_queue() {
        let mut speech = SpeechState::new(None);
        speech.queue = build_chunks(&document_of(10), 0, 4);
        speech.lifecycle = SpeechLifecycle::Preparing { request_id: 0 };
        let before = speech.request_id;
        speech.stop_narration();
        assert_eq!(speech.request_id, before.wrapping_add(1));
        assert!(speech.queue.is_empty());
        assert_eq!(speech.lifecycle, SpeechLifecycle::Idle);
        assert!(!speech.is_active());
    }
}
