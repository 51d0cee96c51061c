//! Conversation transcript reconstruction around a single line.

use crate::error::CoreError;
use crate::types::DbId;

/// A line of a conversation together with the name of its speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationLine {
    pub line_id: DbId,
    pub line_sort: i32,
    pub speaker_name: String,
    pub text: String,
}

/// One entry of a rendered transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub speaker_name: String,
    pub text: String,
    pub is_highlighted: bool,
}

/// Order the lines of a conversation and mark `highlighted_line_id`.
///
/// The full conversation is returned regardless of where the highlighted
/// line falls. Lines are ordered by `line_sort`, then `line_id`.
///
/// Returns [`CoreError::Internal`] if the highlighted line is not part of
/// `lines`, since the caller fetched the conversation through that line.
pub fn build_transcript(
    highlighted_line_id: DbId,
    mut lines: Vec<ConversationLine>,
) -> Result<Vec<TranscriptEntry>, CoreError> {
    if !lines.iter().any(|l| l.line_id == highlighted_line_id) {
        return Err(CoreError::Internal(format!(
            "line {highlighted_line_id} missing from its own conversation"
        )));
    }

    lines.sort_by(|a, b| {
        a.line_sort
            .cmp(&b.line_sort)
            .then_with(|| a.line_id.cmp(&b.line_id))
    });

    Ok(lines
        .into_iter()
        .map(|l| TranscriptEntry {
            is_highlighted: l.line_id == highlighted_line_id,
            speaker_name: l.speaker_name,
            text: l.text,
        })
        .collect())
}
