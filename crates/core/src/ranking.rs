//! Conversation-partner ranking.
//!
//! "Lines together" is a movie-wide co-occurrence count: every line spoken
//! by the reference character is paired with every line spoken by another
//! character of the same movie, whether or not the two lines belong to the
//! same conversation. For a partner `D` of reference `C` this is
//! `lines(C) * lines(D)`.

use std::cmp::Ordering;

use crate::types::DbId;

/// Number of partners returned by the character lookup endpoint.
pub const MAX_PARTNERS: usize = 10;

/// Per-character line count inside one movie, as fetched from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterLineCount {
    pub character_id: DbId,
    pub name: String,
    pub gender: Option<String>,
    pub line_count: i64,
}

/// A ranked partner of the reference character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerStat {
    pub character_id: DbId,
    pub character_name: String,
    pub gender: Option<String>,
    pub lines_together_count: i64,
}

/// Rank the characters of a movie by their co-occurrence with `reference_id`.
///
/// `own_line_count` is the number of lines spoken by the reference character
/// and `candidates` the line counts of the characters speaking in the same
/// movie. The reference character itself and characters with a zero count
/// are dropped. Results are ordered by count descending, then character id
/// ascending, and truncated to `limit`.
pub fn rank_partners(
    reference_id: DbId,
    own_line_count: i64,
    candidates: Vec<CharacterLineCount>,
    limit: usize,
) -> Vec<PartnerStat> {
    if own_line_count <= 0 || limit == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<PartnerStat> = candidates
        .into_iter()
        .filter(|c| c.character_id != reference_id && c.line_count > 0)
        .map(|c| PartnerStat {
            character_id: c.character_id,
            character_name: c.name,
            gender: c.gender,
            lines_together_count: own_line_count.saturating_mul(c.line_count),
        })
        .collect();

    ranked.sort_by(compare_partners);
    ranked.truncate(limit);
    ranked
}

fn compare_partners(a: &PartnerStat, b: &PartnerStat) -> Ordering {
    b.lines_together_count
        .cmp(&a.lines_together_count)
        .then_with(|| a.character_id.cmp(&b.character_id))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
