//! Keyword-overlap answer selection.
//!
//! The matcher lowercases the query and counts, per entry, how many of the
//! entry's keywords occur in it as substrings. The entry with the strictly
//! highest count wins; on a tie the entry that appears earlier in the store
//! keeps the win. No tokenization, stemming, or inference is involved, so
//! the same query against the same entries always yields the same answer.
//!
//! Containment is plain substring containment: keyword "ar" also counts
//! inside "are". Whole-word matching would route existing queries to
//! different answers, so the behavior is part of the contract.

use crate::knowledge::KnowledgeEntry;

/// Reply used when no entry matches the query.
pub const FALLBACK_ANSWER: &str = "I'm not quite sure about that. Could you try rephrasing your question? You can ask about our services, mission, or contact details.";

/// Number of `entry` keywords contained in the lowercased query.
fn match_count(query_lower: &str, entry: &KnowledgeEntry) -> usize {
    entry
        .keywords
        .iter()
        .filter(|keyword| query_lower.contains(&keyword.to_lowercase()))
        .count()
}

/// Select the entry with the most keyword hits for `query`, scanning
/// `entries` in order. Returns `None` when no keyword of any entry is
/// contained in the query, which includes empty and whitespace-only
/// queries and an empty store.
pub fn best_match<'a>(query: &str, entries: &'a [KnowledgeEntry]) -> Option<&'a KnowledgeEntry> {
    let query_lower = query.to_lowercase();

    let mut best: Option<(&KnowledgeEntry, usize)> = None;
    for entry in entries {
        let count = match_count(&query_lower, entry);
        // Strictly greater, so the earliest entry survives a tie.
        if count > best.map_or(0, |(_, n)| n) {
            best = Some((entry, count));
        }
    }

    if let Some((entry, count)) = best {
        tracing::debug!(id = %entry.id, hits = count, "query matched");
        Some(entry)
    } else {
        tracing::debug!("query matched nothing");
        None
    }
}

/// Resolve `query` to an answer: the winning entry's text verbatim, or
/// [`FALLBACK_ANSWER`] when nothing matches.
pub fn answer_for<'a>(query: &str, entries: &'a [KnowledgeEntry]) -> &'a str {
    best_match(query, entries).map_or(FALLBACK_ANSWER, |entry| entry.answer.as_str())
}
