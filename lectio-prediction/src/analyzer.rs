//! Derives a `ReadingPattern` from a newest-first event window.

use lectio_core::constants::{
    COMMON_CONTENT_LIMIT, DEFAULT_ITEMS_PER_SESSION, DEFAULT_SESSION_MINUTES, MIXED_RATIO,
    SEQUENTIAL_RATIO,
};
use lectio_core::models::{AccessEvent, ContentId, ReadingPattern, SequenceKind};

/// Pure analysis over an event snapshot. Owns no state.
pub struct PatternAnalyzer;

impl PatternAnalyzer {
    /// Summarize a newest-first slice of events.
    ///
    /// An empty slice yields [`ReadingPattern::default()`], which downstream
    /// prediction accepts without failing.
    pub fn analyze_events(events: &[AccessEvent]) -> ReadingPattern {
        if events.is_empty() {
            return ReadingPattern::default();
        }

        ReadingPattern {
            common_content: common_content(events),
            average_session_minutes: mean(
                events
                    .iter()
                    .map(|e| e.duration_minutes.unwrap_or(DEFAULT_SESSION_MINUTES)),
            ),
            preferred_hour: preferred_hour(events),
            average_items_per_session: mean(
                events
                    .iter()
                    .map(|e| e.items_consumed.map_or(DEFAULT_ITEMS_PER_SESSION, f64::from)),
            ),
            last_content: Some(events[0].content_id()),
            sequence: classify_sequence(events),
        }
    }
}

/// Top content ids by frequency, most frequent first. Ties keep the
/// first-seen (most recent) id.
fn common_content(events: &[AccessEvent]) -> Vec<ContentId> {
    let mut counts: Vec<(ContentId, usize)> = Vec::new();
    for event in events {
        let id = event.content_id();
        match counts.iter_mut().find(|(seen, _)| *seen == id) {
            Some((_, n)) => *n += 1,
            None => counts.push((id, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(COMMON_CONTENT_LIMIT)
        .map(|(id, _)| id)
        .collect()
}

/// Hour bucket with the most events; ties resolve to the lowest hour.
fn preferred_hour(events: &[AccessEvent]) -> u32 {
    let mut buckets = [0usize; 24];
    for event in events {
        buckets[event.hour_of_day() as usize] += 1;
    }
    let (hour, _) = buckets
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
        .unwrap_or((0, &0));
    hour as u32
}

/// Classify by the share of adjacent event pairs reading consecutive
/// sections of one collection. The sequential boundary is exclusive:
/// a ratio of exactly 0.7 classifies as mixed.
fn classify_sequence(events: &[AccessEvent]) -> SequenceKind {
    if events.len() < 2 {
        return SequenceKind::Sequential;
    }

    let adjacent = events
        .windows(2)
        .filter(|pair| {
            pair[0].collection_id == pair[1].collection_id
                && pair[0].section_id.abs_diff(pair[1].section_id) == 1
        })
        .count();
    let ratio = adjacent as f64 / (events.len() - 1) as f64;

    if ratio > SEQUENTIAL_RATIO {
        SequenceKind::Sequential
    } else if ratio > MIXED_RATIO {
        SequenceKind::Mixed
    } else {
        SequenceKind::Random
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
