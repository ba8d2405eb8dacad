use chrono::{Duration, TimeZone, Utc};

use lectio_core::models::{AccessEvent, ContentId, SequenceKind};
use lectio_prediction::PatternAnalyzer;

fn event_at_hour(collection: &str, section: u32, hour: u32) -> AccessEvent {
    let mut event = AccessEvent::new(collection, section);
    event.timestamp = Utc.with_ymd_and_hms(2026, 6, 1, hour, 0, 0).unwrap();
    event
}

#[test]
fn empty_history_returns_the_neutral_default() {
    let pattern = PatternAnalyzer::analyze_events(&[]);
    assert_eq!(pattern.sequence, SequenceKind::Sequential);
    assert_eq!(pattern.preferred_hour, 9);
    assert_eq!(pattern.average_session_minutes, 5.0);
    assert_eq!(pattern.average_items_per_session, 10.0);
    assert!(pattern.common_content.is_empty());
    assert!(pattern.last_content.is_none());
}

#[test]
fn strictly_increasing_sections_classify_sequential() {
    // Newest first: sections 10 down to 1 in one collection.
    let events: Vec<AccessEvent> = (1..=10)
        .rev()
        .map(|section| AccessEvent::new("essays", section))
        .collect();

    let pattern = PatternAnalyzer::analyze_events(&events);
    assert_eq!(pattern.sequence, SequenceKind::Sequential);
    assert_eq!(pattern.last_content, Some(ContentId::new("essays", 10)));
}

#[test]
fn scattered_sections_classify_random() {
    let sections = [3, 40, 12, 90, 7, 55, 21];
    let events: Vec<AccessEvent> = sections
        .iter()
        .map(|&section| AccessEvent::new("essays", section))
        .collect();

    let pattern = PatternAnalyzer::analyze_events(&events);
    assert_eq!(pattern.sequence, SequenceKind::Random);
}

#[test]
fn half_adjacent_history_classifies_mixed() {
    // 5 events, 4 pairs, 2 adjacent: ratio 0.5.
    let events = vec![
        AccessEvent::new("a", 5),
        AccessEvent::new("a", 4),
        AccessEvent::new("b", 20),
        AccessEvent::new("b", 19),
        AccessEvent::new("c", 1),
    ];
    let pattern = PatternAnalyzer::analyze_events(&events);
    assert_eq!(pattern.sequence, SequenceKind::Mixed);
}

#[test]
fn adjacency_requires_the_same_collection() {
    // Consecutive section numbers across different collections do not count.
    let events = vec![
        AccessEvent::new("a", 2),
        AccessEvent::new("b", 1),
        AccessEvent::new("c", 2),
        AccessEvent::new("d", 1),
    ];
    let pattern = PatternAnalyzer::analyze_events(&events);
    assert_eq!(pattern.sequence, SequenceKind::Random);
}

#[test]
fn common_content_is_top_five_by_frequency() {
    let mut events = Vec::new();
    for (collection, count) in [("a", 6), ("b", 5), ("c", 4), ("d", 3), ("e", 2), ("f", 1)] {
        for _ in 0..count {
            events.push(AccessEvent::new(collection, 1));
        }
    }

    let pattern = PatternAnalyzer::analyze_events(&events);
    assert_eq!(pattern.common_content.len(), 5);
    assert_eq!(pattern.common_content[0], ContentId::new("a", 1));
    assert_eq!(pattern.common_content[4], ContentId::new("e", 1));
}

#[test]
fn preferred_hour_ties_resolve_to_the_lowest_hour() {
    let events = vec![
        event_at_hour("a", 1, 21),
        event_at_hour("a", 2, 21),
        event_at_hour("a", 3, 7),
        event_at_hour("a", 4, 7),
        event_at_hour("a", 5, 12),
    ];
    let pattern = PatternAnalyzer::analyze_events(&events);
    assert_eq!(pattern.preferred_hour, 7);
}

#[test]
fn last_content_is_the_newest_event() {
    let now = Utc::now();
    let mut newest = AccessEvent::new("essays", 42);
    newest.timestamp = now;
    let mut older = AccessEvent::new("letters", 3);
    older.timestamp = now - Duration::hours(1);

    // Analyzer expects newest-first ordering, as the event store returns.
    let pattern = PatternAnalyzer::analyze_events(&[newest, older]);
    assert_eq!(pattern.last_content, Some(ContentId::new("essays", 42)));
}
