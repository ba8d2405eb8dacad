use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::json;

use lectio_cache::CacheCoordinator;
use lectio_core::config::{CacheConfig, PredictionConfig};
use lectio_core::errors::LectioResult;
use lectio_core::models::{AccessEvent, ContentId};
use lectio_core::traits::{IContentStore, IEntryStore};
use lectio_prediction::{section_key, PrefetchOrchestrator};
use lectio_storage::StorageEngine;

// ── Mock content store ────────────────────────────────────────────────────

struct MockContentStore {
    sections: Mutex<HashMap<ContentId, Vec<String>>>,
}

impl MockContentStore {
    fn new() -> Self {
        Self {
            sections: Mutex::new(HashMap::new()),
        }
    }

    fn with_section(self, content: ContentId, items: &[&str]) -> Self {
        self.sections
            .lock()
            .unwrap()
            .insert(content, items.iter().map(|s| s.to_string()).collect());
        self
    }
}

impl IContentStore for MockContentStore {
    fn fetch_section(&self, content: &ContentId) -> LectioResult<Vec<String>> {
        Ok(self
            .sections
            .lock()
            .unwrap()
            .get(content)
            .cloned()
            .unwrap_or_default())
    }
}

type Orchestrator = PrefetchOrchestrator<Arc<StorageEngine>, Arc<StorageEngine>, MockContentStore>;

fn orchestrator(content: MockContentStore, config: PredictionConfig) -> Orchestrator {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let coordinator = CacheCoordinator::new(Arc::clone(&store), CacheConfig::default());
    PrefetchOrchestrator::new(coordinator, store, content, config)
}

fn record_sequential_reads(orch: &Orchestrator, collection: &str, sections: impl Iterator<Item = u32>) {
    for section in sections {
        orch.record_access_event(&AccessEvent::new(collection, section))
            .unwrap();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[test]
fn sequential_history_prefetches_the_next_sections() {
    let content = MockContentStore::new()
        .with_section(ContentId::new("essays", 11), &["para one", "para two"])
        .with_section(ContentId::new("essays", 12), &["more"])
        .with_section(ContentId::new("essays", 13), &["even more"]);
    let orch = orchestrator(content, PredictionConfig::default());

    record_sequential_reads(&orch, "essays", 1..=10);

    let prediction = orch.update_predictions().unwrap().unwrap();
    assert_eq!(prediction.next_content, ContentId::new("essays", 11));
    assert_eq!(prediction.confidence, 0.9);

    // Predicted and related sections are now cached.
    for section in 11..=13 {
        let key = section_key(&ContentId::new("essays", section));
        assert!(orch.coordinator().get(&key).unwrap().is_some(), "{key} not cached");
    }
    assert_eq!(
        orch.coordinator()
            .get(&section_key(&ContentId::new("essays", 11)))
            .unwrap(),
        Some(json!(["para one", "para two"]))
    );
}

#[test]
fn prefetched_entries_carry_elevated_priority_and_ttl() {
    let content =
        MockContentStore::new().with_section(ContentId::new("essays", 11), &["text"]);
    let orch = orchestrator(content, PredictionConfig::default());
    record_sequential_reads(&orch, "essays", 1..=10);
    orch.update_predictions().unwrap();

    let row = orch
        .coordinator()
        .store()
        .get_entry(&section_key(&ContentId::new("essays", 11)))
        .unwrap()
        .unwrap();
    assert_eq!(row.priority, 8);
    assert_eq!(row.ttl_seconds, 7200);
}

#[test]
fn prediction_is_persisted_for_observability() {
    let orch = orchestrator(MockContentStore::new(), PredictionConfig::default());
    record_sequential_reads(&orch, "essays", 1..=10);
    orch.update_predictions().unwrap();

    let row = orch
        .coordinator()
        .store()
        .get_entry("prediction:essays:11")
        .unwrap()
        .unwrap();
    assert_eq!(row.value["confidence"], json!(0.9));
}

#[test]
fn missing_content_is_skipped_silently() {
    // Content store has nothing: past the end of the collection.
    let orch = orchestrator(MockContentStore::new(), PredictionConfig::default());
    record_sequential_reads(&orch, "essays", 1..=10);

    let prediction = orch.update_predictions().unwrap();
    assert!(prediction.is_some());
    assert!(orch
        .coordinator()
        .get(&section_key(&ContentId::new("essays", 11)))
        .unwrap()
        .is_none());
}

#[test]
fn low_confidence_skips_prefetch_but_still_reports() {
    let content =
        MockContentStore::new().with_section(ContentId::new("essays", 1), &["text"]);
    let orch = orchestrator(content, PredictionConfig::default());

    // Scattered sections: classifies random, confidence 0.4.
    for section in [3, 40, 12, 90, 7] {
        orch.record_access_event(&AccessEvent::new("essays", section))
            .unwrap();
    }

    let prediction = orch.update_predictions().unwrap().unwrap();
    assert_eq!(prediction.confidence, 0.4);
    assert!(orch
        .coordinator()
        .get(&section_key(&prediction.next_content))
        .unwrap()
        .is_none());
}

#[test]
fn empty_history_yields_no_prediction() {
    let orch = orchestrator(MockContentStore::new(), PredictionConfig::default());
    assert!(orch.update_predictions().unwrap().is_none());
    assert!(orch.predict_next().unwrap().is_none());
}

#[test]
fn warmup_caches_the_curated_list_at_default_priority() {
    let content = MockContentStore::new()
        .with_section(ContentId::new("classics", 1), &["intro"])
        .with_section(ContentId::new("poems", 1), &["verse"]);
    let config = PredictionConfig {
        warmup_content: vec![
            ContentId::new("classics", 1),
            ContentId::new("poems", 1),
            ContentId::new("unknown", 1),
        ],
        ..PredictionConfig::default()
    };
    let orch = orchestrator(content, config);

    // Two of three curated sections exist.
    assert_eq!(orch.warmup_cache().unwrap(), 2);

    let row = orch
        .coordinator()
        .store()
        .get_entry(&section_key(&ContentId::new("classics", 1)))
        .unwrap()
        .unwrap();
    assert_eq!(row.priority, 5);
    assert!(orch
        .coordinator()
        .get(&section_key(&ContentId::new("unknown", 1)))
        .unwrap()
        .is_none());
}

#[test]
fn recording_an_event_refreshes_the_pattern() {
    let orch = orchestrator(MockContentStore::new(), PredictionConfig::default());
    record_sequential_reads(&orch, "essays", 1..=5);
    assert_eq!(
        orch.current_pattern().unwrap().last_content,
        Some(ContentId::new("essays", 5))
    );

    orch.record_access_event(&AccessEvent::new("essays", 6))
        .unwrap();
    assert_eq!(
        orch.current_pattern().unwrap().last_content,
        Some(ContentId::new("essays", 6))
    );
}
