//! PrefetchOrchestrator — the prediction/prefetch feedback loop and the
//! public entry point for recording access events.

use chrono::{Duration, Utc};
use tracing::{debug, warn};

use lectio_cache::CacheCoordinator;
use lectio_core::config::PredictionConfig;
use lectio_core::errors::LectioResult;
use lectio_core::models::{AccessEvent, ContentId, PredictionResult, ReadingPattern};
use lectio_core::traits::{IContentStore, IEntryStore, IEventStore};

use crate::analyzer::PatternAnalyzer;
use crate::cache::PatternCache;
use crate::engine::PredictionEngine;

/// Cache key for a prefetched section.
pub fn section_key(content: &ContentId) -> String {
    format!("section:{content}")
}

/// Cache key for a persisted prediction, kept for observability.
fn prediction_key(content: &ContentId) -> String {
    format!("prediction:{content}")
}

/// Owns the cache coordinator plus the event-log and content collaborators,
/// and drives the record → analyze → predict → prefetch loop.
pub struct PrefetchOrchestrator<S, E, C>
where
    S: IEntryStore,
    E: IEventStore,
    C: IContentStore,
{
    coordinator: CacheCoordinator<S>,
    events: E,
    content: C,
    patterns: PatternCache,
    config: PredictionConfig,
}

impl<S, E, C> PrefetchOrchestrator<S, E, C>
where
    S: IEntryStore,
    E: IEventStore,
    C: IContentStore,
{
    pub fn new(
        coordinator: CacheCoordinator<S>,
        events: E,
        content: C,
        config: PredictionConfig,
    ) -> Self {
        Self {
            coordinator,
            events,
            content,
            patterns: PatternCache::new(),
            config,
        }
    }

    /// The two-tier cache façade, for direct reads and writes.
    pub fn coordinator(&self) -> &CacheCoordinator<S> {
        &self.coordinator
    }

    /// Append a read to the event log. Invalidates the pattern memo so the
    /// next analysis sees the new event.
    pub fn record_access_event(&self, event: &AccessEvent) -> LectioResult<()> {
        self.events.append_event(event)?;
        self.patterns.invalidate();
        Ok(())
    }

    /// The reading pattern over the configured rolling window.
    pub fn current_pattern(&self) -> LectioResult<ReadingPattern> {
        if let Some(pattern) = self.patterns.get() {
            return Ok(pattern);
        }
        let since = Utc::now() - Duration::days(self.config.analysis_window_days);
        let events = self
            .events
            .query_recent(self.config.analysis_event_limit, since)?;
        let pattern = PatternAnalyzer::analyze_events(&events);
        self.patterns.insert(pattern.clone());
        Ok(pattern)
    }

    /// Predict the next likely content without touching the cache.
    pub fn predict_next(&self) -> LectioResult<Option<PredictionResult>> {
        Ok(PredictionEngine::predict(&self.current_pattern()?))
    }

    /// Run the full loop: predict, persist the prediction for observability,
    /// and prefetch predicted content when confidence clears the threshold.
    pub fn update_predictions(&self) -> LectioResult<Option<PredictionResult>> {
        let Some(prediction) = self.predict_next()? else {
            return Ok(None);
        };

        // The persisted prediction is observability data; losing it must
        // not abort the prefetch pass.
        let key = prediction_key(&prediction.next_content);
        match serde_json::to_value(&prediction) {
            Ok(body) => {
                if let Err(err) = self.coordinator.set(&key, body) {
                    warn!(key = %key, %err, "failed to persist prediction");
                }
            }
            Err(err) => warn!(key = %key, %err, "failed to serialize prediction"),
        }

        if prediction.confidence >= self.config.prefetch_threshold {
            self.prefetch(&prediction.next_content)?;
            for related in &prediction.related_content {
                self.prefetch(related)?;
            }
        } else {
            debug!(
                confidence = prediction.confidence,
                threshold = self.config.prefetch_threshold,
                "confidence below threshold, skipping prefetch"
            );
        }

        Ok(Some(prediction))
    }

    /// Non-predictive bootstrap: warm the curated content list at default
    /// priority. Returns the number of sections cached.
    pub fn warmup_cache(&self) -> LectioResult<usize> {
        let mut warmed = 0;
        for content in &self.config.warmup_content {
            let items = self.content.fetch_section(content)?;
            if items.is_empty() {
                continue;
            }
            self.coordinator
                .set(&section_key(content), serde_json::json!(items))?;
            warmed += 1;
        }
        debug!(warmed, "cache warmup complete");
        Ok(warmed)
    }

    /// Fetch one section and cache it at prefetch TTL and priority.
    /// Missing content is skipped silently: a section past the end of a
    /// collection legitimately has no items.
    fn prefetch(&self, content: &ContentId) -> LectioResult<()> {
        let items = self.content.fetch_section(content)?;
        if items.is_empty() {
            debug!(%content, "no items returned, skipping prefetch");
            return Ok(());
        }
        self.coordinator.set_with(
            &section_key(content),
            serde_json::json!(items),
            Duration::seconds(self.config.prefetch_ttl_secs),
            self.config.prefetch_priority,
        )?;
        debug!(%content, "prefetched");
        Ok(())
    }
}
