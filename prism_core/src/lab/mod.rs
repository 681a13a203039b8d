//! The interactive lab: a thin stateful adapter around the pure scorer.
//!
//! The lab owns the selection state the presentation layer would otherwise
//! keep in globals (selected topic, current text, slider position) and turns
//! [`LabEvent`]s into [`LabView`]s. Rendering stays behind [`Renderer`].

mod debounce;

pub use debounce::*;

use prism_rules::{Domain, DomainCatalog, KeywordTable};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::LabConfig;
use crate::events::{Intensity, LabEvent};
use crate::scorer::{AnalysisResult, ValueScorer};

/// Receives every view the lab produces.
pub trait Renderer {
    fn render(&mut self, view: &LabView);
}

impl<F: FnMut(&LabView)> Renderer for F {
    fn render(&mut self, view: &LabView) {
        self(view)
    }
}

/// Everything the presentation layer displays after one recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabView {
    pub domain_id: String,
    pub label: String,
    pub detected_topic: String,
    pub current_frame: String,
    pub opponent_frame: String,
    /// Why the analysed argument loses the counterpart.
    pub losing_reason: String,
    pub intensity: Intensity,
    pub analysis: AnalysisResult,
}

impl LabView {
    fn new(domain: &Domain, intensity: Intensity, analysis: AnalysisResult) -> Self {
        Self {
            domain_id: domain.id.clone(),
            label: domain.label.clone(),
            detected_topic: domain.detected_topic.clone(),
            current_frame: domain.current_frame.clone(),
            opponent_frame: domain.opponent_frame.clone(),
            losing_reason: domain.losing_reason.clone(),
            intensity,
            analysis,
        }
    }

    /// The argument as analysed, i.e. the one that is "losing" the room.
    pub fn losing_argument(&self) -> &str {
        &self.analysis.text
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Selection state plus the scorer it feeds.
#[derive(Debug, Clone)]
pub struct PrismLab {
    catalog: DomainCatalog,
    scorer: ValueScorer,
    config: LabConfig,
    domain_id: String,
    text: String,
    intensity_value: u8,
    debouncer: Debouncer,
}

impl PrismLab {
    /// Create a lab showing the catalog's default domain and its example.
    pub fn new(catalog: DomainCatalog, keywords: KeywordTable, config: LabConfig) -> Self {
        let default = catalog.default_domain();
        let domain_id = default.id.clone();
        let text = default.default_example.clone();
        let scorer = ValueScorer::new(keywords, config.scorer.clone());
        let debouncer = Debouncer::new(config.debounce());

        Self {
            catalog,
            scorer,
            config,
            domain_id,
            text,
            intensity_value: 0,
            debouncer,
        }
    }

    /// A lab over the built-in catalog and vocabulary.
    pub fn with_defaults() -> Self {
        Self::new(
            DomainCatalog::standard(),
            KeywordTable::standard(),
            LabConfig::default(),
        )
    }

    /// The currently selected domain.
    pub fn domain(&self) -> &Domain {
        self.catalog.resolve(&self.domain_id)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn intensity(&self) -> Intensity {
        Intensity::from_value(self.intensity_value, &self.config.intensity)
    }

    pub fn catalog(&self) -> &DomainCatalog {
        &self.catalog
    }

    /// Whether a debounced recomputation is waiting.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Apply an event. Topic and intensity changes recompute immediately;
    /// text edits only (re)arm the debounce timer.
    pub fn handle(&mut self, event: LabEvent, now: Instant) -> Option<LabView> {
        match event {
            LabEvent::TopicSelected { domain_id } => {
                let domain = self.catalog.resolve(&domain_id);
                tracing::debug!(requested = %domain_id, selected = %domain.id, "topic selected");
                self.domain_id = domain.id.clone();
                self.text = domain.default_example.clone();
                self.debouncer.cancel();
                Some(self.analyze())
            }
            LabEvent::IntensityChanged { value } => {
                self.intensity_value = value.min(100);
                Some(self.analyze())
            }
            LabEvent::TextEdited { text } => {
                self.text = text;
                self.debouncer.schedule(now);
                None
            }
        }
    }

    /// Run the pending recomputation if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<LabView> {
        if self.debouncer.fire(now) {
            tracing::debug!(domain = %self.domain_id, "debounced recompute");
            Some(self.analyze())
        } else {
            None
        }
    }

    /// Recompute the view from the current state.
    pub fn analyze(&self) -> LabView {
        let domain = self.domain();
        let analysis = self.scorer.score_domain(&self.text, domain);
        LabView::new(domain, self.intensity(), analysis)
    }

    /// [`handle`](Self::handle), forwarding any view to `renderer`.
    pub fn dispatch(&mut self, event: LabEvent, now: Instant, renderer: &mut impl Renderer) {
        if let Some(view) = self.handle(event, now) {
            renderer.render(&view);
        }
    }

    /// [`poll`](Self::poll), forwarding any view to `renderer`.
    pub fn poll_into(&mut self, now: Instant, renderer: &mut impl Renderer) {
        if let Some(view) = self.poll(now) {
            renderer.render(&view);
        }
    }
}

impl Default for PrismLab {
    fn default() -> Self {
        Self::with_defaults()
    }
}
