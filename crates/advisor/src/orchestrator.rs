//! # Advisor Session
//!
//! This module coordinates one user's path through the advisor:
//! 1. Ask each scripted question
//! 2. Fold every answer into the profile
//! 3. Once the script is done, rank the catalog for that profile
//!
//! ## Learning Goals
//!
//! This component teaches you:
//! - Sharing read-only state (catalog, engine) across sessions with `Arc`
//! - Keeping mutable per-user state owned by exactly one session
//! - Adding context to errors with anyhow

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;

use card_data::{Catalog, UserProfile};
use conversation::{ChatMessage, ConversationEngine, Step};
use scoring::{Recommendation, ScoringEngine};

/// Where the dialog stands after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionProgress {
    /// More questions remain
    Next { answered: usize, total: usize },
    /// Every question has been answered; recommendations are ready
    Complete,
}

/// One user's advisor session.
///
/// The catalog and scoring engine are shared; the dialog is not.
pub struct AdvisorSession {
    catalog: Arc<Catalog>,
    engine: Arc<ScoringEngine>,
    dialog: ConversationEngine,
}

impl AdvisorSession {
    /// Start a session at the first question.
    ///
    /// # Arguments
    /// * `catalog` - Cards to recommend from, shared read-only
    /// * `engine` - Scoring engine, shared read-only
    pub fn new(catalog: Arc<Catalog>, engine: Arc<ScoringEngine>) -> Self {
        Self {
            catalog,
            engine,
            dialog: ConversationEngine::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The question awaiting an answer, if any.
    pub fn current_step(&self) -> Option<&Step> {
        self.dialog.current_step()
    }

    /// Record an answer to the current question.
    pub fn answer(&mut self, raw: &str) -> Result<SessionProgress> {
        let step_id = self.dialog.current_step().map(|step| step.id);
        let done = self
            .dialog
            .process_answer(raw)
            .with_context(|| format!("Failed to record answer {raw:?}"))?;

        if done {
            info!("Advisor dialog complete");
            return Ok(SessionProgress::Complete);
        }
        let (answered, total) = self.dialog.progress();
        info!("Answered {:?} ({}/{})", step_id, answered, total);
        Ok(SessionProgress::Next { answered, total })
    }

    pub fn is_complete(&self) -> bool {
        self.dialog.is_complete()
    }

    pub fn profile(&self) -> &UserProfile {
        self.dialog.profile()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        self.dialog.transcript()
    }

    /// Ranked cards for the finished dialog.
    ///
    /// # Errors
    /// If questions remain unanswered.
    pub fn recommendations(&self) -> Result<Vec<Recommendation<'_>>> {
        if !self.dialog.is_complete() {
            let (answered, total) = self.dialog.progress();
            bail!("Dialog incomplete: {answered} of {total} questions answered");
        }
        Ok(self.recommend_for(self.dialog.profile()))
    }

    /// Rank the shared catalog for any profile, finished or not.
    pub fn recommend_for(&self, profile: &UserProfile) -> Vec<Recommendation<'_>> {
        self.engine.get_recommendations(profile, &self.catalog)
    }

    /// Discard the dialog and start over.
    pub fn restart(&mut self) {
        self.dialog.reset();
        info!("Advisor session restarted");
    }
}
