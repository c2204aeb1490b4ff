//! The stateful question-and-answer dialog.
//!
//! ## Algorithm
//! 1. The current step's parser writes the raw answer into the profile
//! 2. The step index advances by one
//! 3. Once the index reaches the script length the profile is complete
//!
//! Rust concept: the engine owns its profile and hands out `&UserProfile`
//! while the dialog runs, then gives it away with `into_profile`.

use crate::error::{ConversationError, Result};
use crate::script::{default_script, Step};
use crate::transcript::{ChatMessage, Transcript};
use card_data::UserProfile;
use tracing::debug;

/// One user's dialog. Not shared across sessions.
#[derive(Debug)]
pub struct ConversationEngine {
    script: Vec<Step>,
    index: usize,
    profile: UserProfile,
    transcript: Transcript,
}

impl ConversationEngine {
    /// Engine over the standard nine-question script.
    pub fn new() -> Self {
        Self::with_script(default_script())
    }

    pub fn with_script(script: Vec<Step>) -> Self {
        let mut engine = Self {
            script,
            index: 0,
            profile: UserProfile::new(),
            transcript: Transcript::default(),
        };
        engine.ask_current();
        engine
    }

    /// The step awaiting an answer, or `None` once the dialog is complete.
    pub fn current_step(&self) -> Option<&Step> {
        self.script.get(self.index)
    }

    /// Apply `raw` to the current step and advance.
    ///
    /// Returns `Ok(true)` when this answer completed the script. No answer
    /// text is rejected; unrecognised options become zero values.
    ///
    /// # Errors
    /// `AlreadyComplete` if every step has already been answered.
    pub fn process_answer(&mut self, raw: &str) -> Result<bool> {
        let step = self
            .script
            .get(self.index)
            .ok_or(ConversationError::AlreadyComplete {
                steps: self.script.len(),
            })?;

        step.parser().apply(raw, &mut self.profile);
        debug!(
            step = step.id,
            field = step.parser().field(),
            answer = raw,
            "Answer applied"
        );

        self.transcript.push_user(raw);
        self.index += 1;

        let complete = self.is_complete();
        if complete {
            debug!(steps = self.script.len(), "Conversation complete");
        } else {
            self.ask_current();
        }
        Ok(complete)
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.script.len()
    }

    /// The live profile built so far.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn into_profile(self) -> UserProfile {
        self.profile
    }

    /// Back to the first step with an empty profile and transcript.
    pub fn reset(&mut self) {
        self.index = 0;
        self.profile = UserProfile::new();
        self.transcript.clear();
        self.ask_current();
        debug!("Conversation reset");
    }

    /// `(answered, total)` step counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.index.min(self.script.len()), self.script.len())
    }

    pub fn step_count(&self) -> usize {
        self.script.len()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        self.transcript.messages()
    }

    fn ask_current(&mut self) {
        if let Some(step) = self.script.get(self.index) {
            self.transcript.push_bot(step.question, &step.options);
        }
    }
}

impl Default for ConversationEngine {
    fn default() -> Self {
        Self::new()
    }
}
