//! # Conversation Crate
//!
//! A fixed script of multiple-choice questions that builds a `UserProfile`
//! one answer at a time.
//!
//! ## Main Components
//!
//! - **engine**: `ConversationEngine`, the per-session dialog state
//! - **script**: The ordered steps and their serializable descriptors
//! - **brackets**: Option labels and the representative value each stores
//! - **parsers**: One `AnswerParser` per kind of question
//! - **transcript**: Bot and user messages for display
//!
//! ## Example Usage
//!
//! ```ignore
//! use conversation::ConversationEngine;
//!
//! let mut engine = ConversationEngine::new();
//! while let Some(step) = engine.current_step() {
//!     let answer = step.options[0];
//!     engine.process_answer(answer)?;
//! }
//! let profile = engine.into_profile();
//! ```
//!
//! ## Learning Goals
//!
//! 1. **Trait Objects**: `Box<dyn AnswerParser>` lets each step carry its own parsing strategy
//! 2. **Ownership**: the engine lends its profile out, then moves it out when done
//! 3. **Fallible Operations**: answering a finished dialog is a typed error, not a panic

pub mod brackets;
pub mod engine;
pub mod error;
pub mod parsers;
pub mod script;
pub mod traits;
pub mod transcript;

pub use engine::ConversationEngine;
pub use error::{ConversationError, Result};
pub use parsers::join_selections;
pub use script::{default_script, Selection, Step, StepDescriptor};
pub use traits::AnswerParser;
pub use transcript::{ChatMessage, Role};
