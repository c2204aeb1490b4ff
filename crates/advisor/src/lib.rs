//! Advisor crate for the credit card recommender.
//!
//! This crate contains the session orchestrator that ties one dialog to a
//! shared catalog and scoring engine.

pub mod orchestrator;

pub use orchestrator::{AdvisorSession, SessionProgress};
