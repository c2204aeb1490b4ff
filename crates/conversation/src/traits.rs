//! Core trait for turning a raw answer into profile fields.

use card_data::UserProfile;

/// Writes one step's answer into the profile.
///
/// ## Design Note
/// - `Send + Sync` so a script can be built once and shared
/// - Parsers never fail: an answer they do not recognise is stored as a
///   zero/default value instead of being rejected
/// - Parsers only add fields; they never clear what earlier steps wrote
pub trait AnswerParser: Send + Sync {
    /// Name of the profile field this parser fills (for logging)
    fn field(&self) -> &str;

    /// Apply the raw answer string to the profile.
    fn apply(&self, answer: &str, profile: &mut UserProfile);
}
