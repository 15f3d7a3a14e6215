/// Normalized (mood, watching-context) pair used as the key for every table
/// lookup in the engine: mode selection, boost tables and the strong-context
/// filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextKey {
    mood: String,
    context: String,
}

/// Canonicalizes a free-text watching context by substring containment.
///
/// Checked in priority order, first match wins. This tolerates typos like
/// "friendas" or phrasings like "with my partner". A string matching nothing
/// is kept as-is and will simply miss every lookup table downstream.
pub fn canonicalize_context(raw: &str) -> String {
    let trimmed = raw.trim().to_lowercase();
    if trimmed.contains("friend") {
        "friends".to_string()
    } else if trimmed.contains("partner") || trimmed.contains("spouse") {
        "partner".to_string()
    } else if trimmed.contains("famil") {
        "family".to_string()
    } else if trimmed.contains("alone") || trimmed.contains("solo") {
        "alone".to_string()
    } else {
        trimmed
    }
}

impl ContextKey {
    /// Builds a key from raw user input, normalizing both parts
    pub fn new(mood: &str, watching_context: &str) -> Self {
        Self {
            mood: mood.trim().to_lowercase(),
            context: canonicalize_context(watching_context),
        }
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// A strong pair gets rules-only blending and a dedicated genre filter
    pub fn is_strong(&self) -> bool {
        matches!(
            (self.mood.as_str(), self.context.as_str()),
            ("romantic", "partner") | ("scared", "alone") | ("excited", "friends")
        )
    }
}

impl std::fmt::Display for ContextKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.mood, self.context)
    }
}
