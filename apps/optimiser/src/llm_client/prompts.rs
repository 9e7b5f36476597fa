// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Pages and keyword lists are Thai, English, or a mix of both.
pub const MIXED_LANGUAGE_NOTE: &str = "The content may be in Thai or English, or a mix of both. \
    Keywords and phrases may be in either language depending on the content.";

/// Appended to system prompts whose output is read by Thai content editors.
pub const THAI_OUTPUT_INSTRUCTION: &str = "Your output should be in Thai.";

/// Joins a base system prompt with cross-cutting fragments.
pub fn compose_system(base: &str, fragments: &[&str]) -> String {
    std::iter::once(base)
        .chain(fragments.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_system_joins_with_spaces() {
        assert_eq!(compose_system("Base.", &["One.", "Two."]), "Base. One. Two.");
        assert_eq!(compose_system("Base.", &[]), "Base.");
    }
}
