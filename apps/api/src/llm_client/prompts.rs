// Shared prompt fragments. Each service that calls the LLM defines its own
// prompts.rs alongside it; this file holds what they have in common.

/// Appended to prompts whose output is parsed line by line.
pub const PLAIN_TEXT_INSTRUCTION: &str = "Use plain text with short headings \
    (for example `Title:`, `Description:`, `Key Concepts:`, `Activities:`). \
    Put list items on their own lines starting with `-` or a number.";
