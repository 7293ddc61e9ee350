// Cross-cutting prompt fragments shared by the generation and analysis modules.
// Module-specific prompts live in their own prompts.rs next to the caller.

/// Appended to every system prompt that expects machine-readable output.
/// The client strips code fences defensively, but the instruction keeps the
/// common path clean.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
