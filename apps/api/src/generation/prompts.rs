// LLM prompt constants for question generation.
// Shared JSON-only fragment comes from llm_client::prompts.

/// System prompt for question generation.
pub const QUESTION_SYSTEM: &str =
    "You are an expert programming interviewer writing multiple-choice questions. \
    {json_only}";

/// Question generation prompt template.
/// Replace: `{count}`, `{difficulty}`, `{topic}`.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Generate {count} multiple choice questions for a {difficulty} level {topic} programming interview.
Each question has exactly 4 options with one correct answer.

Return a JSON object with this EXACT schema (no extra fields):
{
  "questions": [
    {
      "question": "question text",
      "options": ["option1", "option2", "option3", "option4"],
      "correct_answer": "correct option text"
    }
  ]
}

Rules:
- Exactly {count} questions.
- Exactly 4 options per question, all distinct.
- "correct_answer" must be copied verbatim from the options.
- Questions should test both theoretical knowledge and practical programming concepts.
- Vary which position holds the correct option."#;
