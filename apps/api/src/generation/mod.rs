// Question generation: prompt construction, the external call, and the
// validator that gates what enters a Session.
// All LLM calls go through llm_client — no direct API calls here.

pub mod generator;
pub mod prompts;
pub mod validator;
