//! Prompt templates for the resume assistant.

pub const GENERATE_SYSTEM: &str = "You are a resume-writing assistant. \
Respond only with a JSON object containing `summary` (string), `skills` \
(array of strings), and `experience` (array of objects with `company`, \
`position`, and `description` fields). No prose outside the JSON.";

pub const GENERATE_PROMPT_TEMPLATE: &str = "\
Write resume content for the following candidate background and target role.

{background}

Return a concise professional summary (2-3 sentences), a skill list \
relevant to the target role, and one representative experience entry.";
