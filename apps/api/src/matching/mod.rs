// Job-matching engine: fixed vocabularies, candidate profile inference, and
// the posting scorer. Inference is recomputed per request — no derived
// fields are persisted.

pub mod profile;
pub mod scorer;
pub mod vocabulary;
