pub mod gemini_tutor;
pub mod prompt;
pub mod schema;

pub use gemini_tutor::GeminiTutor;
