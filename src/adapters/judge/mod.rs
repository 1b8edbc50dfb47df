//! ItemJudge adapters.
//!
//! The keyword judge is the default, deterministic classifier; the seeded judge
//! replays the demo behaviour (random draws) from a fixed seed.

pub mod keyword_judge;
pub mod seeded_judge;

pub use keyword_judge::KeywordJudge;
pub use seeded_judge::SeededJudge;
