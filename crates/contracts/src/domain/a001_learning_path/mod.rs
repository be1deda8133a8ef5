pub mod aggregate;
pub mod quiz;
pub mod video;

pub use aggregate::{LearningPath, LearningPathRequest, Module, TopicError, MAX_TOPIC_CHARS};
pub use quiz::{QuizAnswers, QuizQuestion, QuizScore};
pub use video::VideoRecommendation;
