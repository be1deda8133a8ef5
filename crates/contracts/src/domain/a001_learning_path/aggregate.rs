use super::quiz::QuizQuestion;
use super::video::VideoRecommendation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Максимальная длина темы (в символах, после trim)
pub const MAX_TOPIC_CHARS: usize = 200;

/// Ошибки валидации темы перед отправкой запроса
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    #[error("Введите тему")]
    Empty,

    #[error("Тема слишком длинная: {0} символов (максимум {max})", max = MAX_TOPIC_CHARS)]
    TooLong(usize),
}

/// Тело запроса POST /api/generate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPathRequest {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl LearningPathRequest {
    /// Создать запрос с проверкой темы. Тема обрезается по краям.
    pub fn new(topic: &str, user_id: Option<String>) -> Result<Self, TopicError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(TopicError::Empty);
        }
        let len = topic.chars().count();
        if len > MAX_TOPIC_CHARS {
            return Err(TopicError::TooLong(len));
        }
        Ok(Self {
            topic: topic.to_string(),
            user_id,
        })
    }
}

/// Модуль учебного плана
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub title: String,
    #[serde(default)]
    pub subtopics: Vec<String>,
}

/// Результат генерации учебного плана.
///
/// Структура приходит с сервера как есть: клиент её не валидирует и не
/// преобразует, порядок всех списков сохраняется. Отсутствующие списки
/// десериализуются как пустые.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub topic: String,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub youtube_recommendations: Vec<VideoRecommendation>,
    #[serde(default)]
    pub quiz_questions: Vec<QuizQuestion>,
}

impl LearningPath {
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
            && self.youtube_recommendations.is_empty()
            && self.quiz_questions.is_empty()
    }

    /// Общее количество подтем по всем модулям
    pub fn subtopic_count(&self) -> usize {
        self.modules.iter().map(|m| m.subtopics.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_trims_topic() {
        let req = LearningPathRequest::new("  Rust ownership \n", None).unwrap();
        assert_eq!(req.topic, "Rust ownership");
        assert_eq!(req.user_id, None);
    }

    #[test]
    fn test_request_rejects_blank_topic() {
        assert_eq!(LearningPathRequest::new("", None), Err(TopicError::Empty));
        assert_eq!(LearningPathRequest::new(" \t ", None), Err(TopicError::Empty));
    }

    #[test]
    fn test_request_rejects_long_topic() {
        let ok = "я".repeat(MAX_TOPIC_CHARS);
        assert!(LearningPathRequest::new(&ok, None).is_ok());

        let long = "я".repeat(MAX_TOPIC_CHARS + 1);
        assert_eq!(
            LearningPathRequest::new(&long, None),
            Err(TopicError::TooLong(MAX_TOPIC_CHARS + 1))
        );
    }

    #[test]
    fn test_request_omits_missing_user_id() {
        let req = LearningPathRequest::new("SQL", None).unwrap();
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "topic": "SQL" }));

        let req = LearningPathRequest::new("SQL", Some("u-1".into())).unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "topic": "SQL", "user_id": "u-1" })
        );
    }

    #[test]
    fn test_decode_full_response() {
        let body = json!({
            "id": "5b7c",
            "topic": "Python",
            "modules": [
                { "title": "Basics", "subtopics": ["Variables", "Operators"] },
                { "title": "OOP", "subtopics": ["Classes"] }
            ],
            "youtube_recommendations": [
                { "title": "Python Tutorial", "url": "https://youtube.com/watch?v=rfscVS0vtbw", "keywords": ["python"] }
            ],
            "quiz_questions": [
                { "question": "What is Python?", "options": ["A language", "A snake"], "correct_answer": "A language" }
            ]
        });

        let path: LearningPath = serde_json::from_value(body).unwrap();
        assert_eq!(path.id.as_deref(), Some("5b7c"));
        assert_eq!(path.modules.len(), 2);
        assert_eq!(path.modules[0].title, "Basics");
        assert_eq!(path.modules[1].title, "OOP");
        assert_eq!(path.subtopic_count(), 3);
        assert_eq!(path.youtube_recommendations[0].keywords, vec!["python"]);
        assert_eq!(path.quiz_questions[0].correct_answer, "A language");
        assert!(!path.is_empty());
    }

    #[test]
    fn test_decode_missing_lists_as_empty() {
        let path: LearningPath = serde_json::from_value(json!({ "topic": "Go" })).unwrap();
        assert_eq!(path.id, None);
        assert!(path.is_empty());
        assert_eq!(path.subtopic_count(), 0);
    }

    #[test]
    fn test_decode_requires_topic() {
        let res: Result<LearningPath, _> = serde_json::from_value(json!({ "modules": [] }));
        assert!(res.is_err());
    }
}
