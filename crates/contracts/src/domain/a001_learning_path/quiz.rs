use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Вопрос теста
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: &str) -> bool {
        option.trim() == self.correct_answer.trim()
    }

    /// Позиция правильного ответа среди вариантов.
    /// `None`, если сервер прислал ответ, которого нет в списке.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| self.is_correct(o))
    }
}

/// Выбранные пользователем варианты: индекс вопроса -> индекс варианта
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    selected: BTreeMap<usize, usize>,
}

impl QuizAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, question: usize, option: usize) {
        self.selected.insert(question, option);
    }

    pub fn selected(&self, question: usize) -> Option<usize> {
        self.selected.get(&question).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.selected.len()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Подсчитать результат. Ответы на вопросы вне диапазона и
    /// несуществующие варианты не засчитываются.
    pub fn score(&self, questions: &[QuizQuestion]) -> QuizScore {
        let mut correct = 0;
        let mut answered = 0;
        for (&q_idx, &o_idx) in &self.selected {
            let Some(question) = questions.get(q_idx) else {
                continue;
            };
            let Some(option) = question.options.get(o_idx) else {
                continue;
            };
            answered += 1;
            if question.is_correct(option) {
                correct += 1;
            }
        }
        QuizScore {
            correct,
            answered,
            total: questions.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl QuizScore {
    /// Процент правильных от общего числа вопросов, округлённый вниз
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.correct * 100 / self.total
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], correct: &str) -> QuizQuestion {
        QuizQuestion {
            question: "?".into(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer: correct.into(),
        }
    }

    #[test]
    fn test_correct_index() {
        let q = question(&["A", "B", "C", "D"], "C");
        assert_eq!(q.correct_index(), Some(2));
        assert!(q.is_correct("C"));
        assert!(!q.is_correct("A"));
    }

    #[test]
    fn test_correct_answer_missing_from_options() {
        let q = question(&["A", "B"], "Z");
        assert_eq!(q.correct_index(), None);
    }

    #[test]
    fn test_correct_answer_ignores_surrounding_whitespace() {
        let q = question(&["A programming language ", "A snake"], "A programming language");
        assert_eq!(q.correct_index(), Some(0));
    }

    #[test]
    fn test_score() {
        let questions = vec![
            question(&["A", "B"], "A"),
            question(&["A", "B"], "B"),
            question(&["A", "B"], "A"),
            question(&["A", "B"], "B"),
        ];
        let mut answers = QuizAnswers::new();
        answers.select(0, 0);
        answers.select(1, 0);
        answers.select(2, 0);

        let score = answers.score(&questions);
        assert_eq!(score.correct, 2);
        assert_eq!(score.answered, 3);
        assert_eq!(score.total, 4);
        assert_eq!(score.percent(), 50);
    }

    #[test]
    fn test_reselect_replaces_previous_choice() {
        let questions = vec![question(&["A", "B"], "B")];
        let mut answers = QuizAnswers::new();
        answers.select(0, 0);
        answers.select(0, 1);
        assert_eq!(answers.selected(0), Some(1));
        assert_eq!(answers.answered_count(), 1);
        assert_eq!(answers.score(&questions).correct, 1);
    }

    #[test]
    fn test_out_of_range_answers_not_counted() {
        let questions = vec![question(&["A", "B"], "A")];
        let mut answers = QuizAnswers::new();
        answers.select(0, 7);
        answers.select(3, 0);

        let score = answers.score(&questions);
        assert_eq!(score.answered, 0);
        assert_eq!(score.correct, 0);
    }

    #[test]
    fn test_percent_without_questions() {
        let score = QuizAnswers::new().score(&[]);
        assert_eq!(score.percent(), 0);
    }
}
