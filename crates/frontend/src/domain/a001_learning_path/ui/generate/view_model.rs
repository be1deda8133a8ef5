//! Learning Path Generate - View Model

use super::model::generate;
use crate::domain::a001_learning_path::ui::details::LearningPathDetailsVm;
use crate::shared::query;
use contracts::domain::a001_learning_path::{LearningPathRequest, TopicError};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Query param used to prefill (and remember) the topic
pub const TOPIC_PARAM: &str = "topic";

/// Решение по нажатию «Сгенерировать»:
/// `Ok(None)` - запрос уже выполняется, нажатие игнорируется;
/// `Ok(Some(_))` - отправить запрос; `Err(_)` - показать ошибку, ничего не отправлять.
pub fn prepare_submit(
    in_flight: bool,
    topic: &str,
) -> Result<Option<LearningPathRequest>, TopicError> {
    if in_flight {
        return Ok(None);
    }
    LearningPathRequest::new(topic, None).map(Some)
}

#[derive(Clone, Copy)]
pub struct GenerateVm {
    pub topic: RwSignal<String>,
    pub in_flight: RwSignal<bool>,
    pub elapsed_secs: RwSignal<u64>,
    pub error: RwSignal<Option<String>>,
    /// Результат показывается теми же вкладками, что и на странице плана
    pub details: LearningPathDetailsVm,
}

impl GenerateVm {
    pub fn new() -> Self {
        Self {
            topic: RwSignal::new(String::new()),
            in_flight: RwSignal::new(false),
            elapsed_secs: RwSignal::new(0),
            error: RwSignal::new(None),
            details: LearningPathDetailsVm::new(),
        }
    }

    pub fn prefill(&self, topic: Option<String>) {
        if let Some(topic) = topic.filter(|t| !t.trim().is_empty()) {
            self.topic.set(topic);
        }
    }

    /// Отправить тему. Каждый вызов даёт не больше одного запроса,
    /// а его завершение - ровно одно из: результат или ошибка.
    pub fn submit(&self) {
        let vm = *self;
        let request = match prepare_submit(vm.in_flight.get_untracked(), &vm.topic.get_untracked()) {
            Ok(Some(request)) => request,
            Ok(None) => {
                log::debug!("generate already in flight, submit ignored");
                return;
            }
            Err(e) => {
                vm.details.clear();
                vm.error.set(Some(e.to_string()));
                return;
            }
        };

        vm.error.set(None);
        vm.details.clear();
        vm.elapsed_secs.set(0);
        vm.in_flight.set(true);
        query::replace_param(TOPIC_PARAM, &request.topic);
        log::info!("generating learning path for '{}'", request.topic);

        spawn_local(async move {
            let started = js_sys::Date::now();
            let ticker = Interval::new(1_000, move || {
                let secs = (js_sys::Date::now() - started) / 1000.0;
                vm.elapsed_secs.set(secs.max(0.0) as u64);
            });

            let outcome = generate(&request).await;
            drop(ticker);

            match outcome {
                Ok(path) => {
                    log::info!(
                        "learning path ready: {} modules, {} videos, {} questions",
                        path.modules.len(),
                        path.youtube_recommendations.len(),
                        path.quiz_questions.len()
                    );
                    vm.details.show(path);
                }
                Err(e) => {
                    log::warn!("generate failed: {}", e);
                    vm.error.set(Some(e.to_string()));
                }
            }
            vm.in_flight.set(false);
        });
    }
}

impl Default for GenerateVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_submit_sends_trimmed_topic() {
        let request = prepare_submit(false, "  Machine Learning ").unwrap().unwrap();
        assert_eq!(request.topic, "Machine Learning");
        assert_eq!(request.user_id, None);
    }

    #[test]
    fn test_prepare_submit_ignored_while_in_flight() {
        assert_eq!(prepare_submit(true, "Rust"), Ok(None));
        assert_eq!(prepare_submit(true, ""), Ok(None));
    }

    #[test]
    fn test_prepare_submit_rejects_blank_topic() {
        assert_eq!(prepare_submit(false, "   "), Err(TopicError::Empty));
    }
}
