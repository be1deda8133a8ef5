//! Learning Path Details - View Model

use super::model::fetch_by_id;
use crate::shared::query;
use contracts::domain::a001_learning_path::{LearningPath, QuizAnswers, QuizScore};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Query param holding the active tab
pub const TAB_PARAM: &str = "tab";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsTab {
    #[default]
    Modules,
    Videos,
    Quiz,
    Json,
}

impl DetailsTab {
    pub const ALL: [DetailsTab; 4] = [
        DetailsTab::Modules,
        DetailsTab::Videos,
        DetailsTab::Quiz,
        DetailsTab::Json,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DetailsTab::Modules => "modules",
            DetailsTab::Videos => "videos",
            DetailsTab::Quiz => "quiz",
            DetailsTab::Json => "json",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            DetailsTab::Modules => "Модули",
            DetailsTab::Videos => "Видео",
            DetailsTab::Quiz => "Тест",
            DetailsTab::Json => "JSON",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DetailsTab::Modules => "modules",
            DetailsTab::Videos => "video",
            DetailsTab::Quiz => "quiz",
            DetailsTab::Json => "code",
        }
    }

    /// Tab from `?tab=`; unknown or missing keys fall back to Modules
    pub fn from_query(search: &str) -> Self {
        query::parse_query(search)
            .get(TAB_PARAM)
            .and_then(|k| Self::from_key(k))
            .unwrap_or_default()
    }
}

/// Номер последнего запроса загрузки. Ответ на более ранний запрос
/// (id сменился, пока он выполнялся) отбрасывается.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatestRequest {
    seq: u64,
}

impl LatestRequest {
    /// Новый запрос; все выданные ранее токены устаревают
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.seq == token
    }
}

#[derive(Clone, Copy)]
pub struct LearningPathDetailsVm {
    pub path: RwSignal<Option<LearningPath>>,
    pub active_tab: RwSignal<DetailsTab>,

    pub answers: RwSignal<QuizAnswers>,
    pub quiz_checked: RwSignal<bool>,

    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    latest: RwSignal<LatestRequest>,
}

impl LearningPathDetailsVm {
    pub fn new() -> Self {
        let initial_tab = DetailsTab::from_query(&query::current_search());

        Self {
            path: RwSignal::new(None),
            active_tab: RwSignal::new(initial_tab),
            answers: RwSignal::new(QuizAnswers::new()),
            quiz_checked: RwSignal::new(false),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            latest: RwSignal::new(LatestRequest::default()),
        }
    }

    fn begin_request(&self) -> u64 {
        let mut token = 0;
        self.latest.update(|l| token = l.begin());
        token
    }

    pub fn set_tab(&self, tab: DetailsTab) {
        self.active_tab.set(tab);
        query::replace_param(TAB_PARAM, tab.key());
    }

    /// Показать готовый результат (страница генерации)
    pub fn show(&self, path: LearningPath) {
        self.begin_request();
        self.loading.set(false);
        self.reset_quiz();
        self.error.set(None);
        self.path.set(Some(path));
    }

    pub fn clear(&self) {
        self.begin_request();
        self.loading.set(false);
        self.reset_quiz();
        self.path.set(None);
        self.error.set(None);
    }

    pub fn load(&self, id: String) {
        let vm = *self;
        let token = vm.begin_request();
        vm.path.set(None);
        vm.reset_quiz();

        if id.trim().is_empty() {
            vm.loading.set(false);
            vm.error.set(Some("Не указан идентификатор учебного плана".to_string()));
            return;
        }

        vm.loading.set(true);
        vm.error.set(None);

        spawn_local(async move {
            let outcome = fetch_by_id(&id).await;
            if !vm.latest.try_with_untracked(|l| l.is_current(token)).unwrap_or(false) {
                log::debug!("stale response for learning path {} dropped", id);
                return;
            }
            match outcome {
                Ok(data) => {
                    log::info!("learning path {} loaded: {}", id, data.topic);
                    vm.path.set(Some(data));
                }
                Err(e) => {
                    log::warn!("failed to load learning path {}: {}", id, e);
                    vm.error.set(Some(e.to_string()));
                }
            }
            vm.loading.set(false);
        });
    }

    pub fn topic(&self) -> Signal<String> {
        let path = self.path;
        Signal::derive(move || path.with(|p| p.as_ref().map(|p| p.topic.clone()).unwrap_or_default()))
    }

    /// Количество элементов для бейджа вкладки
    pub fn count(&self, tab: DetailsTab) -> Signal<Option<usize>> {
        let path = self.path;
        Signal::derive(move || {
            path.with(|p| {
                p.as_ref().and_then(|p| match tab {
                    DetailsTab::Modules => Some(p.modules.len()),
                    DetailsTab::Videos => Some(p.youtube_recommendations.len()),
                    DetailsTab::Quiz => Some(p.quiz_questions.len()),
                    DetailsTab::Json => None,
                })
            })
        })
    }

    pub fn select_answer(&self, question: usize, option: usize) {
        if self.quiz_checked.get_untracked() {
            return;
        }
        self.answers.update(|a| a.select(question, option));
    }

    pub fn check_quiz(&self) {
        self.quiz_checked.set(true);
    }

    pub fn reset_quiz(&self) {
        self.answers.update(|a| a.clear());
        self.quiz_checked.set(false);
    }

    pub fn score(&self) -> Signal<QuizScore> {
        let path = self.path;
        let answers = self.answers;
        Signal::derive(move || {
            path.with(|p| {
                let questions = p.as_ref().map(|p| p.quiz_questions.as_slice()).unwrap_or(&[]);
                answers.with(|a| a.score(questions))
            })
        })
    }

    pub fn raw_json(&self) -> Signal<Option<String>> {
        let path = self.path;
        Signal::derive(move || {
            path.with(|p| p.as_ref().and_then(|p| serde_json::to_string_pretty(p).ok()))
        })
    }
}

impl Default for LearningPathDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_keys_roundtrip() {
        for tab in DetailsTab::ALL {
            assert_eq!(DetailsTab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(DetailsTab::from_key("lines"), None);
    }

    #[test]
    fn test_tab_from_query() {
        assert_eq!(DetailsTab::from_query("?tab=quiz"), DetailsTab::Quiz);
        assert_eq!(DetailsTab::from_query("?topic=Rust&tab=videos"), DetailsTab::Videos);
        assert_eq!(DetailsTab::from_query("?tab=unknown"), DetailsTab::Modules);
        assert_eq!(DetailsTab::from_query(""), DetailsTab::Modules);
    }

    #[test]
    fn test_earlier_load_is_stale_after_id_change() {
        let mut latest = LatestRequest::default();
        let first = latest.begin();
        let second = latest.begin();

        // ответ на первый id пришёл последним: он отбрасывается
        assert!(latest.is_current(second));
        assert!(!latest.is_current(first));

        // clear()/show() тоже открывают новый номер
        latest.begin();
        assert!(!latest.is_current(second));
    }
}
