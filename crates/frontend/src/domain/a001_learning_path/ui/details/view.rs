//! Learning Path Details - tab bar and tab content

use super::tabs::{JsonTab, ModulesTab, QuizTab, VideosTab};
use super::view_model::{DetailsTab, LearningPathDetailsVm};
use crate::shared::icons::icon;
use contracts::domain::a001_learning_path::LearningPath;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Предупреждение над вкладками, если сервер вернул план без содержимого
pub fn empty_result_notice(path: &LearningPath) -> Option<String> {
    path.is_empty().then(|| {
        format!(
            "По теме «{}» сервер не вернул ни модулей, ни видео, ни вопросов",
            path.topic
        )
    })
}

/// Tabs over a loaded learning path. Renders nothing until `vm.path` is set.
#[component]
pub fn LearningPathView(vm: LearningPathDetailsVm) -> impl IntoView {
    let notice = move || vm.path.with(|p| p.as_ref().and_then(empty_result_notice));

    view! {
        <Show when=move || vm.path.with(|p| p.is_some())>
            {move || notice().map(|text| view! { <div class="tab-empty" role="status">{text}</div> })}
            <div class="page__tab-content">
                <TabBar vm=vm />
                <TabContent vm=vm />
            </div>
        </Show>
    }
}

#[component]
fn TabBar(vm: LearningPathDetailsVm) -> impl IntoView {
    let active_tab = vm.active_tab;
    let tab_icon = |name: &str| view! { <span class="tab-icon">{icon(name)}</span> };

    view! {
        <div class="tab-bar" role="tablist">
            {DetailsTab::ALL
                .into_iter()
                .map(|tab| {
                    let count = vm.count(tab);
                    let is_active = move || active_tab.get() == tab;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            class=move || {
                                if is_active() { "tab-bar__tab tab-bar__tab--active" } else { "tab-bar__tab" }
                            }
                            on:click=move |_| vm.set_tab(tab)
                        >
                            {tab_icon(tab.icon())}
                            {tab.label()}
                            {move || count.get().map(|n| view! {
                                <Badge
                                    appearance=BadgeAppearance::Tint
                                    color=if is_active() { BadgeColor::Brand } else { BadgeColor::Informative }
                                    attr:style="margin-left: 6px;"
                                >
                                    {n.to_string()}
                                </Badge>
                            })}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TabContent(vm: LearningPathDetailsVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    view! {
        {move || match active_tab.get() {
            DetailsTab::Modules => view! { <ModulesTab vm=vm /> }.into_any(),
            DetailsTab::Videos => view! { <VideosTab vm=vm /> }.into_any(),
            DetailsTab::Quiz => view! { <QuizTab vm=vm /> }.into_any(),
            DetailsTab::Json => view! { <JsonTab vm=vm /> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_result_notice() {
        let empty: LearningPath = serde_json::from_value(json!({"topic": "Rust"})).unwrap();
        assert!(empty_result_notice(&empty).unwrap().contains("Rust"));

        let with_quiz: LearningPath = serde_json::from_value(json!({
            "topic": "Rust",
            "quiz_questions": [{"question": "?", "options": ["a"], "correct_answer": "a"}]
        }))
        .unwrap();
        assert_eq!(empty_result_notice(&with_quiz), None);
    }
}
