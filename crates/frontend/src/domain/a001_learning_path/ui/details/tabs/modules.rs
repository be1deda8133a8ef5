use crate::domain::a001_learning_path::ui::details::view_model::LearningPathDetailsVm;
use crate::shared::format::plural;
use contracts::domain::a001_learning_path::{LearningPath, Module};
use leptos::prelude::*;

/// "3 модуля, 11 подтем"
pub fn modules_summary(path: &LearningPath) -> String {
    let modules = path.modules.len();
    let subtopics = path.subtopic_count();
    format!(
        "{} {}, {} {}",
        modules,
        plural(modules, "модуль", "модуля", "модулей"),
        subtopics,
        plural(subtopics, "подтема", "подтемы", "подтем"),
    )
}

#[component]
pub fn ModulesTab(vm: LearningPathDetailsVm) -> impl IntoView {
    let modules = move || {
        vm.path
            .with(|p| p.as_ref().map(|p| p.modules.clone()).unwrap_or_default())
    };
    let summary = move || {
        vm.path
            .with(|p| p.as_ref().map(modules_summary).unwrap_or_default())
    };

    view! {
        <div class="modules-tab">
            {move || {
                let modules = modules();
                if modules.is_empty() {
                    return view! { <super::EmptyTab text="Модули не получены" /> }.into_any();
                }
                view! {
                    <div class="modules-tab__summary">{summary()}</div>
                    <ol class="module-list">
                        {modules
                            .into_iter()
                            .enumerate()
                            .map(|(idx, module)| view! { <ModuleCard number=idx + 1 module=module /> })
                            .collect_view()}
                    </ol>
                }.into_any()
            }}
        </div>
    }
}

#[component]
fn ModuleCard(number: usize, module: Module) -> impl IntoView {
    view! {
        <li class="module-card">
            <div class="module-card__title">
                <span class="module-card__number">{format!("Модуль {}", number)}</span>
                {module.title}
            </div>
            <ul class="module-card__subtopics">
                {module
                    .subtopics
                    .into_iter()
                    .map(|s| view! { <li>{s}</li> })
                    .collect_view()}
            </ul>
        </li>
    }
}
