use super::view::LearningPathView;
use super::view_model::LearningPathDetailsVm;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::{Flex, FlexGap, Spinner};

/// `/learning-path/:id` - сохранённый учебный план по идентификатору
#[component]
pub fn LearningPathPage() -> impl IntoView {
    let params = use_params_map();
    let vm = LearningPathDetailsVm::new();

    Effect::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();
        vm.load(id);
    });

    let topic = vm.topic();
    let title = Signal::derive(move || {
        let topic = topic.get();
        if topic.is_empty() {
            "Учебный план".to_string()
        } else {
            format!("Учебный план: {}", topic)
        }
    });

    view! {
        <PageFrame page_id="a001_learning_path--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=title>
                <a href="/generate" class="button button--secondary">"Новый план"</a>
            </PageHeader>
            <div class="page__content">
                {move || {
                    if vm.loading.get() {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                                <Spinner />
                                <span>"Загрузка..."</span>
                            </Flex>
                        }.into_any()
                    } else if let Some(err) = vm.error.get() {
                        view! { <ErrorBanner message=err /> }.into_any()
                    } else if vm.path.with(|p| p.is_some()) {
                        view! { <LearningPathView vm=vm /> }.into_any()
                    } else {
                        view! { <div>"Нет данных"</div> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}
