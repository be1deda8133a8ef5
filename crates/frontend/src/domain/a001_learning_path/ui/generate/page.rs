use super::view_model::{GenerateVm, TOPIC_PARAM};
use crate::domain::a001_learning_path::ui::details::LearningPathView;
use crate::routes::routes::learning_path_href;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input};
use crate::shared::format::format_elapsed;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a001_learning_path::MAX_TOPIC_CHARS;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use thaw::{Flex, FlexAlign, FlexGap, Spinner};

/// `/generate` - форма темы и результат генерации
#[component]
pub fn GeneratePage() -> impl IntoView {
    let vm = GenerateVm::new();
    let query = use_query_map();
    vm.prefill(query.read_untracked().get(TOPIC_PARAM));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    let title = "Новый учебный план".to_string();
    let details = vm.details;
    let saved_id = move || details.path.with(|p| p.as_ref().and_then(|p| p.id.clone()));

    view! {
        <PageFrame page_id="a001_learning_path--usecase" category=PAGE_CAT_USECASE>
            <PageHeader
                title=title
                subtitle="Модули, видео и тест по любой теме"
            />
            <div class="page__content">
                <form class="generate-form" on:submit=on_submit>
                    <Input
                        id="topic"
                        label="Тема"
                        placeholder="Например: Python Programming"
                        value=vm.topic
                        on_input=Callback::new(move |v| vm.topic.set(v))
                        disabled=Signal::derive(move || vm.in_flight.get())
                        max_length=MAX_TOPIC_CHARS
                        autofocus=true
                    />
                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || vm.in_flight.get())
                    >
                        {icon("sparkles")}
                        {move || if vm.in_flight.get() { " Генерация..." } else { " Сгенерировать" }}
                    </Button>
                </form>

                <Show when=move || vm.in_flight.get()>
                    <Flex gap=FlexGap::Small align=FlexAlign::Center style="padding: var(--spacing-lg);">
                        <Spinner />
                        <span>
                            {move || format!(
                                "Генерируем план... {}",
                                format_elapsed(vm.elapsed_secs.get())
                            )}
                        </span>
                    </Flex>
                </Show>

                {move || vm.error.get().map(|err| view! { <ErrorBanner message=err /> })}

                {move || saved_id().map(|id| {
                    let href = learning_path_href(&id);
                    view! {
                        <div class="generate-form__saved">
                            "Сохранён как "
                            <a href=href>{id}</a>
                        </div>
                    }
                })}

                <LearningPathView vm=details />
            </div>
        </PageFrame>
    }
}
