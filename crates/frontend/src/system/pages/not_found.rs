use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="home">
                <h2>"Страница не найдена"</h2>
                <a href="/">"На главную"</a>
            </div>
        </PageFrame>
    }
}
