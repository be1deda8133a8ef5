pub mod json;
pub mod modules;
pub mod quiz;
pub mod videos;

pub use json::JsonTab;
pub use modules::ModulesTab;
pub use quiz::QuizTab;
pub use videos::VideosTab;

use leptos::prelude::*;

/// Заглушка для пустой вкладки
#[component]
pub fn EmptyTab(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="tab-empty">{text}</div>
    }
}
