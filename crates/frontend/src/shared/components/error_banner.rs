use leptos::prelude::*;

/// Блок с текстом ошибки запроса или валидации
#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <strong>"Ошибка: "</strong>
            {message}
        </div>
    }
}
