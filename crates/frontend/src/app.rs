use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::{ConfigProvider, Theme};

#[component]
pub fn App() -> impl IntoView {
    let theme = RwSignal::new(Theme::light());

    view! {
        <ConfigProvider theme>
            <AppRoutes />
        </ConfigProvider>
    }
}
