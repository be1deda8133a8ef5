use crate::domain::a001_learning_path::ui::details::view_model::LearningPathDetailsVm;
use leptos::prelude::*;

#[component]
pub fn JsonTab(vm: LearningPathDetailsVm) -> impl IntoView {
    let raw_json = vm.raw_json();

    view! {
        <div class="json-tab">
            {move || match raw_json.get() {
                Some(json) => view! {
                    <pre class="json-view">{json}</pre>
                }.into_any(),
                None => view! { <super::EmptyTab text="Нет данных" /> }.into_any(),
            }}
        </div>
    }
}
