use leptos::prelude::*;

/// Визуальное состояние варианта ответа после проверки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioState {
    Neutral,
    Correct,
    Wrong,
}

impl RadioState {
    fn modifier(self) -> &'static str {
        match self {
            RadioState::Neutral => "",
            RadioState::Correct => "form__radio-wrapper--correct",
            RadioState::Wrong => "form__radio-wrapper--wrong",
        }
    }
}

/// Radio button component
#[component]
pub fn Radio(
    #[prop(into)]
    label: String,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_select: Option<Callback<()>>,
    #[prop(optional, into)]
    disabled: Option<Signal<bool>>,
    /// Correct/wrong highlighting once answers are checked
    #[prop(optional, into)]
    state: Option<Signal<RadioState>>,
    /// ID for the radio element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let is_disabled = move || disabled.map(|d| d.get()).unwrap_or(false);
    let wrapper_class = move || {
        let state = state.map(|s| s.get()).unwrap_or(RadioState::Neutral);
        let disabled = if is_disabled() { "form__radio-wrapper--disabled" } else { "" };
        format!("form__radio-wrapper {} {}", disabled, state.modifier())
    };

    view! {
        <div class=wrapper_class>
            <input
                id=id.clone()
                type="radio"
                class="form__radio"
                name=name
                prop:checked=move || checked.get()
                disabled=is_disabled
                on:change=move |_| {
                    if let Some(handler) = on_select {
                        handler.run(());
                    }
                }
            />
            <label class="form__radio-label" for=id>
                {label}
            </label>
        </div>
    }
}
