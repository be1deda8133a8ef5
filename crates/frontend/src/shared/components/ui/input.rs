use leptos::prelude::*;

/// Text input with optional label
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Reactive disabled state
    #[prop(optional, into)]
    disabled: Option<Signal<bool>>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// `maxlength` attribute, unlimited when not set
    #[prop(optional)]
    max_length: Option<usize>,
    #[prop(optional)]
    autofocus: bool,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || format!("form__input {}", additional_class())
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
                maxlength=max_length.map(|n| n.to_string())
                autofocus=autofocus
                autocomplete="off"
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
