use leptos::prelude::*;

fn button_class(secondary: bool, small: bool) -> String {
    let mut class = String::from(if secondary {
        "button button--secondary"
    } else {
        "button button--primary"
    });
    if small {
        class.push_str(" button--small");
    }
    class
}

/// Кнопка формы: основная или второстепенная, обычная или компактная.
/// По умолчанию `type="button"`, форму отправляет только `button_type="submit"`.
#[component]
pub fn Button(
    /// "secondary" для второстепенного действия, иначе основная
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: Option<Signal<bool>>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());
    let btn_class = move || {
        button_class(
            variant.get().as_deref() == Some("secondary"),
            size.get().as_deref() == Some("sm"),
        )
    };

    view! {
        <button
            type=btn_type
            class=btn_class
            disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
