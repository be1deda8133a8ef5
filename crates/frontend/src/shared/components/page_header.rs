use leptos::prelude::*;

/// Reusable page header: title, optional subtitle, action slot on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: Signal<String>,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Action slot on the right
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h2 class="page__title">{move || title.get()}</h2>
                {move || subtitle.get().map(|s| view! {
                    <div class="page__subtitle">{s}</div>
                })}
            </div>
            {children.map(|c| view! {
                <div class="page__header-right">{c()}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_builds_without_actions() {
        let props = PageHeaderProps::builder()
            .title("Новый учебный план".to_string())
            .build();
        assert!(props.children.is_none());
        assert_eq!(props.title.get_untracked(), "Новый учебный план");
    }
}
