use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::query::with_param;
use leptos::prelude::*;

const SUGGESTED_TOPICS: &[&str] = &[
    "Python Programming",
    "Machine Learning",
    "Rust ownership",
    "SQL для аналитиков",
    "Web Development",
];

/// Link to the generate page with the topic prefilled
pub fn generate_href(topic: &str) -> String {
    format!("/generate{}", with_param("", "topic", topic))
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="home--system" category=PAGE_CAT_SYSTEM>
            <div class="home">
                <h1 class="home__title">"Learning Path AI"</h1>
                <p class="home__lead">
                    "Введите тему — сервис соберёт учебный план из модулей, подберёт видео на YouTube и составит тест для самопроверки."
                </p>
                <a href="/generate" class="button button--primary">
                    {icon("sparkles")}
                    " Создать учебный план"
                </a>

                <h3 class="home__subtitle">"Попробуйте"</h3>
                <div class="home__topics">
                    {SUGGESTED_TOPICS
                        .iter()
                        .map(|topic| view! {
                            <a class="keyword-chip" href=generate_href(topic)>{*topic}</a>
                        })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::parse_query;

    #[test]
    fn test_generate_href_encodes_topic() {
        let href = generate_href("SQL для аналитиков");
        let (path, search) = href.split_at(href.find('?').unwrap());
        assert_eq!(path, "/generate");
        assert_eq!(
            parse_query(search).get("topic").map(String::as_str),
            Some("SQL для аналитиков")
        );
    }
}
