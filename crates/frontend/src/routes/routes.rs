use crate::domain::a001_learning_path::ui::details::LearningPathPage;
use crate::domain::a001_learning_path::ui::generate::GeneratePage;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Address of the saved learning path page; the id is percent-encoded
pub fn learning_path_href(id: &str) -> String {
    format!("/learning-path/{}", urlencoding::encode(id))
}

/// Client-side routes:
///
/// | URL                   | page               |
/// |-----------------------|--------------------|
/// | `/`                   | `HomePage`         |
/// | `/generate`           | `GeneratePage`     |
/// | `/learning-path/:id`  | `LearningPathPage` |
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/generate") view=GeneratePage />
                    <Route path=path!("/learning-path/:id") view=LearningPathPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_path_href_encodes_id() {
        assert_eq!(learning_path_href("lp-1"), "/learning-path/lp-1");
        assert_eq!(learning_path_href("a/b c?x"), "/learning-path/a%2Fb%20c%3Fx");
    }
}
