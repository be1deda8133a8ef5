//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Application title
//! - Navigation links
//! - API availability badge (`GET /api/health`, checked once on mount)

use crate::shared::api_utils::get_json;
use crate::shared::icons::icon;
use contracts::shared::api::{HealthStatus, HEALTH_PATH};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use leptos_router::hooks::use_location;
use thaw::{Badge, BadgeAppearance, BadgeColor};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiHealth {
    Checking,
    Up,
    Down(String),
}

impl ApiHealth {
    pub fn from_result<E: std::fmt::Display>(result: Result<HealthStatus, E>) -> Self {
        match result {
            Ok(status) if status.is_healthy() => ApiHealth::Up,
            Ok(status) => ApiHealth::Down(status.status),
            Err(e) => ApiHealth::Down(e.to_string()),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ApiHealth::Checking => "API: проверка",
            ApiHealth::Up => "API: доступен",
            ApiHealth::Down(_) => "API: недоступен",
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            ApiHealth::Checking => BadgeColor::Informative,
            ApiHealth::Up => BadgeColor::Success,
            ApiHealth::Down(_) => BadgeColor::Danger,
        }
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let health = RwSignal::new(ApiHealth::Checking);

    spawn_local(async move {
        let result = get_json::<HealthStatus>(HEALTH_PATH).await;
        let state = ApiHealth::from_result(result);
        if let ApiHealth::Down(reason) = &state {
            log::warn!("api health check failed: {}", reason);
        }
        health.set(state);
    });

    let location = use_location();
    let nav_class = move |path: &'static str| {
        move || {
            if location.pathname.get() == path {
                "top-header__link top-header__link--active"
            } else {
                "top-header__link"
            }
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Learning Path AI"</span>
            </div>

            <nav class="top-header__nav">
                <a href="/" class=nav_class("/")>
                    {icon("home")}
                    " Главная"
                </a>
                <a href="/generate" class=nav_class("/generate")>
                    {icon("sparkles")}
                    " Новый план"
                </a>
            </nav>

            <div class="top-header__actions">
                {move || {
                    let state = health.get();
                    let title = match &state {
                        ApiHealth::Down(reason) => reason.clone(),
                        _ => String::new(),
                    };
                    view! {
                        <span title=title>
                            <Badge appearance=BadgeAppearance::Tint color=state.color()>
                                {state.label()}
                            </Badge>
                        </span>
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_from_result() {
        let ok: Result<HealthStatus, String> = Ok(HealthStatus { status: "healthy".into() });
        assert_eq!(ApiHealth::from_result(ok), ApiHealth::Up);

        let degraded: Result<HealthStatus, String> = Ok(HealthStatus { status: "degraded".into() });
        assert_eq!(ApiHealth::from_result(degraded), ApiHealth::Down("degraded".into()));

        let err: Result<HealthStatus, String> = Err("HTTP 502: upstream unavailable".into());
        assert_eq!(
            ApiHealth::from_result(err),
            ApiHealth::Down("HTTP 502: upstream unavailable".into())
        );
    }
}
