use crate::domain::a001_learning_path::ui::details::view_model::LearningPathDetailsVm;
use crate::shared::icons::icon;
use contracts::domain::a001_learning_path::VideoRecommendation;
use leptos::prelude::*;

#[component]
pub fn VideosTab(vm: LearningPathDetailsVm) -> impl IntoView {
    let videos = move || {
        vm.path.with(|p| {
            p.as_ref()
                .map(|p| p.youtube_recommendations.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="videos-tab">
            {move || {
                let videos = videos();
                if videos.is_empty() {
                    return view! { <super::EmptyTab text="Рекомендаций видео нет" /> }.into_any();
                }
                view! {
                    <div class="video-grid">
                        {videos
                            .into_iter()
                            .map(|video| view! { <VideoCard video=video /> })
                            .collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[component]
fn VideoCard(video: VideoRecommendation) -> impl IntoView {
    let watch_url = video.watch_url();
    let thumbnail = video.thumbnail_url();
    let alt = video.title.clone();
    let thumb_href = watch_url.clone();
    // Ссылки-заглушки от генератора: предлагаем поиск по названию
    let search_url = video.video_id().is_none().then(|| video.search_url());

    view! {
        <div class="video-card">
            {thumbnail.map(move |src| view! {
                <a href=thumb_href target="_blank" rel="noopener noreferrer" class="video-card__thumb">
                    <img src=src alt=alt loading="lazy" />
                </a>
            })}
            <div class="video-card__body">
                <a href=watch_url target="_blank" rel="noopener noreferrer" class="video-card__title">
                    {video.title}
                    " "
                    {icon("external-link")}
                </a>
                {search_url.map(|href| view! {
                    <a href=href target="_blank" rel="noopener noreferrer" class="video-card__search">
                        {icon("search")}
                        " Найти на YouTube"
                    </a>
                })}
                <div class="video-card__keywords">
                    {video
                        .keywords
                        .into_iter()
                        .map(|k| view! { <span class="keyword-chip">{k}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
