use serde::{Deserialize, Serialize};

const YOUTUBE_ID_LEN: usize = 11;

/// Рекомендация видео.
///
/// Ссылки генерирует LLM, поэтому встречаются записи без схемы
/// (`youtube.com/watch?v=...`) и заглушки вида `watch?v=example`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecommendation {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl VideoRecommendation {
    /// Идентификатор видео YouTube, если ссылка на него указывает
    pub fn video_id(&self) -> Option<String> {
        parse_youtube_id(&self.url)
    }

    /// Ссылка для открытия в браузере
    pub fn watch_url(&self) -> String {
        match self.video_id() {
            Some(id) => format!("https://www.youtube.com/watch?v={id}"),
            None => with_scheme(self.url.trim()),
        }
    }

    pub fn thumbnail_url(&self) -> Option<String> {
        self.video_id()
            .map(|id| format!("https://img.youtube.com/vi/{id}/mqdefault.jpg"))
    }

    /// Поиск по названию на YouTube - запасной вариант для ссылок-заглушек
    pub fn search_url(&self) -> String {
        format!(
            "https://www.youtube.com/results?search_query={}",
            urlencoding::encode(self.title.trim())
        )
    }
}

fn with_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

fn is_valid_id(id: &str) -> bool {
    id.len() == YOUTUBE_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn parse_youtube_id(url: &str) -> Option<String> {
    let rest = url.trim();
    let rest = rest
        .strip_prefix("https://")
        .or_else(|| rest.strip_prefix("http://"))
        .unwrap_or(rest);
    let rest = rest.split('#').next().unwrap_or(rest);

    let (host, path) = match rest.split_once('/') {
        Some((h, p)) => (h, p),
        None => (rest, ""),
    };
    let host = host
        .trim_start_matches("www.")
        .trim_start_matches("m.")
        .to_ascii_lowercase();

    let candidate = match host.as_str() {
        "youtu.be" => path.split(['?', '/']).next(),
        "youtube.com" | "youtube-nocookie.com" => {
            let (route, query) = path.split_once('?').unwrap_or((path, ""));
            if route == "watch" || route == "watch/" {
                query
                    .split('&')
                    .find_map(|pair| pair.strip_prefix("v="))
            } else {
                ["embed/", "shorts/", "v/", "live/"]
                    .iter()
                    .find_map(|prefix| route.strip_prefix(prefix))
                    .and_then(|tail| tail.split('/').next())
            }
        }
        _ => None,
    }?;

    is_valid_id(candidate).then(|| candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(url: &str) -> VideoRecommendation {
        VideoRecommendation {
            title: "Rust for Beginners".into(),
            url: url.into(),
            keywords: vec![],
        }
    }

    #[test]
    fn test_video_id_from_known_url_shapes() {
        let cases = [
            "https://www.youtube.com/watch?v=rfscVS0vtbw",
            "https://youtube.com/watch?v=rfscVS0vtbw&t=42s",
            "youtube.com/watch?list=PL1&v=rfscVS0vtbw",
            "http://m.youtube.com/watch?v=rfscVS0vtbw#comments",
            "https://youtu.be/rfscVS0vtbw?si=abc",
            "https://www.youtube.com/embed/rfscVS0vtbw",
            "https://www.youtube.com/shorts/rfscVS0vtbw",
        ];
        for url in cases {
            assert_eq!(video(url).video_id().as_deref(), Some("rfscVS0vtbw"), "{url}");
        }
    }

    #[test]
    fn test_placeholder_urls_have_no_id() {
        assert_eq!(video("https://youtube.com/watch?v=example").video_id(), None);
        assert_eq!(video("https://youtube.com/watch?v=example1").video_id(), None);
        assert_eq!(video("https://vimeo.com/123456789").video_id(), None);
        assert_eq!(video("").video_id(), None);
    }

    #[test]
    fn test_watch_url_normalizes() {
        assert_eq!(
            video("youtu.be/rfscVS0vtbw").watch_url(),
            "https://www.youtube.com/watch?v=rfscVS0vtbw"
        );
        assert_eq!(
            video("youtube.com/watch?v=example").watch_url(),
            "https://youtube.com/watch?v=example"
        );
        assert_eq!(
            video("http://example.org/lesson").watch_url(),
            "http://example.org/lesson"
        );
    }

    #[test]
    fn test_thumbnail_and_search_urls() {
        assert_eq!(
            video("https://youtu.be/rfscVS0vtbw").thumbnail_url().as_deref(),
            Some("https://img.youtube.com/vi/rfscVS0vtbw/mqdefault.jpg")
        );
        assert_eq!(video("watch?v=example").thumbnail_url(), None);
        assert_eq!(
            video("x").search_url(),
            "https://www.youtube.com/results?search_query=Rust%20for%20Beginners"
        );
    }
}
