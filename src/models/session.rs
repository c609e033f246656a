use super::image::{GeneratedImage, GenerationRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Oldest entries are dropped once the history grows past this many.
pub const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    pub guidance_scale: f32,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(request: &GenerationRequest, image: &GeneratedImage) -> Self {
        HistoryEntry {
            url: image.url.clone(),
            prompt: request.prompt.clone(),
            width: request.width,
            height: request.height,
            steps: request.steps,
            guidance_scale: request.guidance_scale,
            created_at: Utc::now(),
        }
    }
}

/// Insert `entry` at the front of `history` and cap the list at
/// [`HISTORY_LIMIT`]. Takes and returns the list by value; persistence
/// is a separate concern.
pub fn push_entry(entry: HistoryEntry, mut history: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    history.insert(0, entry);
    history.truncate(HISTORY_LIMIT);
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::models::image::GenerationParams;

    fn entry(url: &str) -> HistoryEntry {
        let config = ApiConfig::new();
        let request = GenerationRequest::new(&config, "a red fox", &GenerationParams::default());
        let image = GeneratedImage {
            url: url.to_string(),
        };
        HistoryEntry::new(&request, &image)
    }

    #[test]
    fn test_push_entry_is_most_recent_first() {
        let history = push_entry(entry("https://x/1.png"), Vec::new());
        let history = push_entry(entry("https://x/2.png"), history);

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].url, "https://x/2.png");
        assert_eq!(history[1].url, "https://x/1.png");
    }

    #[test]
    fn test_push_entry_caps_at_limit() {
        let mut history = Vec::new();
        for i in 0..HISTORY_LIMIT + 5 {
            history = push_entry(entry(&format!("https://x/{}.png", i)), history);
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        // Newest survives, oldest five are gone.
        assert_eq!(
            history[0].url,
            format!("https://x/{}.png", HISTORY_LIMIT + 4)
        );
        assert_eq!(history[HISTORY_LIMIT - 1].url, "https://x/5.png");
    }

    #[test]
    fn test_entry_captures_request_parameters() {
        let config = ApiConfig::new();
        let params = GenerationParams {
            width: Some(512),
            steps: Some(10),
            ..Default::default()
        };
        let request = GenerationRequest::new(&config, "a red fox", &params);
        let image = GeneratedImage {
            url: "https://x/y.png".to_string(),
        };
        let entry = HistoryEntry::new(&request, &image);

        assert_eq!(entry.prompt, "a red fox");
        assert_eq!(entry.width, 512);
        assert_eq!(entry.height, 1024);
        assert_eq!(entry.steps, 10);
    }
}
