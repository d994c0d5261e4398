//! Wire shapes for the endpoint layer.
//!
//! Field names mirror the Helix JSON payloads; optional or
//! occasionally-absent fields default rather than failing the parse.

use serde::{Deserialize, Serialize};

/// Wrapper for Helix list responses.
#[derive(Debug, Clone, Deserialize)]
pub struct DataList<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateRange {
    pub started_at: String,
    pub ended_at: String,
}

/// User from GET /helix/users.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub login: String,
    pub display_name: String,
    #[serde(rename = "type", default)]
    pub user_type: String,
    #[serde(default)]
    pub broadcaster_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub offline_image_url: String,
    #[serde(default)]
    pub view_count: u64,
    /// Only present with the user:read:email scope.
    #[serde(default)]
    pub email: Option<String>,
}

/// Follow relation from GET /helix/users/follows.
#[derive(Debug, Clone, Deserialize)]
pub struct Follow {
    pub from_id: String,
    pub from_name: String,
    pub to_id: String,
    pub to_name: String,
    pub followed_at: String,
}

/// Stream from GET /helix/streams.
#[derive(Debug, Clone, Deserialize)]
pub struct Stream {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub game_id: String,
    #[serde(rename = "type")]
    pub stream_type: String,
    pub title: String,
    pub viewer_count: u64,
    pub started_at: String,
    pub language: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub tag_ids: Vec<String>,
}

/// Stream key from GET /helix/streams/key.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamKey {
    pub stream_key: String,
}

/// Stream marker.
#[derive(Debug, Clone, Deserialize)]
pub struct Marker {
    pub id: String,
    pub created_at: String,
    #[serde(default)]
    pub description: String,
    pub position_seconds: u64,
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoMarkers {
    pub video_id: String,
    pub markers: Vec<Marker>,
}

/// Per-user marker listing from GET /helix/streams/markers.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamMarkers {
    pub user_id: String,
    pub user_name: String,
    pub videos: Vec<VideoMarkers>,
}

/// Game from GET /helix/games.
#[derive(Debug, Clone, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub box_art_url: String,
}

/// Clip from GET /helix/clips.
#[derive(Debug, Clone, Deserialize)]
pub struct Clip {
    pub id: String,
    pub url: String,
    pub embed_url: String,
    pub broadcaster_id: String,
    pub broadcaster_name: String,
    pub creator_id: String,
    pub creator_name: String,
    #[serde(default)]
    pub video_id: String,
    pub game_id: String,
    pub language: String,
    pub title: String,
    pub view_count: u64,
    pub created_at: String,
    pub thumbnail_url: String,
}

/// Freshly created clip from POST /helix/clips.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedClip {
    pub id: String,
    pub edit_url: String,
}

/// Video from GET /helix/videos.
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_at: String,
    pub published_at: String,
    pub url: String,
    pub thumbnail_url: String,
    pub viewable: String,
    pub view_count: u64,
    pub language: String,
    #[serde(rename = "type")]
    pub video_type: String,
    pub duration: String,
}

/// Category from GET /helix/search/categories.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub box_art_url: String,
}

/// Channel from GET /helix/search/channels.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelSearchResult {
    pub id: String,
    pub display_name: String,
    pub broadcaster_language: String,
    pub game_id: String,
    pub is_live: bool,
    pub thumbnail_url: String,
    pub title: String,
    #[serde(default)]
    pub started_at: String,
    #[serde(default)]
    pub tag_ids: Vec<String>,
}

/// Channel from GET /helix/channels.
#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub broadcaster_id: String,
    pub broadcaster_language: String,
    pub game_id: String,
    #[serde(default)]
    pub game_name: String,
    pub title: String,
    #[serde(default)]
    pub broadcaster_name: String,
}

/// Commercial confirmation from POST /helix/channels/commercial.
#[derive(Debug, Clone, Deserialize)]
pub struct Commercial {
    pub length: u32,
    #[serde(default)]
    pub message: String,
    #[serde(alias = "retryAfter")]
    pub retry_after: u32,
}

/// Banned user from GET /helix/moderation/banned.
#[derive(Debug, Clone, Deserialize)]
pub struct BannedUser {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub expires_at: String,
}

/// Moderator from GET /helix/moderation/moderators.
#[derive(Debug, Clone, Deserialize)]
pub struct Moderator {
    pub user_id: String,
    pub user_name: String,
}

/// Message submitted to POST /helix/moderation/enforcements/status.
#[derive(Debug, Clone, Serialize)]
pub struct AutoModMessage {
    pub msg_id: String,
    pub msg_text: String,
    pub user_id: String,
}

/// Per-message verdict from the AutoMod status check.
#[derive(Debug, Clone, Deserialize)]
pub struct AutoModResult {
    pub msg_id: String,
    pub is_permitted: bool,
}

/// Subscription from GET /helix/subscriptions.
#[derive(Debug, Clone, Deserialize)]
pub struct Subscription {
    pub broadcaster_id: String,
    pub broadcaster_name: String,
    pub is_gift: bool,
    pub tier: String,
    #[serde(default)]
    pub plan_name: String,
    pub user_id: String,
    pub user_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_with_and_without_email() {
        let body = r#"{
          "data": [{
            "id": "44322889",
            "login": "dallas",
            "display_name": "dallas",
            "type": "staff",
            "broadcaster_type": "",
            "description": "Just a gamer",
            "profile_image_url": "https://example/profile.png",
            "offline_image_url": "https://example/offline.png",
            "view_count": 191836881,
            "email": "login@provider.com"
          }]
        }"#;

        let parsed: DataList<User> = serde_json::from_str(body).unwrap();
        let user = &parsed.data[0];
        assert_eq!(user.login, "dallas");
        assert_eq!(user.user_type, "staff");
        assert_eq!(user.email.as_deref(), Some("login@provider.com"));

        let body = r#"{
          "data": [{
            "id": "1",
            "login": "a",
            "display_name": "A"
          }]
        }"#;
        let parsed: DataList<User> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data[0].email, None);
        assert_eq!(parsed.data[0].view_count, 0);
    }

    #[test]
    fn data_list_carries_pagination_total_and_date_range() {
        let body = r#"{
          "data": [],
          "pagination": { "cursor": "eyJiIjpudWxs" },
          "total": 12,
          "date_range": {
            "started_at": "2026-08-18T00:00:00Z",
            "ended_at": "2026-08-25T00:00:00Z"
          }
        }"#;

        let parsed: DataList<serde_json::Value> = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.pagination.and_then(|p| p.cursor).as_deref(),
            Some("eyJiIjpudWxs")
        );
        assert_eq!(parsed.total, Some(12));
        assert_eq!(
            parsed.date_range.unwrap().ended_at,
            "2026-08-25T00:00:00Z"
        );
    }

    #[test]
    fn stream_markers_deserialize_nested_videos() {
        let body = r#"{
          "data": [{
            "user_id": "123",
            "user_name": "Display",
            "videos": [{
              "video_id": "456",
              "markers": [{
                "id": "106b8d6243a4f883d25ad75e6cdffdc4",
                "created_at": "2026-08-20T20:20:03Z",
                "description": "hello",
                "position_seconds": 244,
                "URL": "https://twitch.tv/videos/456?t=0h4m06s"
              }]
            }]
          }]
        }"#;

        let parsed: DataList<StreamMarkers> = serde_json::from_str(body).unwrap();
        let marker = &parsed.data[0].videos[0].markers[0];
        assert_eq!(marker.position_seconds, 244);
        assert!(marker.url.as_deref().unwrap().contains("videos/456"));
    }

    #[test]
    fn commercial_accepts_both_retry_field_spellings() {
        let snake = r#"{"length":30,"message":"","retry_after":480}"#;
        let camel = r#"{"length":30,"message":"","retryAfter":480}"#;

        let a: Commercial = serde_json::from_str(snake).unwrap();
        let b: Commercial = serde_json::from_str(camel).unwrap();
        assert_eq!(a.retry_after, 480);
        assert_eq!(b.retry_after, 480);
    }

    #[test]
    fn channel_search_result_allows_offline_channels() {
        let body = r#"{
          "data": [{
            "id": "1",
            "display_name": "A",
            "broadcaster_language": "en",
            "game_id": "33214",
            "is_live": false,
            "thumbnail_url": "https://example/thumb.png",
            "title": "title"
          }]
        }"#;

        let parsed: DataList<ChannelSearchResult> = serde_json::from_str(body).unwrap();
        assert!(!parsed.data[0].is_live);
        assert_eq!(parsed.data[0].started_at, "");
    }
}
