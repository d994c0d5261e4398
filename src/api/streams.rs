use super::*;

impl KrakenClient {
    /// Get active streams, optionally filtered by user ID (up to 100).
    pub async fn get_streams(
        &self,
        user_ids: &[String],
        first: Option<u32>,
    ) -> Result<Envelope<DataList<Stream>>, KrakenError> {
        let mut query = Query::new();
        if !user_ids.is_empty() {
            query = query.push_all("user_id", user_ids.iter().take(100));
        }
        if let Some(first) = first {
            query = query.push("first", first.clamp(1, 100));
        }
        self.get("/helix/streams", some_if_nonempty(query)).await
    }

    /// Get the broadcaster's stream key.
    pub async fn get_stream_key(
        &self,
        broadcaster_id: &str,
    ) -> Result<Envelope<DataList<StreamKey>>, KrakenError> {
        let query = Query::new().push("broadcaster_id", broadcaster_id);
        self.get("/helix/streams/key", Some(query)).await
    }

    /// Create a marker in the broadcaster's live stream.
    pub async fn create_stream_marker(
        &self,
        user_id: &str,
        description: Option<&str>,
    ) -> Result<Envelope<DataList<Marker>>, KrakenError> {
        let mut body = serde_json::json!({ "user_id": user_id });
        if let Some(description) = description {
            body["description"] = Value::String(description.to_string());
        }
        self.post("/helix/streams/markers", None, Some(body)).await
    }

    /// List markers for a user's most recent VOD or a specific video.
    pub async fn get_stream_markers(
        &self,
        user_id: Option<&str>,
        video_id: Option<&str>,
        first: Option<u32>,
    ) -> Result<Envelope<DataList<StreamMarkers>>, KrakenError> {
        let mut query = Query::new();
        if let Some(user_id) = user_id {
            query = query.push("user_id", user_id);
        }
        if let Some(video_id) = video_id {
            query = query.push("video_id", video_id);
        }
        if let Some(first) = first {
            query = query.push("first", first.clamp(1, 100));
        }
        self.get("/helix/streams/markers", some_if_nonempty(query))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::KrakenClient;
    use crate::transport::testing::MockTransport;

    #[tokio::test]
    async fn get_streams_expands_user_ids_and_caps_first() {
        let transport = Arc::new(MockTransport::new().respond(200, "", r#"{"data":[]}"#));
        let client =
            KrakenClient::configure("clientId", Some("token".to_string()), transport.clone());

        client
            .get_streams(&["u1".to_string(), "u2".to_string()], Some(500))
            .await
            .unwrap();

        assert_eq!(
            transport.sent()[0].url,
            "https://api.twitch.tv/helix/streams?user_id=u1&user_id=u2&first=100"
        );
    }
}
