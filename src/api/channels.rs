use super::*;

impl KrakenClient {
    /// Get channel information for a broadcaster.
    pub async fn get_channel_information(
        &self,
        broadcaster_id: &str,
    ) -> Result<Envelope<DataList<Channel>>, KrakenError> {
        let query = Query::new().push("broadcaster_id", broadcaster_id);
        self.get("/helix/channels", Some(query)).await
    }

    /// Modify channel metadata. Settles with 204 on success.
    pub async fn modify_channel_information(
        &self,
        broadcaster_id: &str,
        game_id: Option<&str>,
        broadcaster_language: Option<&str>,
        title: Option<&str>,
    ) -> Result<Envelope<Value>, KrakenError> {
        let query = Query::new().push("broadcaster_id", broadcaster_id);

        let mut body = serde_json::Map::new();
        if let Some(game_id) = game_id {
            body.insert("game_id".to_string(), Value::String(game_id.to_string()));
        }
        if let Some(language) = broadcaster_language {
            body.insert(
                "broadcaster_language".to_string(),
                Value::String(language.to_string()),
            );
        }
        if let Some(title) = title {
            body.insert("title".to_string(), Value::String(title.to_string()));
        }

        self.patch("/helix/channels", Some(query), Some(Value::Object(body)))
            .await
    }

    /// Start a commercial on the broadcaster's channel.
    ///
    /// `length` is one of the Twitch-supported durations (30–180 in
    /// 30-second steps); the API rounds unsupported values down.
    pub async fn start_commercial(
        &self,
        broadcaster_id: &str,
        length: u32,
    ) -> Result<Envelope<DataList<Commercial>>, KrakenError> {
        let body = serde_json::json!({
            "broadcaster_id": broadcaster_id,
            "length": length,
        });
        self.post("/helix/channels/commercial", None, Some(body))
            .await
    }
}
