use super::*;

impl KrakenClient {
    /// Get videos by ID, user, or game. Exactly one of the three
    /// selectors is required by the API; this layer passes through
    /// whatever the caller provides.
    pub async fn get_videos(
        &self,
        ids: &[String],
        user_id: Option<&str>,
        game_id: Option<&str>,
    ) -> Result<Envelope<DataList<Video>>, KrakenError> {
        let mut query = Query::new();
        if !ids.is_empty() {
            query = query.push_all("id", ids.iter().take(100));
        }
        if let Some(user_id) = user_id {
            query = query.push("user_id", user_id);
        }
        if let Some(game_id) = game_id {
            query = query.push("game_id", game_id);
        }
        self.get("/helix/videos", some_if_nonempty(query)).await
    }
}
