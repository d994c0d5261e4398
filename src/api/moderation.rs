use super::*;

impl KrakenClient {
    /// Get users banned in the broadcaster's channel, optionally
    /// narrowed to specific user IDs (up to 100).
    pub async fn get_banned_users(
        &self,
        broadcaster_id: &str,
        user_ids: &[String],
    ) -> Result<Envelope<DataList<BannedUser>>, KrakenError> {
        let mut query = Query::new().push("broadcaster_id", broadcaster_id);
        if !user_ids.is_empty() {
            query = query.push_all("user_id", user_ids.iter().take(100));
        }
        self.get("/helix/moderation/banned", Some(query)).await
    }

    /// Get moderators of the broadcaster's channel.
    pub async fn get_moderators(
        &self,
        broadcaster_id: &str,
        after: Option<&str>,
    ) -> Result<Envelope<DataList<Moderator>>, KrakenError> {
        let mut query = Query::new().push("broadcaster_id", broadcaster_id);
        if let Some(after) = after.filter(|v| !v.is_empty()) {
            query = query.push("after", after);
        }
        self.get("/helix/moderation/moderators", Some(query)).await
    }

    /// Ask AutoMod whether the given messages would be permitted.
    pub async fn check_automod_status(
        &self,
        broadcaster_id: &str,
        messages: &[AutoModMessage],
    ) -> Result<Envelope<DataList<AutoModResult>>, KrakenError> {
        let query = Query::new().push("broadcaster_id", broadcaster_id);
        let body = serde_json::json!({ "data": messages });
        self.post(
            "/helix/moderation/enforcements/status",
            Some(query),
            Some(body),
        )
        .await
    }
}
