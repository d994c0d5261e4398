use super::*;

impl KrakenClient {
    /// Capture a clip from the broadcaster's live stream.
    pub async fn create_clip(
        &self,
        broadcaster_id: &str,
        has_delay: bool,
    ) -> Result<Envelope<DataList<CreatedClip>>, KrakenError> {
        let query = Query::new()
            .push("broadcaster_id", broadcaster_id)
            .push("has_delay", has_delay);
        self.post("/helix/clips", Some(query), None).await
    }

    /// Get clips for a broadcaster.
    pub async fn get_clips(
        &self,
        broadcaster_id: &str,
        first: Option<u32>,
        after: Option<&str>,
    ) -> Result<Envelope<DataList<Clip>>, KrakenError> {
        let mut query = Query::new().push("broadcaster_id", broadcaster_id);
        if let Some(first) = first {
            query = query.push("first", first.clamp(1, 100));
        }
        if let Some(after) = after.filter(|v| !v.is_empty()) {
            query = query.push("after", after);
        }
        self.get("/helix/clips", Some(query)).await
    }
}
