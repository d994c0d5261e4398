use super::*;

impl KrakenClient {
    /// Get the most-viewed games.
    pub async fn get_top_games(
        &self,
        first: Option<u32>,
        after: Option<&str>,
    ) -> Result<Envelope<DataList<Game>>, KrakenError> {
        let mut query = Query::new();
        if let Some(first) = first {
            query = query.push("first", first.clamp(1, 100));
        }
        if let Some(after) = after.filter(|v| !v.is_empty()) {
            query = query.push("after", after);
        }
        self.get("/helix/games/top", some_if_nonempty(query)).await
    }

    /// Get games by ID and/or exact name (up to 100 of each).
    pub async fn get_games(
        &self,
        ids: &[String],
        names: &[String],
    ) -> Result<Envelope<DataList<Game>>, KrakenError> {
        let mut query = Query::new();
        if !ids.is_empty() {
            query = query.push_all("id", ids.iter().take(100));
        }
        if !names.is_empty() {
            query = query.push_all("name", names.iter().take(100));
        }
        self.get("/helix/games", some_if_nonempty(query)).await
    }
}
