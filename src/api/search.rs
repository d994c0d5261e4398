use super::*;

impl KrakenClient {
    /// Search game categories by name fragment.
    pub async fn search_categories(
        &self,
        term: &str,
        first: Option<u32>,
    ) -> Result<Envelope<DataList<Category>>, KrakenError> {
        let mut query = Query::new().push("query", term);
        if let Some(first) = first {
            query = query.push("first", first.clamp(1, 100));
        }
        self.get("/helix/search/categories", Some(query)).await
    }

    /// Search channels by name fragment, optionally live-only.
    pub async fn search_channels(
        &self,
        term: &str,
        first: Option<u32>,
        live_only: Option<bool>,
    ) -> Result<Envelope<DataList<ChannelSearchResult>>, KrakenError> {
        let mut query = Query::new().push("query", term);
        if let Some(first) = first {
            query = query.push("first", first.clamp(1, 100));
        }
        if let Some(live_only) = live_only {
            query = query.push("live_only", live_only);
        }
        self.get("/helix/search/channels", Some(query)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::KrakenClient;
    use crate::transport::testing::MockTransport;

    #[tokio::test]
    async fn search_terms_are_component_encoded() {
        let transport = Arc::new(MockTransport::new().respond(200, "", r#"{"data":[]}"#));
        let client =
            KrakenClient::configure("clientId", Some("token".to_string()), transport.clone());

        client
            .search_channels("a boring name", None, Some(true))
            .await
            .unwrap();

        assert_eq!(
            transport.sent()[0].url,
            "https://api.twitch.tv/helix/search/channels?query=a%20boring%20name&live_only=true"
        );
    }
}
