use super::*;

impl KrakenClient {
    /// Get subscriptions to the broadcaster's channel, optionally
    /// narrowed to specific subscribers (up to 100).
    pub async fn get_broadcaster_subscriptions(
        &self,
        broadcaster_id: &str,
        user_ids: &[String],
    ) -> Result<Envelope<DataList<Subscription>>, KrakenError> {
        let mut query = Query::new().push("broadcaster_id", broadcaster_id);
        if !user_ids.is_empty() {
            query = query.push_all("user_id", user_ids.iter().take(100));
        }
        self.get("/helix/subscriptions", Some(query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::models::{DataList, Subscription};

    #[test]
    fn subscription_deserializes_tier_and_gift_flag() {
        let body = r#"{
          "data": [{
            "broadcaster_id": "123",
            "broadcaster_name": "Display",
            "is_gift": true,
            "tier": "2000",
            "plan_name": "Channel Subscription",
            "user_id": "456",
            "user_name": "Sub"
          }]
        }"#;

        let parsed: DataList<Subscription> = serde_json::from_str(body).unwrap();
        assert!(parsed.data[0].is_gift);
        assert_eq!(parsed.data[0].tier, "2000");
    }
}
