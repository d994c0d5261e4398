use super::*;

impl KrakenClient {
    /// Get users by ID and/or login (up to 100 of each). With no
    /// filters the authenticated user is returned.
    pub async fn get_users(
        &self,
        ids: &[String],
        logins: &[String],
    ) -> Result<Envelope<DataList<User>>, KrakenError> {
        let mut query = Query::new();
        if !ids.is_empty() {
            query = query.push_all("id", ids.iter().take(100));
        }
        if !logins.is_empty() {
            query = query.push_all("login", logins.iter().take(100));
        }
        self.get("/helix/users", some_if_nonempty(query)).await
    }

    /// Get follow relations from and/or to a user.
    pub async fn get_user_follows(
        &self,
        from_id: Option<&str>,
        to_id: Option<&str>,
        first: Option<u32>,
    ) -> Result<Envelope<DataList<Follow>>, KrakenError> {
        let mut query = Query::new();
        if let Some(from_id) = from_id {
            query = query.push("from_id", from_id);
        }
        if let Some(to_id) = to_id {
            query = query.push("to_id", to_id);
        }
        if let Some(first) = first {
            query = query.push("first", first.clamp(1, 100));
        }
        self.get("/helix/users/follows", some_if_nonempty(query))
            .await
    }

    /// Update the authenticated user's description.
    pub async fn update_user(
        &self,
        description: &str,
    ) -> Result<Envelope<DataList<User>>, KrakenError> {
        let query = Query::new().push("description", description);
        self.put("/helix/users", Some(query), None).await
    }

    /// Follow a channel on behalf of a user. Settles with 204.
    pub async fn create_user_follow(
        &self,
        from_id: &str,
        to_id: &str,
        allow_notifications: bool,
    ) -> Result<Envelope<Value>, KrakenError> {
        let body = serde_json::json!({
            "from_id": from_id,
            "to_id": to_id,
            "allow_notifications": allow_notifications,
        });
        self.post("/helix/users/follows", None, Some(body)).await
    }

    /// Remove a follow relation. Settles with 204.
    pub async fn delete_user_follow(
        &self,
        from_id: &str,
        to_id: &str,
    ) -> Result<Envelope<Value>, KrakenError> {
        let query = Query::new().push("from_id", from_id).push("to_id", to_id);
        self.delete("/helix/users/follows", Some(query)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::KrakenClient;
    use crate::transport::Method;
    use crate::transport::testing::MockTransport;

    #[tokio::test]
    async fn get_users_builds_repeated_id_and_login_pairs() {
        let transport = Arc::new(MockTransport::new().respond(
            200,
            "",
            r#"{"data":[{"id":"1","login":"a","display_name":"A"}]}"#,
        ));
        let client =
            KrakenClient::configure("clientId", Some("token".to_string()), transport.clone());

        let envelope = client
            .get_users(
                &["1".to_string(), "2".to_string()],
                &["dallas".to_string()],
            )
            .await
            .unwrap();

        assert_eq!(envelope.payload.data[0].login, "a");
        assert_eq!(
            transport.sent()[0].url,
            "https://api.twitch.tv/helix/users?id=1&id=2&login=dallas"
        );
    }

    #[tokio::test]
    async fn get_users_without_filters_has_no_query_string() {
        let transport = Arc::new(MockTransport::new().respond(200, "", r#"{"data":[]}"#));
        let client =
            KrakenClient::configure("clientId", Some("token".to_string()), transport.clone());

        client.get_users(&[], &[]).await.unwrap();

        assert_eq!(transport.sent()[0].url, "https://api.twitch.tv/helix/users");
    }

    #[tokio::test]
    async fn create_user_follow_posts_a_json_body() {
        let transport = Arc::new(MockTransport::new().respond(204, "", ""));
        let client =
            KrakenClient::configure("clientId", Some("token".to_string()), transport.clone());

        let envelope = client.create_user_follow("1", "2", true).await.unwrap();

        assert_eq!(envelope.status, 204);
        let sent = transport.sent();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(
            sent[0].body.as_deref(),
            Some(r#"{"allow_notifications":true,"from_id":"1","to_id":"2"}"#)
        );
    }
}
