//! API documentation.

use axum::response::Html;

/// Stoplight API documentation.
pub async fn handler() -> Html<&'static str> {
    Html(
        r#"
<html lang="en">
<head>
    <title>Postman API</title>
    <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
    <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
</head>
<body>
    <main role="main">
        <elements-api apiDescriptionUrl="/api/v1/openapi.json" router="hash" />
    </main>
</body>
</html>
"#,
    )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::infrastructure::http::{router, state::tests::test_state};

    #[tokio::test]
    async fn test_docs_handler() -> TestResult {
        let state = test_state(None, None);

        let response = TestServer::new(router(state))?.get("/api/v1").await;

        response.assert_status_ok();

        let raw_text = response.text();

        assert!(raw_text.contains("Postman API"));
        assert!(raw_text.contains("/api/v1/openapi.json"));

        Ok(())
    }

    #[tokio::test]
    async fn test_openapi_document() -> TestResult {
        let state = test_state(None, None);

        let response = TestServer::new(router(state))?
            .get("/api/v1/openapi.json")
            .await;

        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();

        assert!(json["paths"]["/api/v1/send-email"]["post"].is_object());
        assert!(json["components"]["schemas"]["EmailRequest"].is_object());
        assert_eq!(json["paths"].as_object().map(|paths| paths.len()), Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn test_only_send_email_is_routed() -> TestResult {
        let state = test_state(None, None);

        let response = TestServer::new(router(state))?
            .get("/api/v1/uptime")
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
