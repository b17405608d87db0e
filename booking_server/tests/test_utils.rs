#[cfg(test)]
#[allow(dead_code)]
pub mod tests {
    use reqwest::{Client, RequestBuilder, StatusCode, header};
    use serde_json::json;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tokio_util::sync::CancellationToken;
    use uuid::Uuid;

    use booking_app::{
        AppBus,
        config::Config,
        test_utils::tests::{MockUnitOfWorkProvider, test_config},
    };
    use booking_web::{AppState, WebRouter};

    pub const TEST_PASSWORD: &str = "booking!";

    /// The real router served on an ephemeral port over the in-memory store.
    pub struct TestServer {
        pub client: Client,
        pub provider: Arc<MockUnitOfWorkProvider>,
        base_url: String,
        shutdown: CancellationToken,
    }

    impl Drop for TestServer {
        fn drop(&mut self) {
            self.shutdown.cancel();
        }
    }

    impl TestServer {
        pub fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }

        pub fn get(&self, path: &str) -> RequestBuilder {
            self.client.get(self.url(path))
        }

        pub fn post(&self, path: &str) -> RequestBuilder {
            self.client.post(self.url(path))
        }

        pub fn delete(&self, path: &str) -> RequestBuilder {
            self.client.delete(self.url(path))
        }

        /// Registers a fresh user and returns its email.
        pub async fn register_user(&self) -> String {
            let email = format!("agent-{}@example.com", Uuid::new_v4());
            let res = self
                .post("/identity/register")
                .json(&json!({ "email": email, "password": TEST_PASSWORD }))
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK);
            email
        }

        /// Registers and logs in a fresh user; returns the `Cookie` header value.
        pub async fn login_cookie(&self) -> String {
            let email = self.register_user().await;
            let res = self
                .post("/identity/login")
                .json(&json!({ "email": email, "password": TEST_PASSWORD }))
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK);

            session_cookie(&res).expect("login must set the session cookie")
        }
    }

    /// `name=value` of the session cookie set by `res`, if any.
    pub fn session_cookie(res: &reqwest::Response) -> Option<String> {
        res.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with("user_id="))
            .and_then(|value| value.split(';').next())
            .map(str::to_string)
    }

    pub async fn setup_web_app() -> TestServer {
        setup_web_app_with(test_config()).await
    }

    pub async fn setup_web_app_with(config: Config) -> TestServer {
        let provider = Arc::new(MockUnitOfWorkProvider::new());
        let config = Arc::new(config);
        let app_bus = Arc::new(AppBus::new(config.clone(), provider.clone()));
        let shutdown = CancellationToken::new();
        let state = AppState::new(app_bus, &config, shutdown.clone()).unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(WebRouter::serve_on(state, listener));

        TestServer {
            client: Client::new(),
            provider,
            base_url: format!("http://{addr}{}", config.api_base),
            shutdown,
        }
    }
}
