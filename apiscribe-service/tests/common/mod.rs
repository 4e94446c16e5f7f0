use apiscribe_service::config::{AppConfig, CommonConfig, OpenAiSettings};
use apiscribe_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the service on a random port, pointed at the given upstream
    /// base URL with a test API key.
    pub async fn spawn(api_base_url: &str) -> Self {
        Self::spawn_with_key("test-key", api_base_url).await
    }

    /// Spawn with an explicit API key. An empty key selects the built-in
    /// mock completion provider.
    pub async fn spawn_with_key(api_key: &str, api_base_url: &str) -> Self {
        let config = AppConfig {
            common: CommonConfig { port: 0 },
            openai: OpenAiSettings {
                api_key: api_key.to_string(),
                model: "gpt-4o".to_string(),
                api_base_url: api_base_url.to_string(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
