use breach_service::config::{
    BreachConfig, CommonConfig, DatasetConfig, GoogleConfig, ModelConfig, SecurityConfig,
};
use breach_service::services::notification::MockNotifier;
use breach_service::services::providers::mock::{MockBehavior, MockTextProvider};
use breach_service::services::repository::BreachRepository;
use breach_service::startup::{AppState, Application};
use serde_json::json;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Dataset shared by most tests: one detail present in two breaches, one
/// detail unique to the first.
pub fn sample_dataset() -> serde_json::Value {
    json!({
        "LeakCo": {
            "date": "2023-01-01",
            "risk_level": "high",
            "description": "x",
            "leaked_details": ["ACC123456", "CARD99887766"]
        },
        "DarkWeb Dump": {
            "date": "2024-06-30",
            "risk_level": "medium",
            "description": "Aggregated credential dump traded on a darknet forum.",
            "leaked_details": ["ACC123456"]
        }
    })
}

pub struct TestApp {
    pub address: String,
    pub notifier: Arc<MockNotifier>,
    // Keeps the dataset file alive for the lifetime of the app.
    _dataset_file: NamedTempFile,
}

impl TestApp {
    /// Spawn the app on a random port with mock collaborators injected.
    /// The artificial lookup delay is zeroed so tests run fast.
    pub async fn spawn(
        dataset: serde_json::Value,
        behavior: MockBehavior,
        api_key: &str,
    ) -> TestApp {
        let dataset_file = NamedTempFile::new().expect("Failed to create dataset file");
        std::fs::write(dataset_file.path(), dataset.to_string())
            .expect("Failed to write dataset file");

        let config = BreachConfig {
            common: CommonConfig { port: 0 },
            dataset: DatasetConfig {
                path: dataset_file.path().display().to_string(),
                lookup_delay_seconds: 0,
            },
            google: GoogleConfig {
                api_key: api_key.to_string(),
            },
            models: ModelConfig {
                text_model: "gemini-2.0-flash".to_string(),
            },
            security: SecurityConfig {
                allowed_origins: vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                ],
            },
        };

        let repository =
            BreachRepository::load(dataset_file.path()).expect("Failed to load test dataset");
        let notifier = Arc::new(MockNotifier::new());

        let state = AppState {
            config,
            repository: Arc::new(repository),
            text_provider: Arc::new(MockTextProvider::new(behavior)),
            notifier: notifier.clone(),
        };

        let app = Application::with_state(state)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            notifier,
            _dataset_file: dataset_file,
        }
    }

    /// Shorthand for the common case: sample dataset, responding provider,
    /// configured key.
    pub async fn spawn_default() -> TestApp {
        Self::spawn(
            sample_dataset(),
            MockBehavior::Respond("Mock summary".to_string()),
            "test-api-key",
        )
        .await
    }
}
