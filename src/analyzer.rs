use crate::errors::{AnalyzeError, EMPTY_MEAL_WARNING};
use crate::models::{AnalysisResult, MealQuery, MealRequest};
use crate::page::{Notice, Page};
use crate::render::RenderModel;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Path of the analysis endpoint relative to the backend base URL.
pub const ANALYZE_PATH: &str = "/analyze";

/// Sends one analysis request and returns the decoded result.
pub trait Transport: Send + Sync {
    fn analyze(
        &self,
        request: &MealRequest,
    ) -> impl Future<Output = Result<AnalysisResult, AnalyzeError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{ANALYZE_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn analyze(&self, request: &MealRequest) -> Result<AnalysisResult, AnalyzeError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzeError::Response {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<AnalysisResult>().await?)
    }
}

/// How an analysis call ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    /// A newer request was issued while this one was in flight; its response
    /// was dropped without touching the page.
    Stale,
}

/// Validates the meal input, calls the backend and renders the result into
/// the shared page.
pub struct Analyzer<T> {
    transport: T,
    page: Arc<Mutex<Page>>,
    generation: AtomicU64,
}

impl<T: Transport> Analyzer<T> {
    pub fn new(transport: T, page: Arc<Mutex<Page>>) -> Self {
        Self {
            transport,
            page,
            generation: AtomicU64::new(0),
        }
    }

    pub fn page(&self) -> &Arc<Mutex<Page>> {
        &self.page
    }

    /// Analyzes whatever is currently in the page's input field.
    pub async fn analyze(&self) -> Result<Outcome, AnalyzeError> {
        let raw = self.page.lock().await.input().to_string();
        self.analyze_meal(&raw).await
    }

    pub async fn analyze_meal(&self, raw: &str) -> Result<Outcome, AnalyzeError> {
        let Some(query) = MealQuery::parse(raw) else {
            self.page
                .lock()
                .await
                .show_notice(Notice::warning(EMPTY_MEAL_WARNING));
            return Err(AnalyzeError::Validation);
        };

        let generation = {
            let mut page = self.page.lock().await;
            page.reset_for_loading();
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };
        debug!(generation, meal = query.as_str(), "sending analysis request");

        let result = self.transport.analyze(&query.into_request()).await;

        let mut page = self.page.lock().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding stale analysis response");
            return Ok(Outcome::Stale);
        }

        match result {
            Ok(result) => {
                info!(
                    generation,
                    foods = result.breakdown.len(),
                    missing = result.missing.len(),
                    "rendering analysis"
                );
                page.render(RenderModel::from_result(&result));
                Ok(Outcome::Rendered)
            }
            Err(err) => {
                warn!(generation, "analysis failed: {err}");
                page.show_notice(Notice::error(format!("❌ Error: {err}")));
                Err(err)
            }
        }
    }
}
