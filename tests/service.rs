//! Comparison service and HTTP API tests.
//!
//! Uses stub [`CorpusSource`]s so nothing leaves the machine.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use healthstats::baseline::BaselineStore;
use healthstats::csv_store::CsvFileBackend;
use healthstats::server::{router, FAILURE_MESSAGE};
use healthstats::service::ComparisonService;
use healthstats_core::compare::{DEFAULT_STATISTICS_LABEL, USER_INPUT_STATISTICS_LABEL};
use healthstats_core::corpus::{CorpusSource, FetchFailure};
use healthstats_core::error::CompareError;
use healthstats_core::stats::{compute_aggregate, AggregateRecord};
use healthstats_core::store::memory::InMemoryBackend;
use healthstats_core::store::BaselineBackend;
use serde_json::Value;
use tempfile::TempDir;

const REFERENCE_CORPUS: &str = "Chronic heart failure is a progressive syndrome. \
    Patients often report fatigue and dyspnea. \
    Early treatment reduces hospital admissions.";

// ─── Stub sources ───────────────────────────────────────────────────

/// Returns a fixed corpus after an optional delay, counting calls.
struct CountingSource {
    text: String,
    delay: Duration,
    calls: AtomicUsize,
}

impl CountingSource {
    fn new(text: &str) -> Arc<Self> {
        Self::slow(text, Duration::ZERO)
    }

    fn slow(text: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            text: text.to_string(),
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CorpusSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    async fn fetch_reference_corpus(&self) -> Result<String, FetchFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.text.clone())
    }
}

/// Always fails, as an unreachable search service would.
struct UnreachableSource;

#[async_trait]
impl CorpusSource for UnreachableSource {
    fn name(&self) -> &str {
        "unreachable"
    }

    async fn fetch_reference_corpus(&self) -> Result<String, FetchFailure> {
        Err(FetchFailure::Transport("connection refused".to_string()))
    }
}

fn service_with(
    backend: Arc<dyn BaselineBackend>,
    source: Arc<dyn CorpusSource>,
) -> Arc<ComparisonService> {
    Arc::new(ComparisonService::new(Arc::new(BaselineStore::new(
        backend, source,
    ))))
}

fn sample_baseline() -> AggregateRecord {
    AggregateRecord {
        sentence_count: 412,
        word_count: 9_870,
        average_word_length: 5.2,
        unique_word_count: 2_301,
        character_count: 51_324,
        noun_count: 3_410,
        adjective_count: 1_202,
        verb_count: 1_488,
    }
}

// ─── Service ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_reference_sentence_against_persisted_baseline() {
    let source = CountingSource::new(REFERENCE_CORPUS);
    let service = service_with(
        Arc::new(InMemoryBackend::with_record(sample_baseline())),
        source.clone(),
    );

    let response = service
        .compare("Heart disease is common. It affects many people.")
        .await
        .unwrap();

    let rows = response.statistics.rows();
    assert_eq!(rows[0].label, DEFAULT_STATISTICS_LABEL);
    assert_eq!(rows[0].record, sample_baseline());
    assert_eq!(rows[1].label, USER_INPUT_STATISTICS_LABEL);

    let user = &rows[1].record;
    assert_eq!(user.sentence_count, 2);
    assert_eq!(user.word_count, 10);
    assert!(user.noun_count >= 3);
    assert!(user.verb_count >= 2);

    assert!(response.features.unique_words.contains("Heart"));
    assert!(response.features.nouns.iter().any(|n| n == "disease"));
    assert!(response.features.verbs.iter().any(|v| v == "affects"));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_empty_input_yields_zero_row() {
    let service = service_with(
        Arc::new(InMemoryBackend::with_record(sample_baseline())),
        CountingSource::new(REFERENCE_CORPUS),
    );

    let response = service.compare("").await.unwrap();
    assert_eq!(response.statistics.user_input().record, AggregateRecord::default());
    assert_eq!(response.statistics.baseline().record, sample_baseline());
    assert!(response.features.unique_words.is_empty());
    assert!(response.features.nouns.is_empty());
}

#[tokio::test]
async fn test_first_request_builds_and_persists_csv() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("data").join("aggregated_results.csv");
    let source = CountingSource::new(REFERENCE_CORPUS);
    let service = service_with(Arc::new(CsvFileBackend::new(&path)), source.clone());

    let first = service.compare("Cells grow.").await.unwrap();
    assert!(path.is_file());
    assert_eq!(
        first.statistics.baseline().record,
        compute_aggregate(REFERENCE_CORPUS)
    );

    // A fresh service over the same file reads it instead of fetching.
    let other_source = CountingSource::new("Completely different text.");
    let second = service_with(Arc::new(CsvFileBackend::new(&path)), other_source.clone())
        .compare("Cells die.")
        .await
        .unwrap();

    assert_eq!(
        second.statistics.baseline().record,
        first.statistics.baseline().record
    );
    assert_eq!(source.calls(), 1);
    assert_eq!(other_source.calls(), 0);
}

#[tokio::test]
async fn test_baseline_unchanged_across_requests() {
    let source = CountingSource::new(REFERENCE_CORPUS);
    let service = service_with(Arc::new(InMemoryBackend::new()), source.clone());

    let inputs = ["Heart disease is common.", "", "Blood pressure rose sharply."];
    let mut baselines = Vec::new();
    for text in inputs {
        baselines.push(service.compare(text).await.unwrap().statistics.baseline().record);
    }

    assert!(baselines.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_unavailable_corpus_persists_nothing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("aggregated_results.csv");
    let service = service_with(
        Arc::new(CsvFileBackend::new(&path)),
        Arc::new(UnreachableSource),
    );

    let err = service.compare("Heart disease is common.").await.unwrap_err();
    assert!(matches!(err, CompareError::BaselineUnavailable(_)));
    assert_eq!(err.code(), "baseline_unavailable");
    assert!(!path.exists());
}

#[tokio::test]
async fn test_malformed_baseline_is_processing_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("aggregated_results.csv");
    std::fs::write(&path, "sentence_count,word_count\nnot,numbers\n").unwrap();

    let service = service_with(
        Arc::new(CsvFileBackend::new(&path)),
        CountingSource::new(REFERENCE_CORPUS),
    );

    let err = service.compare("Cells grow.").await.unwrap_err();
    assert!(matches!(err, CompareError::Processing(_)));
}

#[tokio::test]
async fn test_concurrent_first_requests_fetch_once() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("aggregated_results.csv");
    let source = CountingSource::slow(REFERENCE_CORPUS, Duration::from_millis(100));
    let service = service_with(Arc::new(CsvFileBackend::new(&path)), source.clone());

    let mut handles = Vec::new();
    for i in 0..10 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let text = format!("Request {} mentions the heart.", i);
            service.compare(&text).await.unwrap()
        }));
    }

    let mut baselines = Vec::new();
    for h in handles {
        baselines.push(h.await.unwrap().statistics.baseline().record);
    }

    assert_eq!(source.calls(), 1);
    assert!(baselines.iter().all(|b| *b == compute_aggregate(REFERENCE_CORPUS)));
}

#[tokio::test]
async fn test_independent_stores_agree_on_one_baseline() {
    // Two stores share a file but not a lock, as two processes would.
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("aggregated_results.csv");

    let a = service_with(
        Arc::new(CsvFileBackend::new(&path)),
        CountingSource::slow(REFERENCE_CORPUS, Duration::from_millis(50)),
    );
    let b = service_with(
        Arc::new(CsvFileBackend::new(&path)),
        CountingSource::slow("Cells grow. Cells die.", Duration::from_millis(50)),
    );

    let (ra, rb) = tokio::join!(a.compare("One."), b.compare("Two."));
    let (ra, rb) = (ra.unwrap(), rb.unwrap());

    assert_eq!(
        ra.statistics.baseline().record,
        rb.statistics.baseline().record
    );
    let persisted = CsvFileBackend::new(&path).read().await.unwrap().unwrap();
    assert_eq!(persisted, ra.statistics.baseline().record);
}

// ─── HTTP ───────────────────────────────────────────────────────────

async fn spawn_server(service: Arc<ComparisonService>, max_body_bytes: usize) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(service, max_body_bytes);
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    let base = format!("http://{}", addr);
    wait_for_server(&base).await;
    base
}

async fn wait_for_server(base: &str) {
    let client = reqwest::Client::new();
    let url = format!("{}/health", base);
    for _ in 0..50 {
        if let Ok(resp) = client.get(&url).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("Server did not become ready within 5 seconds");
}

#[tokio::test]
async fn test_http_health() {
    let service = service_with(
        Arc::new(InMemoryBackend::new()),
        CountingSource::new(REFERENCE_CORPUS),
    );
    let base = spawn_server(service, 1024).await;

    let body: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_http_compare_statistics() {
    let service = service_with(
        Arc::new(InMemoryBackend::with_record(sample_baseline())),
        CountingSource::new(REFERENCE_CORPUS),
    );
    let base = spawn_server(service, 64 * 1024).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/compareStatistics", base))
        .body("Heart disease is common. It affects many people.")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["content"], "Heart disease is common. It affects many people.");

    let stats = body["statistics"].as_array().unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0]["label"], DEFAULT_STATISTICS_LABEL);
    assert_eq!(stats[0]["word_count"], 9_870);
    assert_eq!(stats[1]["label"], USER_INPUT_STATISTICS_LABEL);
    assert_eq!(stats[1]["sentence_count"], 2);
    assert_eq!(stats[1]["word_count"], 10);

    let nouns = body["nouns"].as_array().unwrap();
    assert_eq!(stats[1]["noun_count"], nouns.len());
}

#[tokio::test]
async fn test_http_empty_body() {
    let service = service_with(
        Arc::new(InMemoryBackend::with_record(sample_baseline())),
        CountingSource::new(REFERENCE_CORPUS),
    );
    let base = spawn_server(service, 1024).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/compareStatistics", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["statistics"][1]["word_count"], 0);
    assert_eq!(body["statistics"][1]["average_word_length"], 0.0);
    assert_eq!(body["unique_words"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_http_baseline_unavailable() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("aggregated_results.csv");
    let service = service_with(
        Arc::new(CsvFileBackend::new(&path)),
        Arc::new(UnreachableSource),
    );
    let base = spawn_server(service, 1024).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/compareStatistics", base))
        .body("Heart disease is common.")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 503);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "baseline_unavailable");
    assert_eq!(body["error"]["message"], FAILURE_MESSAGE);
    assert!(body.get("statistics").is_none());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_http_rejects_oversized_body() {
    let service = service_with(
        Arc::new(InMemoryBackend::with_record(sample_baseline())),
        CountingSource::new(REFERENCE_CORPUS),
    );
    let base = spawn_server(service, 16).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/compareStatistics", base))
        .body("This body is clearly longer than sixteen bytes.")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 413);
}
