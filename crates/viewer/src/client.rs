//! Async client for the layout computation service.
//!
//! The GUI thread never blocks on the network: requests are spawned onto a
//! private tokio runtime and completions come back over a channel, drained
//! once per frame via [`ApiClient::poll`]. The one exception is
//! [`ApiClient::fetch_constants`], which runs once at startup before the
//! window exists.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use shared::{
    ConstantsResponse, ExportErrorBody, ExportRequest, GenerateRequest, GenerateResponse,
    ModuleBlock,
};

/// Service address used when none is given on the command line.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Startup must not hang when the service is down.
const CONSTANTS_TIMEOUT: Duration = Duration::from_secs(3);

/// A completed remote call, tagged for the orchestration layer.
#[derive(Debug)]
pub enum ApiEvent {
    Generate {
        /// Sequence number of the request this completion answers.
        seq: u64,
        result: Result<GenerateResponse, String>,
    },
    Export {
        /// Raw CSV bytes on success, service error message otherwise.
        result: Result<Vec<u8>, String>,
    },
}

pub struct ApiClient {
    runtime: tokio::runtime::Runtime,
    http: reqwest::Client,
    base_url: String,
    tx: Sender<ApiEvent>,
    rx: Receiver<ApiEvent>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            runtime,
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            tx,
            rx,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Blocking startup fetch of the service constants.
    pub fn fetch_constants(&self) -> Result<ConstantsResponse, String> {
        let url = format!("{}/constants", self.base_url);
        let http = self.http.clone();
        self.runtime.block_on(async move {
            let response = http
                .get(&url)
                .timeout(CONSTANTS_TIMEOUT)
                .send()
                .await
                .map_err(|e| e.to_string())?
                .error_for_status()
                .map_err(|e| e.to_string())?;
            response.json().await.map_err(|e| e.to_string())
        })
    }

    /// Fire a generate request. `notify` runs after the completion has been
    /// queued, so the caller can request a repaint.
    pub fn generate(
        &self,
        seq: u64,
        request: GenerateRequest,
        notify: impl FnOnce() + Send + 'static,
    ) {
        let url = format!("{}/generate", self.base_url);
        let http = self.http.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = post_generate(&http, &url, &request).await;
            if tx.send(ApiEvent::Generate { seq, result }).is_ok() {
                notify();
            }
        });
    }

    /// Fire an export request for the given blocks.
    pub fn export_csv(&self, blocks: Vec<ModuleBlock>, notify: impl FnOnce() + Send + 'static) {
        let url = format!("{}/export_csv", self.base_url);
        let http = self.http.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = post_export(&http, &url, ExportRequest { coords: blocks }).await;
            if tx.send(ApiEvent::Export { result }).is_ok() {
                notify();
            }
        });
    }

    /// Drain all completions queued since the last call. Never blocks.
    pub fn poll(&self) -> Vec<ApiEvent> {
        self.rx.try_iter().collect()
    }
}

async fn post_generate(
    http: &reqwest::Client,
    url: &str,
    request: &GenerateRequest,
) -> Result<GenerateResponse, String> {
    let response = http
        .post(url)
        .json(request)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let status = response.status();
    // The service reports domain failures as `success: false` bodies, some
    // of them on non-2xx statuses, so parse the body before judging status.
    match response.json::<GenerateResponse>().await {
        Ok(body) => Ok(body),
        Err(e) if status.is_success() => Err(e.to_string()),
        Err(_) => Err(format!("service returned {status}")),
    }
}

async fn post_export(
    http: &reqwest::Client,
    url: &str,
    request: ExportRequest,
) -> Result<Vec<u8>, String> {
    let response = http
        .post(url)
        .json(&request)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let status = response.status();
    if status.is_success() {
        let bytes = response.bytes().await.map_err(|e| e.to_string())?;
        return Ok(bytes.to_vec());
    }
    match response.json::<ExportErrorBody>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("service returned {status}")),
    }
}
