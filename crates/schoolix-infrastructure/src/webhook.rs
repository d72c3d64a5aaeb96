//! Webhook notification sink.
//!
//! Posts verified student records to a spreadsheet-backed endpoint. Delivery is
//! at most once: the request runs on a detached task, the response is never
//! read, and failures are only logged.

use reqwest::Client;
use serde::Serialize;

use schoolix_core::notify::Notifier;
use schoolix_core::session::StudentRecord;

/// Flat body accepted by the spreadsheet script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub name: String,
    #[serde(rename = "adminNo")]
    pub admin_no: String,
    pub roll: String,
    pub reason: String,
}

impl From<&StudentRecord> for WebhookPayload {
    fn from(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            admin_no: record.admission_no.clone(),
            roll: record.roll_no.clone(),
            reason: record.reason.clone(),
        }
    }
}

#[derive(Clone)]
pub struct WebhookNotifier {
    client: Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl Notifier for WebhookNotifier {
    fn notify(&self, record: StudentRecord) {
        let payload = WebhookPayload::from(&record);
        let client = self.client.clone();
        let url = self.url.clone();

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::error!("No async runtime available, student record not dispatched");
            return;
        };

        handle.spawn(async move {
            match client.post(&url).json(&payload).send().await {
                Ok(_) => tracing::info!("Verification record dispatched for {}", payload.name),
                Err(err) => tracing::error!(
                    "Error dispatching verification record: {}",
                    err.without_url()
                ),
            }
        });
    }
}
