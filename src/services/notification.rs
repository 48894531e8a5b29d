//! Simulated breach alert delivery.
//!
//! A real deployment would hand alerts to an email provider; the console
//! notifier below only writes the message it would have sent to the
//! service log.

use crate::models::BreachRecord;
use async_trait::async_trait;
use std::fmt::Write as _;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Delivery seam for breach alerts. Notification never fails and is not
/// observable in the HTTP response.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, email: &str, breaches: &[BreachRecord]);
}

/// Writes the simulated alert email to the service log.
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, email: &str, breaches: &[BreachRecord]) {
        let mut body = String::from(
            "We have detected that your banking detail was found in the following data breach(es):\n\n",
        );
        for breach in breaches {
            let _ = writeln!(body, "  - Source: {}", breach.source);
            let _ = writeln!(body, "  - Date: {}", breach.date);
        }
        body.push_str("\nWe strongly recommend you take immediate action to secure your accounts.");

        tracing::info!(
            to = %email,
            from = "security@crack-bank.local",
            subject = "URGENT: Security Alert - Your Banking Detail Found in Data Breach",
            breach_count = breaches.len(),
            "[SIMULATED] Breach notification email\n{}",
            body
        );
    }
}

/// Counting notifier for tests.
#[derive(Default)]
pub struct MockNotifier {
    notify_count: AtomicU64,
    last_payload: Mutex<Option<(String, Vec<BreachRecord>)>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify_count(&self) -> u64 {
        self.notify_count.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Option<(String, Vec<BreachRecord>)> {
        self.last_payload
            .lock()
            .expect("notifier mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, email: &str, breaches: &[BreachRecord]) {
        self.notify_count.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().expect("notifier mutex poisoned") =
            Some((email.to_string(), breaches.to_vec()));

        tracing::info!(
            to = %email,
            breach_count = breaches.len(),
            "[MOCK] Breach notification would be sent"
        );
    }
}
