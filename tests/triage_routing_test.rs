// Routing behavior through the public API, with deterministic doubles

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use medgate::agent::{AgentError, AgentRequest, TextAgent};
use medgate::triage::{TriageRouter, EMERGENCY_RESPONSE};

/// Records the order in which collaborators are invoked.
#[derive(Default)]
struct CallLog {
    entries: Mutex<Vec<String>>,
}

impl CallLog {
    fn record(&self, who: &str) {
        self.entries.lock().unwrap().push(who.to_string());
    }

    fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

/// Double that replies with a fixed string after an optional delay and
/// logs every call. The delay makes the suspension point real so
/// cancellation can land mid-call.
struct StubAgent {
    name: String,
    reply: String,
    delay: Duration,
    log: Arc<CallLog>,
    calls: AtomicUsize,
}

impl StubAgent {
    fn new(name: &str, reply: &str, log: Arc<CallLog>) -> Self {
        Self {
            name: name.to_string(),
            reply: reply.to_string(),
            delay: Duration::ZERO,
            log,
            calls: AtomicUsize::new(0),
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl TextAgent for StubAgent {
    async fn respond(
        &self,
        _request: &AgentRequest,
        cancel: &CancellationToken,
    ) -> Result<String, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.log.record(&self.name);

        tokio::select! {
            _ = cancel.cancelled() => Err(AgentError::Cancelled {
                agent: self.name.clone(),
            }),
            _ = tokio::time::sleep(self.delay) => Ok(self.reply.clone()),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[tokio::test]
async fn test_classification_always_precedes_specialist_call() -> Result<()> {
    let log = Arc::new(CallLog::default());
    let classifier = Arc::new(StubAgent::new("classifier", "new_symptoms", log.clone()));
    let specialist = Arc::new(StubAgent::new("specialist", "rest and hydrate", log.clone()));
    let router = TriageRouter::new(classifier, specialist);

    let reply = router
        .route("I woke up with a rash", &CancellationToken::new())
        .await?;

    assert_eq!(reply, "rest and hydrate");
    assert_eq!(log.entries(), vec!["classifier", "specialist"]);
    Ok(())
}

#[tokio::test]
async fn test_emergency_never_reaches_specialist() -> Result<()> {
    let log = Arc::new(CallLog::default());
    let classifier = Arc::new(StubAgent::new("classifier", "emergency", log.clone()));
    let specialist = Arc::new(StubAgent::new("specialist", "unused", log.clone()));
    let router = TriageRouter::new(classifier, specialist.clone());

    let reply = router
        .route("crushing chest pain", &CancellationToken::new())
        .await?;

    assert_eq!(reply, EMERGENCY_RESPONSE);
    assert_eq!(log.entries(), vec!["classifier"]);
    assert_eq!(specialist.calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_requests_share_one_router() -> Result<()> {
    let log = Arc::new(CallLog::default());
    let classifier = Arc::new(
        StubAgent::new("classifier", "other", log.clone())
            .with_delay(Duration::from_millis(20)),
    );
    let specialist = Arc::new(StubAgent::new("specialist", "general advice", log.clone()));
    let router = Arc::new(TriageRouter::new(classifier, specialist));

    let mut handles = Vec::new();
    for i in 0..8 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            router
                .route(&format!("question {}", i), &CancellationToken::new())
                .await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await??, "general advice");
    }
    Ok(())
}

#[tokio::test]
async fn test_cancelling_one_request_leaves_others_running() -> Result<()> {
    let log = Arc::new(CallLog::default());
    let classifier = Arc::new(
        StubAgent::new("classifier", "other", log.clone())
            .with_delay(Duration::from_millis(100)),
    );
    let specialist = Arc::new(StubAgent::new("specialist", "still here", log.clone()));
    let router = Arc::new(TriageRouter::new(classifier, specialist));

    let cancelled_token = CancellationToken::new();
    let live_token = CancellationToken::new();

    let cancelled_route = {
        let router = router.clone();
        let token = cancelled_token.clone();
        tokio::spawn(async move { router.route("first request", &token).await })
    };
    let live_route = {
        let router = router.clone();
        let token = live_token.clone();
        tokio::spawn(async move { router.route("second request", &token).await })
    };

    // Let both reach the classifier suspension point, then cancel only one.
    tokio::time::sleep(Duration::from_millis(10)).await;
    cancelled_token.cancel();

    let cancelled_result = cancelled_route.await?;
    assert!(cancelled_result.is_err());

    let live_result = live_route.await?;
    assert_eq!(live_result?, "still here");
    Ok(())
}
