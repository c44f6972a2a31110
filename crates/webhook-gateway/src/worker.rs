//! The queue-draining worker.
//!
//! A single worker task dequeues inbound messages in FIFO order, runs the
//! responder, and delivers the reply through the sink. Responder and
//! delivery failures are logged and the loop continues with the next event;
//! nothing in here can crash the gateway.

use std::time::Duration;

use bot_core::{InboundMessage, ReplySink, Responder};
use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{debug, error, info};

/// Default timeout for one outbound delivery.
const DEFAULT_REPLY_TIMEOUT: Duration = Duration::from_secs(10);

/// Worker that drains the ingestion queue.
pub struct Worker<R, S> {
    queue: mpsc::Receiver<InboundMessage>,
    responder: R,
    sink: S,
    reply_timeout: Duration,
}

impl<R, S> Worker<R, S>
where
    R: Responder,
    S: ReplySink,
{
    /// Create a worker over the receiving side of the ingestion queue.
    pub fn new(queue: mpsc::Receiver<InboundMessage>, responder: R, sink: S) -> Self {
        Self {
            queue,
            responder,
            sink,
            reply_timeout: DEFAULT_REPLY_TIMEOUT,
        }
    }

    /// Override the delivery timeout.
    pub fn with_reply_timeout(mut self, reply_timeout: Duration) -> Self {
        self.reply_timeout = reply_timeout;
        self
    }

    /// Run until the queue is closed and drained.
    pub async fn run(mut self) {
        info!(responder = self.responder.name(), "Worker started");

        while let Some(message) = self.queue.recv().await {
            self.process(message).await;
        }

        info!("Queue closed, worker stopping");
    }

    async fn process(&self, message: InboundMessage) {
        let chat_id = message.chat_id;

        let reply = match self.responder.respond(message).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(chat_id, error = %e, "Responder failed");
                return;
            }
        };

        match timeout(self.reply_timeout, self.sink.deliver(&reply)).await {
            Ok(Ok(())) => debug!(chat_id, "Reply delivered"),
            Ok(Err(e)) => {
                // Processed but undelivered; retries belong to the platform.
                error!(chat_id, error = %e, "Reply delivery failed");
            }
            Err(_) => {
                error!(chat_id, timeout = ?self.reply_timeout, "Reply delivery timed out");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bot_core::{DeliveryError, OutboundReply, ResponderError};
    use std::sync::{Arc, Mutex};

    struct UppercaseResponder;

    #[async_trait]
    impl Responder for UppercaseResponder {
        async fn respond(&self, message: InboundMessage) -> Result<OutboundReply, ResponderError> {
            if message.text == "boom" {
                return Err(ResponderError::ProcessingFailed("boom".to_string()));
            }
            Ok(OutboundReply::reply_to(&message, message.text.to_uppercase()))
        }

        fn name(&self) -> &str {
            "UppercaseResponder"
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSink {
        delivered: Arc<Mutex<Vec<OutboundReply>>>,
    }

    #[async_trait]
    impl ReplySink for RecordingSink {
        async fn deliver(&self, reply: &OutboundReply) -> Result<(), DeliveryError> {
            self.delivered.lock().unwrap().push(reply.clone());
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl ReplySink for FailingSink {
        async fn deliver(&self, _reply: &OutboundReply) -> Result<(), DeliveryError> {
            Err(DeliveryError::Transport("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_drains_queue_in_fifo_order() {
        let (tx, rx) = mpsc::channel(8);
        let sink = RecordingSink::default();
        let worker = Worker::new(rx, UppercaseResponder, sink.clone());

        for text in ["a", "b", "c"] {
            tx.send(InboundMessage::new(1, text)).await.unwrap();
        }
        drop(tx);
        worker.run().await;

        let delivered = sink.delivered.lock().unwrap();
        let texts: Vec<&str> = delivered.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_responder_error_does_not_stop_the_loop() {
        let (tx, rx) = mpsc::channel(8);
        let sink = RecordingSink::default();
        let worker = Worker::new(rx, UppercaseResponder, sink.clone());

        tx.send(InboundMessage::new(1, "boom")).await.unwrap();
        tx.send(InboundMessage::new(1, "ok")).await.unwrap();
        drop(tx);
        worker.run().await;

        let delivered = sink.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].text, "OK");
    }

    #[tokio::test]
    async fn test_delivery_failure_does_not_stop_the_loop() {
        let (tx, rx) = mpsc::channel(8);
        let worker = Worker::new(rx, UppercaseResponder, FailingSink);

        tx.send(InboundMessage::new(1, "a")).await.unwrap();
        tx.send(InboundMessage::new(1, "b")).await.unwrap();
        drop(tx);

        // Completes despite every delivery failing.
        worker.run().await;
    }

    #[tokio::test]
    async fn test_stops_when_queue_closes() {
        let (tx, rx) = mpsc::channel(8);
        let worker = Worker::new(rx, UppercaseResponder, RecordingSink::default());
        drop(tx);

        worker.run().await;
    }
}
