//! Recording fakes of the outbound seams, shared by the service tests.

use std::sync::{Arc, Mutex};

use serenity::async_trait;

use crate::server::{
    error::AppError,
    model::payload::MessagePayload,
    service::responder::{ChannelSender, Responder},
};


/// A call made through a [`Responder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Reply(MessagePayload),
    EditReply(MessagePayload),
    Send(MessagePayload),
}

fn simulated_failure() -> AppError {
    AppError::IoErr(std::io::Error::other("simulated Discord failure"))
}

/// Responder that records every call and optionally fails them all.
#[derive(Default)]
pub struct RecordingResponder {
    calls: Mutex<Vec<Call>>,
    fail: bool,
}

impl RecordingResponder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn edits(&self) -> Vec<MessagePayload> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::EditReply(payload) => Some(payload),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn reply(&self, message: &MessagePayload) -> Result<(), AppError> {
        self.record(Call::Reply(message.clone()))
    }

    async fn edit_reply(&self, message: &MessagePayload) -> Result<(), AppError> {
        self.record(Call::EditReply(message.clone()))
    }

    async fn send(&self, message: &MessagePayload) -> Result<(), AppError> {
        self.record(Call::Send(message.clone()))
    }
}

/// Channel sender that records `(channel_id, payload)` pairs.
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<(u64, MessagePayload)>>,
    fail: bool,
}

impl RecordingSender {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(u64, MessagePayload)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelSender for RecordingSender {
    async fn send_to(&self, channel_id: u64, message: &MessagePayload) -> Result<(), AppError> {
        self.sent.lock().unwrap().push((channel_id, message.clone()));
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(())
    }
}
