use futures::future::{FutureExt, LocalBoxFuture};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("request body could not be encoded: {0}")]
    Encode(String),
}

pub type SubmitOutcome = Result<(), SubmitError>;

/// What a form hands to the transport.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Submission {
    pub form: &'static str,
    pub fields: BTreeMap<String, String>,
}

/// Where submissions go. Forms only ever see the outcome.
pub trait SubmitTransport {
    fn submit(&self, submission: Submission) -> LocalBoxFuture<'static, SubmitOutcome>;
}

/// Waits a fixed delay, then reports success.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatedTransport {
    pub delay_ms: u32,
}

impl SubmitTransport for SimulatedTransport {
    fn submit(&self, submission: Submission) -> LocalBoxFuture<'static, SubmitOutcome> {
        let delay_ms = self.delay_ms;
        async move {
            let body = match encode(&submission) {
                Ok(body) => body,
                Err(err) => return Err(err),
            };
            log::info!("Simulating {} submission ({} bytes)", submission.form, body.len());
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            Ok(())
        }
        .boxed_local()
    }
}

/// JSON request body for a submission.
pub fn encode(submission: &Submission) -> Result<String, SubmitError> {
    serde_json::to_string(submission).map_err(|err| SubmitError::Encode(err.to_string()))
}
