use crate::form::record::FormRecord;
use futures::future::LocalBoxFuture;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Failed to encode form record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Response was not valid JSON: {0}")]
    Decode(String),
}

/// Sends an encoded record somewhere and hands back the parsed reply.
pub trait Transport {
    fn post_json(&self, body: String) -> LocalBoxFuture<'_, Result<Value, SubmitError>>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Settled,
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// What actually happened on the wire. Only ever logged; the user sees the
/// same thank-you path either way.
#[derive(Debug)]
pub enum SubmissionOutcome {
    Delivered(Value),
    Failed(SubmitError),
}

impl SubmissionOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmissionOutcome::Delivered(_))
    }
}

/// UI side of the quote form as seen by the submit pipeline.
pub trait FormSurface {
    fn enter(&self, state: SubmissionState);
    fn show_success(&self);
    fn reset_fields(&self);
    fn reset_upload(&self);
}

/// One submit click: post the record once, then settle the form as a success
/// no matter what the transport reported.
pub async fn submit<T, S>(transport: &T, surface: &S, record: FormRecord) -> SubmissionOutcome
where
    T: Transport + ?Sized,
    S: FormSurface + ?Sized,
{
    surface.enter(SubmissionState::Submitting);

    let outcome = match record.to_json() {
        Ok(body) => match transport.post_json(body).await {
            Ok(reply) => SubmissionOutcome::Delivered(reply),
            Err(e) => SubmissionOutcome::Failed(e),
        },
        Err(e) => SubmissionOutcome::Failed(e.into()),
    };

    match &outcome {
        SubmissionOutcome::Delivered(reply) => log::info!("Form submitted successfully: {}", reply),
        SubmissionOutcome::Failed(e) => log::error!("Error submitting form: {}", e),
    }

    settle(surface);
    outcome
}

fn settle<S: FormSurface + ?Sized>(surface: &S) {
    surface.show_success();
    surface.reset_fields();
    surface.reset_upload();
    surface.enter(SubmissionState::Settled);
}
