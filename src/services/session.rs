//! Explicit state container for the configure/submit/receive lifecycle.
//!
//! Every submission is tagged with a monotonically increasing token, and
//! only the response carrying the latest token may touch the applied
//! snapshot. A response to a superseded request arrives, is recognized as
//! stale, and is dropped, so out-of-order completions can never overwrite
//! newer results.

use thiserror::Error;

use crate::domain::series::ResultsPayload;
use crate::domain::study::StudyConfig;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no study configured")]
    NotConfigured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
pub struct StudySession {
    study: Option<StudyConfig>,
    applied: Option<ResultsPayload>,
    error: Option<String>,
    issued: u64,
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure(&mut self, study: StudyConfig) {
        self.study = Some(study);
    }

    pub fn study(&self) -> Option<&StudyConfig> {
        self.study.as_ref()
    }

    /// Issues the token for one submission. Fails when nothing has been
    /// configured yet.
    pub fn submit(&mut self) -> Result<RequestToken, SessionError> {
        if self.study.is_none() {
            return Err(SessionError::NotConfigured);
        }
        self.issued += 1;
        Ok(RequestToken(self.issued))
    }

    /// Applies a decoded payload. Returns whether the snapshot was taken;
    /// a stale token leaves the session untouched.
    pub fn receive_success(&mut self, token: RequestToken, payload: ResultsPayload) -> bool {
        if token.0 != self.issued {
            return false;
        }
        self.applied = Some(payload);
        self.error = None;
        true
    }

    /// Records a failed request. The previously applied snapshot stays as
    /// it was; only the error flag changes, and only for the latest token.
    pub fn receive_error(&mut self, token: RequestToken, message: String) -> bool {
        if token.0 != self.issued {
            return false;
        }
        self.error = Some(message);
        true
    }

    pub fn applied(&self) -> Option<&ResultsPayload> {
        self.applied.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
