// logging_service/src/log.rs
//! Structured audit trail for authentication and record events.
use std::fmt;

use models::AuthError;
use slog::{info, o, warn, Drain, Logger};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMethod {
    Password,
    Face,
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMethod::Password => write!(f, "password"),
            AuthMethod::Face => write!(f, "face"),
        }
    }
}

pub struct AuditLog {
    logger: Logger,
}

impl AuditLog {
    pub fn new() -> Self {
        let decorator = slog_term::TermDecorator::new().build();
        let drain = slog_term::FullFormat::new(decorator).build().fuse();
        let drain = slog_async::Async::new(drain).build().fuse();
        let logger = Logger::root(drain, o!("service" => "medicloud-portal"));
        Self { logger }
    }

    /// Wraps an existing logger; used by tests to capture output.
    pub fn with_logger(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn auth_succeeded(&self, patient_id: &str, method: AuthMethod, confidence: Option<f64>) {
        info!(self.logger, "authentication succeeded";
            "patient_id" => patient_id,
            "method" => %method,
            "confidence" => confidence
        );
    }

    pub fn auth_failed(&self, patient_id: &str, method: AuthMethod, error: &AuthError) {
        warn!(self.logger, "authentication failed";
            "patient_id" => patient_id,
            "method" => %method,
            "error" => %error
        );
    }

    pub fn record_created(&self, patient_id: &str) {
        info!(self.logger, "patient record created"; "patient_id" => patient_id);
    }

    pub fn profile_updated(&self, patient_id: &str, section: &str) {
        info!(self.logger, "patient profile updated";
            "patient_id" => patient_id,
            "section" => section
        );
    }

    pub fn seed_completed(&self, records: usize) {
        info!(self.logger, "demo seed completed"; "records" => records);
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use models::AuthError;
    use slog::{o, Discard, Logger};

    use super::{AuditLog, AuthMethod};

    #[test]
    fn should_log_through_injected_logger() {
        // Smoke check: all entry points accept the discard drain.
        let audit = AuditLog::with_logger(Logger::root(Discard, o!()));
        audit.auth_succeeded("PAT001", AuthMethod::Face, Some(0.95));
        audit.auth_failed("PAT001", AuthMethod::Password, &AuthError::InvalidCredentials);
        audit.record_created("PAT001");
        audit.profile_updated("PAT001", "contact_info");
        audit.seed_completed(3);
    }
}
