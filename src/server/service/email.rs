//! Delivery of email recovery codes.

use std::future::Future;

use crate::server::error::AppError;

/// Sends a recovery code to an email address.
pub trait CodeSender: Send + Sync {
    /// # Arguments
    /// - `email` - Recipient address
    /// - `code` - 6 digit code
    /// - `expires_minutes` - Minutes until the code expires
    fn send_code(
        &self,
        email: &str,
        code: &str,
        expires_minutes: i64,
    ) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// Writes codes to the log instead of sending mail.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogCodeSender;

impl CodeSender for LogCodeSender {
    async fn send_code(&self, email: &str, code: &str, expires_minutes: i64) -> Result<(), AppError> {
        tracing::info!(
            "Recovery code for {}: {} (expires in {} minutes)",
            email,
            code,
            expires_minutes
        );

        Ok(())
    }
}
