use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::config::Config;
use crate::errors::{DomainError, DomainResult};

/// Backend boundary for the phone verification gate.
///
/// The production system would put an SMS provider behind this; here the only
/// real implementation simulates one. Tests supply deterministic
/// implementations to force either branch.
#[async_trait]
pub trait PhoneVerifier: Send + Sync {
    /// Request a verification code for the given phone number.
    async fn send_code(&self, phone: &str) -> DomainResult<()>;

    /// Check a submitted 6-digit code. `Ok(false)` means the code was
    /// rejected; `Err` means the check itself failed.
    async fn verify_code(&self, phone: &str, code: &str) -> DomainResult<bool>;
}

/// Simulated verifier: fixed latencies and random outcomes, no backend.
///
/// Sending succeeds with `send_success_rate` (default 0.9); verification
/// accepts the bypass code unconditionally, otherwise succeeds with
/// `verify_success_rate` (default 0.7).
pub struct SimulatedVerifier {
    send_success_rate: f64,
    verify_success_rate: f64,
    bypass_code: String,
    send_delay: Duration,
    verify_delay: Duration,
}

impl SimulatedVerifier {
    pub fn new(
        send_success_rate: f64,
        verify_success_rate: f64,
        bypass_code: String,
        send_delay: Duration,
        verify_delay: Duration,
    ) -> Self {
        Self {
            send_success_rate,
            verify_success_rate,
            bypass_code,
            send_delay,
            verify_delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.send_success_rate,
            config.verify_success_rate,
            config.bypass_code.clone(),
            Duration::from_millis(config.send_delay_ms),
            Duration::from_millis(config.verify_delay_ms),
        )
    }
}

impl Default for SimulatedVerifier {
    fn default() -> Self {
        Self::new(
            0.9,
            0.7,
            "123456".to_string(),
            Duration::from_millis(1500),
            Duration::from_millis(1000),
        )
    }
}

#[async_trait]
impl PhoneVerifier for SimulatedVerifier {
    async fn send_code(&self, phone: &str) -> DomainResult<()> {
        tokio::time::sleep(self.send_delay).await;

        if rand::thread_rng().gen::<f64>() < self.send_success_rate {
            tracing::debug!(phone, "Simulated verification code sent");
            Ok(())
        } else {
            tracing::debug!(phone, "Simulated send failure");
            Err(DomainError::Internal(
                "Failed to send verification code. Please try again.".to_string(),
            ))
        }
    }

    async fn verify_code(&self, phone: &str, code: &str) -> DomainResult<bool> {
        tokio::time::sleep(self.verify_delay).await;

        if code == self.bypass_code {
            tracing::debug!(phone, "Bypass code accepted");
            return Ok(true);
        }

        Ok(rand::thread_rng().gen::<f64>() < self.verify_success_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_verifier(send_rate: f64, verify_rate: f64) -> SimulatedVerifier {
        SimulatedVerifier::new(
            send_rate,
            verify_rate,
            "123456".to_string(),
            Duration::ZERO,
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn test_send_always_succeeds_at_rate_one() {
        let verifier = instant_verifier(1.0, 1.0);
        assert!(verifier.send_code("5551234567").await.is_ok());
    }

    #[tokio::test]
    async fn test_send_always_fails_at_rate_zero() {
        let verifier = instant_verifier(0.0, 0.0);
        assert!(verifier.send_code("5551234567").await.is_err());
    }

    #[tokio::test]
    async fn test_bypass_code_wins_over_zero_rate() {
        let verifier = instant_verifier(1.0, 0.0);
        let accepted = verifier.verify_code("5551234567", "123456").await.unwrap();
        assert!(accepted);
    }

    #[tokio::test]
    async fn test_wrong_code_rejected_at_rate_zero() {
        let verifier = instant_verifier(1.0, 0.0);
        let accepted = verifier.verify_code("5551234567", "000000").await.unwrap();
        assert!(!accepted);
    }

    #[test]
    fn test_default_rates_match_simulation() {
        let verifier = SimulatedVerifier::default();
        assert_eq!(verifier.send_success_rate, 0.9);
        assert_eq!(verifier.verify_success_rate, 0.7);
        assert_eq!(verifier.bypass_code, "123456");
    }
}
