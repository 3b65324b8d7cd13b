use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use clubaccess::catalog::PermissionCatalog;
use clubaccess::errors::{DomainError, DomainResult};
use clubaccess::services::verifier::{PhoneVerifier, SimulatedVerifier};
use clubaccess::services::Dashboard;

/// Verifier that always delivers and accepts any code.
pub struct AcceptingVerifier;

#[async_trait]
impl PhoneVerifier for AcceptingVerifier {
    async fn send_code(&self, _phone: &str) -> DomainResult<()> {
        Ok(())
    }

    async fn verify_code(&self, _phone: &str, _code: &str) -> DomainResult<bool> {
        Ok(true)
    }
}

/// Verifier that always delivers and rejects every code.
pub struct RejectingVerifier;

#[async_trait]
impl PhoneVerifier for RejectingVerifier {
    async fn send_code(&self, _phone: &str) -> DomainResult<()> {
        Ok(())
    }

    async fn verify_code(&self, _phone: &str, _code: &str) -> DomainResult<bool> {
        Ok(false)
    }
}

/// Verifier whose sends always fail.
pub struct FailingSendVerifier;

#[async_trait]
impl PhoneVerifier for FailingSendVerifier {
    async fn send_code(&self, _phone: &str) -> DomainResult<()> {
        Err(DomainError::Internal(
            "Failed to send verification code. Please try again.".to_string(),
        ))
    }

    async fn verify_code(&self, _phone: &str, _code: &str) -> DomainResult<bool> {
        Ok(false)
    }
}

/// The simulated verifier with zero delays and the random branch forced off,
/// leaving only the bypass code path.
pub fn bypass_only_verifier() -> Arc<SimulatedVerifier> {
    Arc::new(SimulatedVerifier::new(
        1.0,
        0.0,
        "123456".to_string(),
        Duration::ZERO,
        Duration::ZERO,
    ))
}

pub fn seeded_dashboard() -> Dashboard {
    Dashboard::seeded(Arc::new(PermissionCatalog::builtin()))
}
