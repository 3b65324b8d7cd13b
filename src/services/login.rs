use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;

use crate::services::phone::{is_valid_login_phone, mask_phone, sanitize_login_phone};
use crate::services::verifier::PhoneVerifier;

pub const OTP_LEN: usize = 6;
pub const RESEND_COOLDOWN: Duration = Duration::from_secs(60);

/// Steps of the login gate. `Dashboard` is terminal for this flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStep {
    Phone,
    Otp,
    Dashboard,
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhoneNumber,
    #[error("Please enter the complete 6-digit verification code")]
    IncompleteCode,
    #[error("{0}")]
    SendFailed(String),
    #[error("Invalid verification code. Please try again.")]
    CodeRejected,
    #[error("{0}")]
    VerificationFailed(String),
    #[error("Resend is not available yet")]
    ResendUnavailable,
    #[error("Operation not allowed in the {0:?} step")]
    WrongStep(LoginStep),
}

/// Six-position code entry with digit-at-a-time fill, backspace, and
/// paste-fill of a complete code.
#[derive(Debug, Clone, Default)]
pub struct OtpInput {
    digits: [Option<char>; OTP_LEN],
}

impl OtpInput {
    /// Accept one digit into the first empty position. Non-digit input and
    /// input on a full code are ignored.
    pub fn push_digit(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() {
            return false;
        }
        match self.digits.iter_mut().find(|d| d.is_none()) {
            Some(slot) => {
                *slot = Some(digit);
                true
            }
            None => false,
        }
    }

    /// Clear the last filled position.
    pub fn backspace(&mut self) {
        if let Some(slot) = self.digits.iter_mut().rev().find(|d| d.is_some()) {
            *slot = None;
        }
    }

    /// Fill positions from pasted text, starting at the first. A paste with
    /// fewer than six digits fills what it has; with more, the first six are
    /// used. Returns whether the code is now complete.
    pub fn paste(&mut self, text: &str) -> bool {
        let digits: Vec<char> = text.chars().filter(|c| c.is_ascii_digit()).collect();
        for (slot, digit) in self.digits.iter_mut().zip(digits) {
            *slot = Some(digit);
        }
        self.is_complete()
    }

    pub fn clear(&mut self) {
        self.digits = [None; OTP_LEN];
    }

    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(|d| d.is_some())
    }

    pub fn filled_count(&self) -> usize {
        self.digits.iter().filter(|d| d.is_some()).count()
    }

    /// The full code, once all six positions are filled.
    pub fn code(&self) -> Option<String> {
        if self.is_complete() {
            Some(self.digits.iter().flatten().collect())
        } else {
            None
        }
    }
}

/// Countdown gating the resend action.
#[derive(Debug)]
pub struct ResendCountdown {
    cooldown: Duration,
    deadline: Instant,
}

impl ResendCountdown {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            deadline: Instant::now() + cooldown,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn can_resend(&self) -> bool {
        self.remaining().is_zero()
    }

    pub fn reset(&mut self) {
        self.deadline = Instant::now() + self.cooldown;
    }
}

/// The two-step simulated phone verification gate preceding the dashboard.
///
/// Steps move `Phone -> Otp -> Dashboard`, with `Otp -> Phone` backward.
/// Only one submission can be in flight at a time (`&mut self` on the async
/// entry points); a started submission always resolves, there is no abort.
pub struct LoginFlow {
    verifier: Arc<dyn PhoneVerifier>,
    step: LoginStep,
    phone: String,
    otp: OtpInput,
    countdown: Option<ResendCountdown>,
    resend_cooldown: Duration,
}

impl LoginFlow {
    pub fn new(verifier: Arc<dyn PhoneVerifier>) -> Self {
        Self::with_resend_cooldown(verifier, RESEND_COOLDOWN)
    }

    pub fn with_resend_cooldown(verifier: Arc<dyn PhoneVerifier>, cooldown: Duration) -> Self {
        Self {
            verifier,
            step: LoginStep::Phone,
            phone: String::new(),
            otp: OtpInput::default(),
            countdown: None,
            resend_cooldown: cooldown,
        }
    }

    pub fn step(&self) -> LoginStep {
        self.step
    }

    /// The accepted phone number (sanitized digits), empty before acceptance.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Masked phone for the verification screen.
    pub fn masked_phone(&self) -> String {
        mask_phone(&self.phone)
    }

    pub fn otp(&self) -> &OtpInput {
        &self.otp
    }

    pub fn can_resend(&self) -> bool {
        self.countdown.as_ref().is_some_and(|c| c.can_resend())
    }

    pub fn resend_remaining(&self) -> Duration {
        self.countdown
            .as_ref()
            .map(|c| c.remaining())
            .unwrap_or(Duration::ZERO)
    }

    /// Submit the phone number and request a code. On success the flow moves
    /// to the OTP step and the resend countdown starts; on failure it stays
    /// on the phone step.
    pub async fn submit_phone(&mut self, raw: &str) -> Result<(), LoginError> {
        if self.step != LoginStep::Phone {
            return Err(LoginError::WrongStep(self.step));
        }
        if !is_valid_login_phone(raw) {
            return Err(LoginError::InvalidPhoneNumber);
        }

        let digits = sanitize_login_phone(raw);
        self.verifier
            .send_code(&digits)
            .await
            .map_err(|e| LoginError::SendFailed(e.to_string()))?;

        tracing::info!(phone = %mask_phone(&digits), "Verification code sent");
        self.phone = digits;
        self.otp.clear();
        self.countdown = Some(ResendCountdown::new(self.resend_cooldown));
        self.step = LoginStep::Otp;
        Ok(())
    }

    /// Enter one OTP digit. When the digit completes the code, verification
    /// is submitted automatically. Returns true once verified.
    pub async fn enter_otp_digit(&mut self, digit: char) -> Result<bool, LoginError> {
        if self.step != LoginStep::Otp {
            return Err(LoginError::WrongStep(self.step));
        }
        self.otp.push_digit(digit);
        if self.otp.is_complete() {
            self.verify_current_code().await?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Paste digits into the code entry. When the paste completes all six
    /// positions, verification is submitted automatically. Returns true once
    /// verified.
    pub async fn paste_otp(&mut self, text: &str) -> Result<bool, LoginError> {
        if self.step != LoginStep::Otp {
            return Err(LoginError::WrongStep(self.step));
        }
        if self.otp.paste(text) {
            self.verify_current_code().await?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Explicitly submit the currently entered code.
    pub async fn submit_otp(&mut self) -> Result<(), LoginError> {
        if self.step != LoginStep::Otp {
            return Err(LoginError::WrongStep(self.step));
        }
        self.verify_current_code().await
    }

    async fn verify_current_code(&mut self) -> Result<(), LoginError> {
        let code = self.otp.code().ok_or(LoginError::IncompleteCode)?;

        let accepted = self
            .verifier
            .verify_code(&self.phone, &code)
            .await
            .map_err(|e| LoginError::VerificationFailed(e.to_string()))?;

        if accepted {
            tracing::info!(phone = %self.masked_phone(), "Phone verified");
            self.step = LoginStep::Dashboard;
            Ok(())
        } else {
            Err(LoginError::CodeRejected)
        }
    }

    /// Restart the resend countdown and clear entered digits. Calls no
    /// backend.
    pub fn resend_code(&mut self) -> Result<(), LoginError> {
        if self.step != LoginStep::Otp {
            return Err(LoginError::WrongStep(self.step));
        }
        match self.countdown.as_mut() {
            Some(countdown) if countdown.can_resend() => {
                countdown.reset();
                self.otp.clear();
                tracing::info!("Verification code resend requested");
                Ok(())
            }
            _ => Err(LoginError::ResendUnavailable),
        }
    }

    /// Back from the OTP step to phone entry.
    pub fn back_to_phone(&mut self) -> Result<(), LoginError> {
        if self.step != LoginStep::Otp {
            return Err(LoginError::WrongStep(self.step));
        }
        self.otp.clear();
        self.countdown = None;
        self.step = LoginStep::Phone;
        Ok(())
    }
}
