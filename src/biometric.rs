//! Biometric authentication support
//!
//! Maps the outcome of a platform biometric policy evaluation to simple
//! result types. The platform context is passed to every call, so the
//! authenticator itself holds no platform state.

use derive_more::Display;
use log::{debug, info};
use thiserror::Error;

use crate::consts::DEFAULT_AUTH_REASON;

/// How the platform prompt behaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Fallbacks such as the device passcode are offered.
    #[default]
    Default,
    /// Only biometrics may be used; the fallback button is hidden.
    BiometricsOnly,
}

/// Error codes reported by the platform authentication service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum AuthErrorCode {
    AuthenticationFailed,
    UserCancel,
    UserFallback,
    SystemCancel,
    PasscodeNotSet,
    BiometryNotAvailable,
    BiometryNotEnrolled,
    BiometryLockout,
    AppCancel,
    InvalidContext,
    BiometryNotPaired,
    BiometryDisconnected,
    InvalidDimensions,
    NotInteractive,
}

impl AuthErrorCode {
    pub fn from_raw(code: i64) -> Option<Self> {
        let code = match code {
            -1 => AuthErrorCode::AuthenticationFailed,
            -2 => AuthErrorCode::UserCancel,
            -3 => AuthErrorCode::UserFallback,
            -4 => AuthErrorCode::SystemCancel,
            -5 => AuthErrorCode::PasscodeNotSet,
            -6 => AuthErrorCode::BiometryNotAvailable,
            -7 => AuthErrorCode::BiometryNotEnrolled,
            -8 => AuthErrorCode::BiometryLockout,
            -9 => AuthErrorCode::AppCancel,
            -10 => AuthErrorCode::InvalidContext,
            -12 => AuthErrorCode::BiometryNotPaired,
            -13 => AuthErrorCode::BiometryDisconnected,
            -14 => AuthErrorCode::InvalidDimensions,
            -1004 => AuthErrorCode::NotInteractive,
            _ => return None,
        };
        Some(code)
    }

    pub fn raw(self) -> i64 {
        match self {
            AuthErrorCode::AuthenticationFailed => -1,
            AuthErrorCode::UserCancel => -2,
            AuthErrorCode::UserFallback => -3,
            AuthErrorCode::SystemCancel => -4,
            AuthErrorCode::PasscodeNotSet => -5,
            AuthErrorCode::BiometryNotAvailable => -6,
            AuthErrorCode::BiometryNotEnrolled => -7,
            AuthErrorCode::BiometryLockout => -8,
            AuthErrorCode::AppCancel => -9,
            AuthErrorCode::InvalidContext => -10,
            AuthErrorCode::BiometryNotPaired => -12,
            AuthErrorCode::BiometryDisconnected => -13,
            AuthErrorCode::InvalidDimensions => -14,
            AuthErrorCode::NotInteractive => -1004,
        }
    }
}

/// Raw error reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("platform authentication error {code}")]
pub struct PlatformError {
    pub code: i64,
}

/// Full result of an authentication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthResult {
    Success,
    Failure(AuthErrorCode),
}

/// Result of an authentication attempt reduced to what a screen needs to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SimplifiedResult {
    Success,
    CanRetry,
    Lockout,
    NotAvailable,
    NotEnrolled,
}

impl From<AuthResult> for SimplifiedResult {
    fn from(result: AuthResult) -> Self {
        match result {
            AuthResult::Success => SimplifiedResult::Success,
            AuthResult::Failure(code) => match code {
                AuthErrorCode::AuthenticationFailed
                | AuthErrorCode::UserFallback
                | AuthErrorCode::UserCancel
                | AuthErrorCode::SystemCancel => SimplifiedResult::CanRetry,
                AuthErrorCode::BiometryLockout => SimplifiedResult::Lockout,
                AuthErrorCode::BiometryNotAvailable => SimplifiedResult::NotAvailable,
                AuthErrorCode::BiometryNotEnrolled => SimplifiedResult::NotEnrolled,
                _ => SimplifiedResult::Lockout,
            },
        }
    }
}

/// Platform context able to evaluate the biometric authentication policy.
///
/// `Err(None)` means the platform refused without reporting an error.
pub trait AuthContext {
    fn set_fallback_title(&mut self, title: &str);

    fn can_evaluate_policy(&mut self) -> Result<(), Option<PlatformError>>;

    fn evaluate_policy(&mut self, reason: &str) -> Result<(), Option<PlatformError>>;
}

fn as_auth_result(outcome: Result<(), Option<PlatformError>>) -> AuthResult {
    match outcome {
        Ok(()) => AuthResult::Success,
        Err(Some(error)) => match AuthErrorCode::from_raw(error.code) {
            Some(code) => AuthResult::Failure(code),
            None => {
                debug!("unknown {}, treating as invalid context", error);
                AuthResult::Failure(AuthErrorCode::InvalidContext)
            }
        },
        Err(None) => AuthResult::Failure(AuthErrorCode::InvalidContext),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Authenticator {
    mode: AuthMode,
}

impl Authenticator {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    fn prepare<C: AuthContext + ?Sized>(&self, ctx: &mut C) {
        if self.mode == AuthMode::BiometricsOnly {
            ctx.set_fallback_title("");
        }
    }

    /// Checks whether biometric authentication can run on `ctx`.
    pub fn can_evaluate<C: AuthContext + ?Sized>(&self, ctx: &mut C) -> AuthResult {
        self.prepare(ctx);
        as_auth_result(ctx.can_evaluate_policy())
    }

    /// Runs the policy evaluation on `ctx` if the platform allows it.
    pub fn evaluate<C: AuthContext + ?Sized>(&self, ctx: &mut C, reason: Option<&str>) -> AuthResult {
        let result = match self.can_evaluate(ctx) {
            AuthResult::Success => {
                as_auth_result(ctx.evaluate_policy(reason.unwrap_or(DEFAULT_AUTH_REASON)))
            }
            failure => failure,
        };
        info!("biometric authentication result: {:?}", result);
        result
    }

    pub fn evaluate_simplified<C: AuthContext + ?Sized>(
        &self,
        ctx: &mut C,
        reason: Option<&str>,
    ) -> SimplifiedResult {
        self.evaluate(ctx, reason).into()
    }
}
