//! Account status with its linear registration order.
//!
//! The linear states carry an integer rank (0..=50). `Suspended` and
//! `Banned` are side-states outside that order. Any persisted value that is
//! not a declared code decodes to `Unrecognized` so that callers can surface
//! it instead of guessing.

use serde::{Deserialize, Serialize};

/// Registration status of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum AccountStatus {
    /// No code issued yet
    NewRegistration,
    /// Registration code issued, awaiting profile submission
    EmailVerified,
    /// Profile submitted, awaiting review
    BasicInfoSubmitted,
    /// Reviewed by an assistant
    AssistantReviewed,
    /// Reviewed by staff
    StaffReviewed,
    /// Reviewed by a manager
    ManagerReviewed,
    /// Suspended by an operator
    Suspended,
    /// Banned by an operator
    Banned,
    /// A persisted value outside the declared set
    Unrecognized(i32),
}

impl AccountStatus {
    /// Every declared status, in declaration order
    pub const DECLARED: [AccountStatus; 8] = [
        AccountStatus::NewRegistration,
        AccountStatus::EmailVerified,
        AccountStatus::BasicInfoSubmitted,
        AccountStatus::AssistantReviewed,
        AccountStatus::StaffReviewed,
        AccountStatus::ManagerReviewed,
        AccountStatus::Suspended,
        AccountStatus::Banned,
    ];

    /// Decode a persisted status code
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => AccountStatus::NewRegistration,
            10 => AccountStatus::EmailVerified,
            20 => AccountStatus::BasicInfoSubmitted,
            30 => AccountStatus::AssistantReviewed,
            40 => AccountStatus::StaffReviewed,
            50 => AccountStatus::ManagerReviewed,
            -1 => AccountStatus::Suspended,
            -2 => AccountStatus::Banned,
            other => AccountStatus::Unrecognized(other),
        }
    }

    /// Persisted status code
    pub fn code(&self) -> i32 {
        match self {
            AccountStatus::NewRegistration => 0,
            AccountStatus::EmailVerified => 10,
            AccountStatus::BasicInfoSubmitted => 20,
            AccountStatus::AssistantReviewed => 30,
            AccountStatus::StaffReviewed => 40,
            AccountStatus::ManagerReviewed => 50,
            AccountStatus::Suspended => -1,
            AccountStatus::Banned => -2,
            AccountStatus::Unrecognized(code) => *code,
        }
    }

    /// Position in the linear order, `None` for side-states and unknown values
    pub fn rank(&self) -> Option<i32> {
        match self {
            AccountStatus::NewRegistration
            | AccountStatus::EmailVerified
            | AccountStatus::BasicInfoSubmitted
            | AccountStatus::AssistantReviewed
            | AccountStatus::StaffReviewed
            | AccountStatus::ManagerReviewed => Some(self.code()),
            AccountStatus::Suspended | AccountStatus::Banned | AccountStatus::Unrecognized(_) => {
                None
            }
        }
    }

    /// Whether this is a terminal side-state (suspended or banned)
    pub fn is_side_state(&self) -> bool {
        matches!(self, AccountStatus::Suspended | AccountStatus::Banned)
    }

    /// Whether this status is at or past `other` in the linear order.
    ///
    /// Always false when either side has no rank.
    pub fn is_at_least(&self, other: AccountStatus) -> bool {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => a >= b,
            _ => false,
        }
    }

    /// Whether a transition to `target` moves forward.
    ///
    /// Linear states may only move to a strictly higher rank. Any non-side
    /// state may move to a side-state. Nothing leaves a side-state.
    pub fn can_advance_to(&self, target: AccountStatus) -> bool {
        if self.is_side_state() || matches!(self, AccountStatus::Unrecognized(_)) {
            return false;
        }
        if target.is_side_state() {
            return true;
        }
        match (self.rank(), target.rank()) {
            (Some(from), Some(to)) => to > from,
            _ => false,
        }
    }

    /// Human-readable stage description, `None` for unrecognized values
    pub fn description(&self) -> Option<&'static str> {
        match self {
            AccountStatus::NewRegistration => Some("New registration"),
            AccountStatus::EmailVerified => Some("Email verified"),
            AccountStatus::BasicInfoSubmitted => Some("Basic information submitted"),
            AccountStatus::AssistantReviewed => Some("Reviewed by assistant"),
            AccountStatus::StaffReviewed => Some("Reviewed by staff"),
            AccountStatus::ManagerReviewed => Some("Reviewed by manager"),
            AccountStatus::Suspended => Some("Account suspended"),
            AccountStatus::Banned => Some("Account banned"),
            AccountStatus::Unrecognized(_) => None,
        }
    }
}

impl From<i32> for AccountStatus {
    fn from(code: i32) -> Self {
        AccountStatus::from_code(code)
    }
}

impl From<AccountStatus> for i32 {
    fn from(status: AccountStatus) -> Self {
        status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip_for_declared_statuses() {
        for status in AccountStatus::DECLARED {
            assert_eq!(AccountStatus::from_code(status.code()), status);
        }
    }

    #[test]
    fn test_unknown_code_is_unrecognized() {
        assert_eq!(AccountStatus::from_code(15), AccountStatus::Unrecognized(15));
        assert_eq!(AccountStatus::from_code(-7), AccountStatus::Unrecognized(-7));
        assert!(AccountStatus::Unrecognized(15).description().is_none());
        assert!(AccountStatus::Unrecognized(60).rank().is_none());
    }

    #[test]
    fn test_linear_order() {
        assert!(AccountStatus::StaffReviewed.is_at_least(AccountStatus::BasicInfoSubmitted));
        assert!(AccountStatus::BasicInfoSubmitted.is_at_least(AccountStatus::BasicInfoSubmitted));
        assert!(!AccountStatus::EmailVerified.is_at_least(AccountStatus::BasicInfoSubmitted));
        assert!(!AccountStatus::Banned.is_at_least(AccountStatus::BasicInfoSubmitted));
        assert!(!AccountStatus::Unrecognized(99).is_at_least(AccountStatus::NewRegistration));
    }

    #[test]
    fn test_forward_only_transitions() {
        assert!(AccountStatus::EmailVerified.can_advance_to(AccountStatus::BasicInfoSubmitted));
        assert!(AccountStatus::EmailVerified.can_advance_to(AccountStatus::ManagerReviewed));
        assert!(!AccountStatus::StaffReviewed.can_advance_to(AccountStatus::AssistantReviewed));
        assert!(!AccountStatus::EmailVerified.can_advance_to(AccountStatus::EmailVerified));
        assert!(AccountStatus::StaffReviewed.can_advance_to(AccountStatus::Suspended));
        assert!(!AccountStatus::Suspended.can_advance_to(AccountStatus::ManagerReviewed));
        assert!(!AccountStatus::Banned.can_advance_to(AccountStatus::Suspended));
    }

    #[test]
    fn test_serializes_as_integer_code() {
        let json = serde_json::to_string(&AccountStatus::BasicInfoSubmitted).unwrap();
        assert_eq!(json, "20");

        let parsed: AccountStatus = serde_json::from_str("-2").unwrap();
        assert_eq!(parsed, AccountStatus::Banned);
    }
}
