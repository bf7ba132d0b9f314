use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a registration during the review lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// Submitted, payment proof not yet reviewed.
    Pending,
    /// Payment verified by a coordinator or admin.
    Confirmed,
    /// Payment proof rejected.
    Rejected,
}

impl RegistrationStatus {
    /// All possible status values.
    pub const ALL: &'static [RegistrationStatus] = &[Self::Pending, Self::Confirmed, Self::Rejected];

    /// Returns the string representation (lowercase, as stored).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
        }
    }

    /// Returns true if the registration counts towards actual participation.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for RegistrationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl FromStr for RegistrationStatus {
    type Err = ParseVocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ParseVocabularyError {
                invalid: s.to_string(),
                expected: "pending, confirmed, rejected",
            }),
        }
    }
}

/// How the registration fee was (or will be) paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    /// Paid in cash at the registration desk.
    Cash,
    /// Part cash, part online transfer.
    Hybrid,
    /// Paid fully online (UPI / bank transfer).
    Online,
}

impl PaymentMode {
    /// All possible payment modes.
    pub const ALL: &'static [PaymentMode] = &[Self::Cash, Self::Hybrid, Self::Online];

    /// Returns the string representation (lowercase, as stored).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Hybrid => "hybrid",
            Self::Online => "online",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMode {
    type Err = ParseVocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "hybrid" => Ok(Self::Hybrid),
            "online" => Ok(Self::Online),
            _ => Err(ParseVocabularyError {
                invalid: s.to_string(),
                expected: "cash, hybrid, online",
            }),
        }
    }
}

/// Error when parsing an invalid vocabulary string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVocabularyError {
    invalid: String,
    expected: &'static str,
}

impl fmt::Display for ParseVocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid value '{}'. Valid values: {}",
            self.invalid, self.expected
        )
    }
}

impl std::error::Error for ParseVocabularyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_roundtrip() {
        for status in RegistrationStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            let parsed: RegistrationStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "confirmed".parse::<RegistrationStatus>().unwrap(),
            RegistrationStatus::Confirmed
        );
        assert!("Confirmed".parse::<RegistrationStatus>().is_err());
        assert!("invalid".parse::<RegistrationStatus>().is_err());
    }

    #[test]
    fn test_payment_mode_from_str() {
        assert_eq!("cash".parse::<PaymentMode>().unwrap(), PaymentMode::Cash);
        assert_eq!("online".parse::<PaymentMode>().unwrap(), PaymentMode::Online);
        assert!("card".parse::<PaymentMode>().is_err());
    }
}
