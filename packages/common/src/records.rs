use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::status::{PaymentMode, RegistrationStatus};

/// Top-level event category.
///
/// `ALL` fixes the ordering used by every grouped report (Cultural first,
/// then Sports, then Technical). Events whose stored category string does
/// not parse are excluded from category-grouped output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Category {
    Cultural,
    Sports,
    Technical,
}

impl Category {
    /// All categories in report order.
    pub const ALL: &'static [Category] = &[Self::Cultural, Self::Sports, Self::Technical];

    /// Case-insensitive parse; `None` for anything outside the vocabulary.
    pub fn parse(s: &str) -> Option<Category> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cultural" => Some(Self::Cultural),
            "sports" => Some(Self::Sports),
            "technical" => Some(Self::Technical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cultural => "Cultural",
            Self::Sports => "Sports",
            Self::Technical => "Technical",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an event is entered solo or as a team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Subcategory {
    Individual,
    Group,
}

impl Subcategory {
    /// Case-insensitive parse; `None` for anything outside the vocabulary.
    pub fn parse(s: &str) -> Option<Subcategory> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" => Some(Self::Individual),
            "group" => Some(Self::Group),
            _ => None,
        }
    }
}

/// School affiliation, detected from the free-text school field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub enum School {
    Soet,
    Sop,
    Soa,
}

impl School {
    /// Case-insensitive substring detection. Profiles store either the
    /// abbreviation ("SOET") or the long form ("School of Engineering ..."),
    /// so both spellings map to the same bucket.
    pub fn detect(s: &str) -> Option<School> {
        let upper = s.to_ascii_uppercase();
        if upper.contains("ENGINEERING") || upper.contains("SOET") {
            Some(Self::Soet)
        } else if upper.contains("PHARMACY") || upper.contains("SOP") {
            Some(Self::Sop)
        } else if upper.contains("ARCHITECTURE") || upper.contains("SOA") {
            Some(Self::Soa)
        } else {
            None
        }
    }
}

/// A fest event, as embedded in a registration snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i32,
    pub name: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub fee: Option<f64>,
    pub min_team_size: Option<i32>,
    pub max_team_size: Option<i32>,
}

impl EventRecord {
    pub fn category(&self) -> Option<Category> {
        self.category.as_deref().and_then(Category::parse)
    }

    pub fn subcategory(&self) -> Option<Subcategory> {
        self.subcategory.as_deref().and_then(Subcategory::parse)
    }
}

/// A registrant's demographic profile, as embedded in a snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: i32,
    pub full_name: Option<String>,
    pub roll_number: Option<String>,
    pub college_email: Option<String>,
    pub gender: Option<String>,
    pub school: Option<String>,
    pub department: Option<String>,
    pub program: Option<String>,
    pub year_of_study: Option<i32>,
    pub phone: Option<String>,
}

/// One entry of a team leader's member list.
///
/// Present only on the leader's registration row; every other member of the
/// same team has their own registration row with an empty member list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberRecord {
    pub profile_id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub college_email: Option<String>,
    pub roll_number: Option<String>,
    pub gender: Option<String>,
    pub school: Option<String>,
    pub department: Option<String>,
    pub year_of_study: Option<i32>,
    pub phone: Option<String>,
}

/// One participant's (or team leader's) sign-up for an event, fully joined
/// with its event, profile, and member list.
///
/// Every nested field is optional: aggregation degrades to `N/A`/`0`
/// substitution on partial data rather than failing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub id: i32,
    pub status: Option<RegistrationStatus>,
    pub payment_mode: Option<PaymentMode>,
    pub transaction_id: Option<String>,
    pub registered_at: Option<DateTime<Utc>>,
    pub profile: Option<ProfileRecord>,
    pub event: Option<EventRecord>,
    pub team_members: Vec<TeamMemberRecord>,
}

impl RegistrationRecord {
    /// A leader row is the one row per team carrying the member list.
    pub fn is_leader(&self) -> bool {
        !self.team_members.is_empty()
    }

    /// Event fee, or 0 when the event is missing.
    pub fn fee(&self) -> f64 {
        self.event.as_ref().and_then(|e| e.fee).unwrap_or(0.0)
    }

    pub fn event_id(&self) -> Option<i32> {
        self.event.as_ref().map(|e| e.id)
    }

    pub fn profile_id(&self) -> Option<i32> {
        self.profile.as_ref().map(|p| p.id)
    }

    pub fn category(&self) -> Option<Category> {
        self.event.as_ref().and_then(EventRecord::category)
    }

    pub fn subcategory(&self) -> Option<Subcategory> {
        self.event.as_ref().and_then(EventRecord::subcategory)
    }

    pub fn is_confirmed(&self) -> bool {
        self.status.is_some_and(|s| s.is_confirmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(Category::parse("Cultural"), Some(Category::Cultural));
        assert_eq!(Category::parse("SPORTS"), Some(Category::Sports));
        assert_eq!(Category::parse(" technical "), Some(Category::Technical));
        assert_eq!(Category::parse("Esports"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn subcategory_parse() {
        assert_eq!(Subcategory::parse("Individual"), Some(Subcategory::Individual));
        assert_eq!(Subcategory::parse("group"), Some(Subcategory::Group));
        assert_eq!(Subcategory::parse("duo"), None);
    }

    #[test]
    fn school_detection_matches_both_spellings() {
        assert_eq!(School::detect("SOET"), Some(School::Soet));
        assert_eq!(
            School::detect("School of Engineering and Technology"),
            Some(School::Soet)
        );
        assert_eq!(School::detect("School of Pharmacy"), Some(School::Sop));
        assert_eq!(School::detect("sop"), Some(School::Sop));
        assert_eq!(School::detect("School of Architecture"), Some(School::Soa));
        assert_eq!(School::detect("School of Law"), None);
    }

    #[test]
    fn missing_event_means_zero_fee() {
        let reg = RegistrationRecord::default();
        assert_eq!(reg.fee(), 0.0);
        assert_eq!(reg.event_id(), None);
        assert!(!reg.is_leader());
    }
}
