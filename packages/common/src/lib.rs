pub mod records;
pub mod reports;
pub mod status;

pub use records::{
    Category, EventRecord, ProfileRecord, RegistrationRecord, School, Subcategory, TeamMemberRecord,
};
pub use status::{PaymentMode, RegistrationStatus};
