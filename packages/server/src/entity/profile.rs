use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A registrant's demographic profile. Identity comes from the external
/// auth provider; every demographic field is self-reported and optional.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
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

    #[sea_orm(has_many)]
    pub registrations: HasMany<super::registration::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
