use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One entry of a team leader's member list. Members without an account
/// have no `profile_id`; their details live only in these columns.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub registration_id: i32,
    #[sea_orm(belongs_to, from = "registration_id", to = "id")]
    pub registration: HasOne<super::registration::Entity>,

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

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
