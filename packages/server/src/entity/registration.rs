use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// One of: pending, confirmed, rejected
    pub status: String,
    /// One of: cash, hybrid, online. NULL until payment is recorded.
    pub payment_mode: Option<String>,
    pub transaction_id: Option<String>,

    pub event_id: i32,
    #[sea_orm(belongs_to, from = "event_id", to = "id")]
    pub event: HasOne<super::event::Entity>,

    pub profile_id: i32,
    #[sea_orm(belongs_to, from = "profile_id", to = "id")]
    pub profile: HasOne<super::profile::Entity>,

    /// Non-empty only on a team leader's row.
    #[sea_orm(has_many)]
    pub team_members: HasMany<super::team_member::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
