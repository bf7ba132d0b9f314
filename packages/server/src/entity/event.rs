use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    /// One of: Cultural, Sports, Technical
    pub category: String,
    /// One of: Individual, Group
    pub subcategory: String,
    /// NULL for free events.
    pub fee: Option<f64>,

    pub min_team_size: Option<i32>,
    pub max_team_size: Option<i32>,

    #[sea_orm(has_many)]
    pub registrations: HasMany<super::registration::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
