use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::types::RecordStatus;
use crate::utils::error::ServiceError;

/// Record database model
///
/// One row per registered pipeline observation. The domain `record_id` is
/// deliberately NOT unique: the same identifier appears once per pipeline
/// stage, and duplicate rows within a stage are tolerated (the engine
/// deduplicates).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "records")]
pub struct Model {
    /// Row ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Domain record identifier (non-unique)
    pub record_id: i64,

    /// Owning batch
    pub batch_id: i32,

    /// Pipeline stage, stored lowercase
    pub status: String,

    /// Optional metadata
    #[sea_orm(column_type = "Text", nullable)]
    pub record_metadata: Option<String>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp (set only when the row is updated)
    pub updated_at: Option<DateTimeWithTimeZone>,
}

/// Record entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning batch relation
    #[sea_orm(
        belongs_to = "super::batch::Entity",
        from = "Column::BatchId",
        to = "super::batch::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Batch,
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Parse the stored status back into the domain enum
    pub fn parse_status(&self) -> Result<RecordStatus, ServiceError> {
        RecordStatus::from_str(&self.status).map_err(ServiceError::Internal)
    }
}
