use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::types::RecordType;
use crate::utils::error::ServiceError;

/// Batch database model
///
/// A named, typed group of records tracked together through one pipeline run.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "batches")]
pub struct Model {
    /// Batch ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Batch name (unique)
    #[sea_orm(unique)]
    pub batch_name: String,

    /// Record type classifier, stored lowercase
    pub record_type: String,

    /// Optional description
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp (set only when the row is updated)
    pub updated_at: Option<DateTimeWithTimeZone>,
}

/// Batch entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Records belonging to this batch
    #[sea_orm(has_many = "super::record::Entity")]
    Records,
}

impl Related<super::record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Records.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Parse the stored classifier back into the domain enum
    pub fn parse_record_type(&self) -> Result<RecordType, ServiceError> {
        RecordType::from_str(&self.record_type).map_err(ServiceError::Internal)
    }
}
