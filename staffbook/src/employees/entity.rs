use crate::Mappable;
use sea_orm::entity::prelude::*;

/// A row of the `employee` table.
///
/// Also the mapper's source and destination for the employee DTOs; `id` is
/// excluded by name whenever a DTO is copied in.
#[derive(Clone, Debug, Default, PartialEq, Eq, DeriveEntityModel, Mappable)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub cel: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
