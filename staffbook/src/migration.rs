//! Schema for the `employee` table.
//!
//! ```rust,ignore
//! use sea_orm_migration::MigratorTrait;
//! staffbook::migration::Migrator::up(&db, None).await?;
//! ```

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateEmployeeTable)]
    }
}

pub struct CreateEmployeeTable;

impl MigrationName for CreateEmployeeTable {
    fn name(&self) -> &'static str {
        "m20250101_000001_create_employee_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateEmployeeTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(Employee::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Employee::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Employee::Name).string_len(100).not_null())
            .col(
                ColumnDef::new(Employee::LastName)
                    .string_len(100)
                    .not_null(),
            )
            .col(ColumnDef::new(Employee::Age).integer().null())
            .col(ColumnDef::new(Employee::Address).string_len(100).null())
            .col(ColumnDef::new(Employee::Cel).string_len(10).null())
            .col(
                ColumnDef::new(Employee::Email)
                    .string_len(100)
                    .not_null()
                    .unique_key(),
            )
            .to_owned();

        manager.create_table(table).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    Name,
    LastName,
    Age,
    Address,
    Cel,
    Email,
}
