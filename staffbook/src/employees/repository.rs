use super::entity::{self, Entity as Employee, Model};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryOrder,
};
use std::sync::Arc;

/// Persistence for employee rows.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Model>, DbErr>;

    /// Every employee, ordered by id.
    async fn find_all(&self) -> Result<Vec<Model>, DbErr>;

    /// Stores a new row; the store assigns the id.
    async fn insert(&self, employee: Model) -> Result<Model, DbErr>;

    /// Writes every column of an existing row.
    async fn update(&self, employee: Model) -> Result<Model, DbErr>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: i32) -> Result<u64, DbErr>;
}

#[async_trait]
impl<R: EmployeeRepository + ?Sized> EmployeeRepository for Arc<R> {
    async fn find_by_id(&self, id: i32) -> Result<Option<Model>, DbErr> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Model>, DbErr> {
        (**self).find_all().await
    }

    async fn insert(&self, employee: Model) -> Result<Model, DbErr> {
        (**self).insert(employee).await
    }

    async fn update(&self, employee: Model) -> Result<Model, DbErr> {
        (**self).update(employee).await
    }

    async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        (**self).delete(id).await
    }
}

/// [`EmployeeRepository`] over a `SeaORM` connection.
#[derive(Debug, Clone)]
pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Model>, DbErr> {
        Employee::find_by_id(id).one(&self.db).await
    }

    async fn find_all(&self) -> Result<Vec<Model>, DbErr> {
        Employee::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
    }

    async fn insert(&self, employee: Model) -> Result<Model, DbErr> {
        let mut active_model = employee.into_active_model().reset_all();
        active_model.id = NotSet;
        active_model.insert(&self.db).await
    }

    async fn update(&self, employee: Model) -> Result<Model, DbErr> {
        employee
            .into_active_model()
            .reset_all()
            .update(&self.db)
            .await
    }

    async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = Employee::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
