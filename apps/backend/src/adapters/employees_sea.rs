//! SeaORM adapter for the employee credential store.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::entities::employees;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;
use crate::repos::employees::{CredentialStore, Employee, EmployeeStatus};

/// Credential store backed by the MySQL `Empleados` table.
pub struct SeaEmployeeStore {
    db: DatabaseConnection,
}

impl SeaEmployeeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialStore for SeaEmployeeStore {
    async fn find_by_dni(&self, dni: &str) -> Result<Option<Employee>, DomainError> {
        let row = employees::Entity::find()
            .filter(employees::Column::Dni.eq(dni))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Employee::from))
    }
}

impl From<employees::Model> for Employee {
    fn from(model: employees::Model) -> Self {
        Self {
            employee_code: model.cod_empleado,
            dni: model.dni,
            secret: model.contrasena,
            status: EmployeeStatus::from_wire(&model.estado),
            is_admin: model.es_administrador,
        }
    }
}
