#[allow(clippy::wildcard_imports)]
use sea_orm::entity::prelude::*;

/// Row of the pre-existing MySQL `Empleados` table.
///
/// Only the credential-relevant columns are mapped; the table carries
/// further personal data this service never reads.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Empleados")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "cod_empleado")]
    pub cod_empleado: i64,
    pub dni: String,
    #[sea_orm(column_name = "contraseña")]
    pub contrasena: String,
    pub estado: String,
    #[sea_orm(column_name = "es_administrador")]
    pub es_administrador: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
