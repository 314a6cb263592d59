//! Olist schema for local development databases and tests.
//!
//! Production stores already carry these tables; the dashboard only reads them.

pub use sea_orm_migration::prelude::*;

mod m20180901_000001_create_parties;
mod m20180901_000002_create_catalog;
mod m20180901_000003_create_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20180901_000001_create_parties::Migration),
            Box::new(m20180901_000002_create_catalog::Migration),
            Box::new(m20180901_000003_create_orders::Migration),
        ]
    }
}
