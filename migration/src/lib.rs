pub use sea_orm_migration::prelude::*;

mod m20240612_000001_create_order_books;
mod m20240612_000002_create_order_history;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240612_000001_create_order_books::Migration),
            Box::new(m20240612_000002_create_order_history::Migration),
        ]
    }
}
