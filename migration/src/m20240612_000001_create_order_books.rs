use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per (exchange, pair); asks and bids are stored as JSON arrays
        manager
            .create_table(
                Table::create()
                    .table(OrderBooks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderBooks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OrderBooks::Exchange)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderBooks::Pair)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(OrderBooks::Asks).json_binary().not_null())
                    .col(ColumnDef::new(OrderBooks::Bids).json_binary().not_null())
                    .to_owned(),
            )
            .await?;

        // Upserts target this index
        manager
            .create_index(
                Index::create()
                    .name("idx_order_books_exchange_pair")
                    .table(OrderBooks::Table)
                    .col(OrderBooks::Exchange)
                    .col(OrderBooks::Pair)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderBooks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum OrderBooks {
    Table,
    Id,
    Exchange,
    Pair,
    Asks,
    Bids,
}
