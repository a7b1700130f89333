use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Append-only; client fields are denormalized onto every row
        manager
            .create_table(
                Table::create()
                    .table(OrderHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OrderHistory::ClientName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderHistory::ExchangeName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(OrderHistory::Label).string_len(255).not_null())
                    .col(ColumnDef::new(OrderHistory::Pair).string_len(255).not_null())
                    .col(ColumnDef::new(OrderHistory::Side).string_len(50).not_null())
                    .col(ColumnDef::new(OrderHistory::Type).string_len(50).not_null())
                    .col(ColumnDef::new(OrderHistory::BaseQty).double().not_null())
                    .col(ColumnDef::new(OrderHistory::Price).double().not_null())
                    .col(
                        ColumnDef::new(OrderHistory::AlgorithmNamePlaced)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(OrderHistory::LowestSellPrc).double().not_null())
                    .col(ColumnDef::new(OrderHistory::HighestBuyPrc).double().not_null())
                    .col(
                        ColumnDef::new(OrderHistory::CommissionQuoteQty)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderHistory::TimePlaced)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // History is always fetched by client
        manager
            .create_index(
                Index::create()
                    .name("idx_order_history_client_name")
                    .table(OrderHistory::Table)
                    .col(OrderHistory::ClientName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderHistory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum OrderHistory {
    Table,
    Id,
    ClientName,
    ExchangeName,
    Label,
    Pair,
    Side,
    Type,
    BaseQty,
    Price,
    AlgorithmNamePlaced,
    LowestSellPrc,
    HighestBuyPrc,
    CommissionQuoteQty,
    TimePlaced,
}
