use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // customers
        manager
            .create_table(
                Table::create()
                    .table(OlistCustomersDataset::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OlistCustomersDataset::CustomerId)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OlistCustomersDataset::CustomerUniqueId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(OlistCustomersDataset::CustomerZipCodePrefix).string_len(8).null())
                    .col(ColumnDef::new(OlistCustomersDataset::CustomerCity).string().null())
                    .col(
                        ColumnDef::new(OlistCustomersDataset::CustomerState)
                            .string_len(2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customers_unique_id")
                    .table(OlistCustomersDataset::Table)
                    .col(OlistCustomersDataset::CustomerUniqueId)
                    .to_owned(),
            )
            .await?;

        // sellers
        manager
            .create_table(
                Table::create()
                    .table(OlistSellersDataset::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OlistSellersDataset::SellerId)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OlistSellersDataset::SellerZipCodePrefix).string_len(8).null())
                    .col(ColumnDef::new(OlistSellersDataset::SellerCity).string().null())
                    .col(
                        ColumnDef::new(OlistSellersDataset::SellerState)
                            .string_len(2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OlistSellersDataset::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OlistCustomersDataset::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum OlistCustomersDataset {
    Table,
    CustomerId,
    CustomerUniqueId,
    CustomerZipCodePrefix,
    CustomerCity,
    CustomerState,
}

#[derive(Iden)]
enum OlistSellersDataset {
    Table,
    SellerId,
    SellerZipCodePrefix,
    SellerCity,
    SellerState,
}
