use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OlistProductsDataset::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OlistProductsDataset::ProductId)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    // Olist ships a few hundred products without a category.
                    .col(ColumnDef::new(OlistProductsDataset::ProductCategoryName).string().null())
                    .col(ColumnDef::new(OlistProductsDataset::ProductWeightG).double().null())
                    .col(ColumnDef::new(OlistProductsDataset::ProductLengthCm).double().null())
                    .col(ColumnDef::new(OlistProductsDataset::ProductHeightCm).double().null())
                    .col(ColumnDef::new(OlistProductsDataset::ProductWidthCm).double().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OlistProductsDataset::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum OlistProductsDataset {
    Table,
    ProductId,
    ProductCategoryName,
    ProductWeightG,
    ProductLengthCm,
    ProductHeightCm,
    ProductWidthCm,
}
