use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // orders
        manager
            .create_table(
                Table::create()
                    .table(OlistOrdersDataset::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OlistOrdersDataset::OrderId)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OlistOrdersDataset::CustomerId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OlistOrdersDataset::OrderStatus)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OlistOrdersDataset::OrderPurchaseTimestamp)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OlistOrdersDataset::OrderApprovedAt).date_time().null())
                    .col(
                        ColumnDef::new(OlistOrdersDataset::OrderDeliveredCarrierDate)
                            .date_time()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OlistOrdersDataset::OrderDeliveredCustomerDate)
                            .date_time()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OlistOrdersDataset::OrderEstimatedDeliveryDate)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_customer_id")
                    .table(OlistOrdersDataset::Table)
                    .col(OlistOrdersDataset::CustomerId)
                    .to_owned(),
            )
            .await?;

        // order_items
        manager
            .create_table(
                Table::create()
                    .table(OlistOrderItemsDataset::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OlistOrderItemsDataset::OrderId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OlistOrderItemsDataset::OrderItemId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OlistOrderItemsDataset::ProductId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OlistOrderItemsDataset::SellerId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(OlistOrderItemsDataset::ShippingLimitDate).date_time().null())
                    .col(ColumnDef::new(OlistOrderItemsDataset::Price).double().not_null())
                    .col(
                        ColumnDef::new(OlistOrderItemsDataset::FreightValue)
                            .double()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(OlistOrderItemsDataset::OrderId)
                            .col(OlistOrderItemsDataset::OrderItemId),
                    )
                    .to_owned(),
            )
            .await?;

        // order_payments
        manager
            .create_table(
                Table::create()
                    .table(OlistOrderPaymentsDataset::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OlistOrderPaymentsDataset::OrderId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OlistOrderPaymentsDataset::PaymentSequential)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OlistOrderPaymentsDataset::PaymentType).string_len(32).null())
                    .col(
                        ColumnDef::new(OlistOrderPaymentsDataset::PaymentInstallments)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OlistOrderPaymentsDataset::PaymentValue)
                            .double()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(OlistOrderPaymentsDataset::OrderId)
                            .col(OlistOrderPaymentsDataset::PaymentSequential),
                    )
                    .to_owned(),
            )
            .await?;

        // order_reviews (review_id is not unique in the public dataset)
        manager
            .create_table(
                Table::create()
                    .table(OlistOrderReviewsDataset::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OlistOrderReviewsDataset::ReviewId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OlistOrderReviewsDataset::OrderId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OlistOrderReviewsDataset::ReviewScore)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OlistOrderReviewsDataset::ReviewCommentMessage)
                            .text()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_order_id")
                    .table(OlistOrderReviewsDataset::Table)
                    .col(OlistOrderReviewsDataset::OrderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OlistOrderReviewsDataset::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OlistOrderPaymentsDataset::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OlistOrderItemsDataset::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OlistOrdersDataset::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum OlistOrdersDataset {
    Table,
    OrderId,
    CustomerId,
    OrderStatus,
    OrderPurchaseTimestamp,
    OrderApprovedAt,
    OrderDeliveredCarrierDate,
    OrderDeliveredCustomerDate,
    OrderEstimatedDeliveryDate,
}

#[derive(Iden)]
enum OlistOrderItemsDataset {
    Table,
    OrderId,
    OrderItemId,
    ProductId,
    SellerId,
    ShippingLimitDate,
    Price,
    FreightValue,
}

#[derive(Iden)]
enum OlistOrderPaymentsDataset {
    Table,
    OrderId,
    PaymentSequential,
    PaymentType,
    PaymentInstallments,
    PaymentValue,
}

#[derive(Iden)]
enum OlistOrderReviewsDataset {
    Table,
    ReviewId,
    OrderId,
    ReviewScore,
    ReviewCommentMessage,
}
