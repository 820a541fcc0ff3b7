use sea_orm_migration::{prelude::*, schema::*};

use super::m20250916_000009_create_review_table::Reviews;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReviewReplies::Table)
                    .if_not_exists()
                    .col(pk_auto(ReviewReplies::Id))
                    .col(integer(ReviewReplies::ReviewId))
                    .col(string(ReviewReplies::Username))
                    .col(text(ReviewReplies::ReplyContent))
                    .col(
                        timestamp_with_time_zone(ReviewReplies::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_reply_review_id")
                            .from(ReviewReplies::Table, ReviewReplies::ReviewId)
                            .to(Reviews::Table, Reviews::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReviewReplies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReviewReplies {
    Table,
    Id,
    ReviewId,
    Username,
    ReplyContent,
    CreatedAt,
}
