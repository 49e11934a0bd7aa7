use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create wallpapers table
        manager
            .create_table(
                Table::create()
                    .table(Wallpapers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Wallpapers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Wallpapers::Title).text().not_null())
                    .col(ColumnDef::new(Wallpapers::Description).text().null())
                    .col(ColumnDef::new(Wallpapers::Category).text().null())
                    .col(
                        ColumnDef::new(Wallpapers::Tags)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Wallpapers::ImageUrl).text().not_null())
                    .col(ColumnDef::new(Wallpapers::ThumbnailUrl).text().null())
                    .col(ColumnDef::new(Wallpapers::MediumUrl).text().null())
                    .col(ColumnDef::new(Wallpapers::LargeUrl).text().null())
                    .col(ColumnDef::new(Wallpapers::OriginalUrl).text().null())
                    .col(
                        ColumnDef::new(Wallpapers::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 列表页按 created_at 降序翻页
        manager
            .create_index(
                Index::create()
                    .name("idx_wallpapers_created_at")
                    .table(Wallpapers::Table)
                    .col(Wallpapers::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_wallpapers_category")
                    .table(Wallpapers::Table)
                    .col(Wallpapers::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Wallpapers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Wallpapers {
    Table,
    Id,
    Title,
    Description,
    Category,
    Tags,
    ImageUrl,
    ThumbnailUrl,
    MediumUrl,
    LargeUrl,
    OriginalUrl,
    CreatedAt,
}
