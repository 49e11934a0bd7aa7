use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create wallpaper_stats table
        manager
            .create_table(
                Table::create()
                    .table(WallpaperStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WallpaperStats::WallpaperId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WallpaperStats::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WallpaperStats::Likes)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WallpaperStats::Downloads)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // Create wallpaper_likes table
        manager
            .create_table(
                Table::create()
                    .table(WallpaperLikes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WallpaperLikes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WallpaperLikes::WallpaperId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WallpaperLikes::DeviceId).text().not_null())
                    .col(
                        ColumnDef::new(WallpaperLikes::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one like row per (wallpaper_id, device_id) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_wallpaper_likes_wallpaper_device")
                    .table(WallpaperLikes::Table)
                    .col(WallpaperLikes::WallpaperId)
                    .col(WallpaperLikes::DeviceId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_wallpaper_likes_wallpaper_id")
                    .table(WallpaperLikes::Table)
                    .col(WallpaperLikes::WallpaperId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WallpaperLikes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WallpaperStats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WallpaperStats {
    Table,
    WallpaperId,
    Views,
    Likes,
    Downloads,
}

#[derive(DeriveIden)]
enum WallpaperLikes {
    Table,
    Id,
    WallpaperId,
    DeviceId,
    CreatedAt,
}
