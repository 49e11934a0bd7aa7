use crate::repository::postgres::db_data::wallpaper as wallpaper_db;
use application::query::dao::WallpaperDao;
use application::query::QueryError;
use async_trait::async_trait;
use model::wallpaper::Wallpaper;
use sea_orm::*;
use uuid::Uuid;

pub struct WallpaperDaoImpl {
    db: DatabaseConnection,
}

impl WallpaperDaoImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_read_model(row: wallpaper_db::Model) -> Wallpaper {
    Wallpaper {
        id: row.id,
        title: row.title,
        description: row.description,
        category: row.category,
        tags: row.tags,
        image_url: row.image_url,
        thumbnail_url: row.thumbnail_url,
        medium_url: row.medium_url,
        large_url: row.large_url,
        original_url: row.original_url,
        created_at: Some(row.created_at),
    }
}

#[async_trait]
impl WallpaperDao for WallpaperDaoImpl {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Wallpaper>, QueryError> {
        let row = wallpaper_db::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        Ok(row.map(to_read_model))
    }

    async fn get_by_newest(
        &self,
        category: Option<&str>,
        offset: i32,
        limit: i32,
    ) -> Result<(Vec<Wallpaper>, i64), QueryError> {
        let mut query = wallpaper_db::Entity::find();
        if let Some(category) = category {
            query = query.filter(wallpaper_db::Column::Category.eq(category));
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;

        let rows = query
            .order_by_desc(wallpaper_db::Column::CreatedAt)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;

        Ok((
            rows.into_iter().map(to_read_model).collect(),
            total as i64,
        ))
    }

    async fn count_all(&self) -> Result<i64, QueryError> {
        let total = wallpaper_db::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        Ok(total as i64)
    }

    async fn get_not_displayable(&self) -> Result<Vec<Uuid>, QueryError> {
        let rows = wallpaper_db::Entity::find()
            .filter(
                Condition::any()
                    .add(wallpaper_db::Column::Title.eq(""))
                    .add(wallpaper_db::Column::ImageUrl.eq("")),
            )
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        Ok(rows.into_iter().map(|row| row.id).collect())
    }
}
