use application::command::shared::IdGenerator;
use application::error::AppError;
use async_trait::async_trait;
use domain::value::WallpaperId;
use uuid::Uuid;

/// 随机 UUID v4 生成器。壁纸主键即对外 URL 中的 id。
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdGenerator for UuidIdGenerator {
    async fn next_id(&self) -> Result<WallpaperId, AppError> {
        Ok(WallpaperId::from(Uuid::new_v4()))
    }
}
