use crate::error::AppError;
use domain::value::WallpaperId;

/// 通用ID生成器接口，发布壁纸时由服务层调用
#[async_trait::async_trait]
pub trait IdGenerator: Send + Sync {
    /// 生成下一个唯一ID
    async fn next_id(&self) -> Result<WallpaperId, AppError>;
}
