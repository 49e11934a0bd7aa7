use std::fmt::{self, Display};
use uuid::Uuid;

/// 壁纸聚合 ID（UUID 主键）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallpaperId(Uuid);

impl WallpaperId {
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for WallpaperId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<WallpaperId> for Uuid {
    fn from(id: WallpaperId) -> Self {
        id.0
    }
}

impl Display for WallpaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque client-supplied token scoping "has this client liked this item"
/// checks, without full authentication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DeviceId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
