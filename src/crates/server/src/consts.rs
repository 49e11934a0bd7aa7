pub const URL_PATH_API: &str = "/api";
pub const URL_PATH_ADMIN_API: &str = "/api/admin";

/// 客户端设备标识请求头
pub const DEVICE_ID_HEADER: &str = "X-Device-Id";
/// 设备标识 cookie 名
pub const DEVICE_ID_COOKIE: &str = "device_id";
