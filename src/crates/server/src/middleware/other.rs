use crate::consts;
use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    HttpMessage,
};
use domain::value::DeviceId;

/// device_id middleware resolves the client device identifier from the
/// request header, falling back to the cookie, and adds it to the
/// request context. Handlers that accept a `deviceId` query parameter
/// use that as a last resort themselves.
pub async fn device_id(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let header_device = req
        .headers()
        .get(consts::DEVICE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let device = header_device
        .or_else(|| req.cookie(consts::DEVICE_ID_COOKIE).map(|c| c.value().to_string()));

    if let Some(id) = device {
        if !id.is_empty() {
            req.extensions_mut().insert(DeviceId::new(id));
        }
    }

    next.call(req).await
}

pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PATCH", "PUT", "DELETE", "HEAD"])
        .allow_any_header()
        .max_age(3600)
}
