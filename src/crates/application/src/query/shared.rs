use crate::query::QueryError;
use uuid::Uuid;

/// Strict wallpaper id check: canonical hyphenated textual form,
/// versions 1 through 5. `uuid::Uuid::parse_str` also accepts the
/// simple/braced/urn forms, which URLs never carry, so length is
/// checked first.
pub fn parse_wallpaper_id(raw: &str) -> Result<Uuid, QueryError> {
    if raw.len() != 36 {
        return Err(QueryError::InvalidInput(format!(
            "malformed wallpaper id: {}",
            raw
        )));
    }
    let id = Uuid::parse_str(raw)
        .map_err(|_| QueryError::InvalidInput(format!("malformed wallpaper id: {}", raw)))?;
    let version = id.get_version_num();
    if !(1..=5).contains(&version) {
        return Err(QueryError::InvalidInput(format!(
            "unsupported wallpaper id version: {}",
            version
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_canonical_v4() {
        assert!(parse_wallpaper_id("f47ac10b-58cc-4372-a567-0e02b2c3d479").is_ok());
    }

    #[test]
    fn test_rejects_free_text() {
        assert!(parse_wallpaper_id("abc").is_err());
        assert!(parse_wallpaper_id("").is_err());
    }

    #[test]
    fn test_rejects_simple_form() {
        // same uuid without hyphens must not pass
        assert!(parse_wallpaper_id("f47ac10b58cc4372a5670e02b2c3d479").is_err());
    }

    #[test]
    fn test_rejects_nil_uuid() {
        assert!(parse_wallpaper_id("00000000-0000-0000-0000-000000000000").is_err());
    }
}
