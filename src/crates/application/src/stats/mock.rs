//! Deterministic placeholder stats derived from a wallpaper id.
//!
//! The gallery shows download/like/view numbers for wallpapers that have
//! no persisted counters yet. To keep those numbers stable across page
//! loads without a backing store, they are derived from the id alone:
//! same id, same numbers, always. The visible strings carry a fixed "K"
//! suffix regardless of magnitude; that is the cosmetic contract the
//! front end was built against, so it must not be routed through
//! [`crate::stats::display::format_count`].

use crate::stats::DerivedStats;

/// 32 位带符号滚动哈希（乘数 31，对 UTF-16 code unit 逐个累加）
fn hash_id(id: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in id.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }
    hash
}

/// Base counters before display formatting. Ranges:
/// downloads 5..=54, likes 1..=10, views = downloads * 3 + 0..=19.
fn derive_bases(id: &str) -> (u32, u32, u32, bool, u32) {
    // unsigned_abs keeps i32::MIN from panicking on abs()
    let h = hash_id(id).unsigned_abs();
    let downloads = h % 50 + 5;
    let likes = h % 10 + 1;
    let views = downloads * 3 + h % 20;
    let featured = h % 3 == 0;
    let decimal = h % 10;
    (downloads, likes, views, featured, decimal)
}

/// Derive the full display stats for one id. Pure and deterministic.
pub fn derive(id: &str) -> DerivedStats {
    let (downloads, likes, views, featured, decimal) = derive_bases(id);
    DerivedStats {
        downloads: format!("{}.{}K", downloads, decimal),
        likes: format!("{}.{}K", likes, decimal),
        views: format!("{}.{}K", views, decimal),
        featured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_same_id() {
        let a = derive("f47ac10b-58cc-4372-a567-0e02b2c3d479");
        let b = derive("f47ac10b-58cc-4372-a567-0e02b2c3d479");
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_id_known_vector() {
        let (downloads, likes, views, featured, decimal) = derive_bases("");
        assert_eq!(downloads, 5);
        assert_eq!(likes, 1);
        assert_eq!(views, 15);
        assert!(featured);
        assert_eq!(decimal, 0);

        let stats = derive("");
        assert_eq!(stats.downloads, "5.0K");
        assert_eq!(stats.likes, "1.0K");
        assert_eq!(stats.views, "15.0K");
        assert!(stats.featured);
    }

    #[test]
    fn test_base_ranges_hold_for_many_ids() {
        for i in 0..5000 {
            let id = format!("wallpaper-{}-{}", i, i * 31);
            let (downloads, likes, views, _, decimal) = derive_bases(&id);
            assert!((5..=54).contains(&downloads), "downloads out of range: {}", downloads);
            assert!((1..=10).contains(&likes), "likes out of range: {}", likes);
            assert!(views >= downloads * 3 && views < downloads * 3 + 20);
            assert!(decimal < 10);
        }
    }

    #[test]
    fn test_featured_frequency_near_one_third() {
        let total = 30_000;
        let featured = (0..total)
            .filter(|i| derive_bases(&format!("sample-id-{}", i)).3)
            .count();
        let ratio = featured as f64 / total as f64;
        assert!(ratio > 0.25 && ratio < 0.42, "featured ratio {}", ratio);
    }

    #[test]
    fn test_hash_matches_polynomial_rolling_hash() {
        // hash("a") = 97, hash("ab") = 97 * 31 + 98
        assert_eq!(hash_id("a"), 97);
        assert_eq!(hash_id("ab"), 97 * 31 + 98);
        assert_eq!(hash_id(""), 0);
    }

    #[test]
    fn test_hash_wraps_instead_of_overflowing() {
        // long ids push the accumulator well past i32::MAX
        let id = "x".repeat(10_000);
        let _ = derive(&id);
    }

    #[test]
    fn test_display_uses_fixed_k_suffix() {
        // every rendered value ends in "K" no matter the magnitude
        for i in 0..100 {
            let stats = derive(&format!("id-{}", i));
            assert!(stats.downloads.ends_with('K'));
            assert!(stats.likes.ends_with('K'));
            assert!(stats.views.ends_with('K'));
        }
    }
}
