pub mod wallpaper;
pub mod wallpaper_like;
pub mod wallpaper_stats;
