pub mod stats;
pub mod wallpaper;
