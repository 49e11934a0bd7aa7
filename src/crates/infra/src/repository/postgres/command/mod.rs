pub mod interaction;
pub mod wallpaper;
