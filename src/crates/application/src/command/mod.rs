pub mod interaction;
pub mod shared;
pub mod wallpaper;
