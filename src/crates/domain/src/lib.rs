pub mod interaction;
pub mod value;
pub mod wallpaper;
