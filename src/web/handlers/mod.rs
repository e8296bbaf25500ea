//! HTML page handlers.

mod home;
mod not_found;
mod shortener;

pub use home::home_handler;
pub use not_found::not_found_handler;
pub use shortener::{ShortenFormInput, ShortenerTemplate, shortener_page, shortener_submit};
