pub mod arabic;
pub mod database;
pub mod repositories;
pub mod time;
pub mod transliteration;
pub mod util;
