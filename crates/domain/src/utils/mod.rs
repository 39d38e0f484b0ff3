//! Pure helpers shared by the pages and the renderer

pub mod time;
