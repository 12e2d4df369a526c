pub mod attributes;
pub mod book;
pub mod genre;
pub mod isbn;
