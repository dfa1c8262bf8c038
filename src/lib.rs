//! Book shelf service: a catalog of book records with filtering, plus a small
//! store of uploaded files, served over HTTP or AWS Lambda.

pub mod app;
pub mod books;
pub mod catalog;
pub mod core;
pub mod files;
pub mod gateway;
pub mod genres;
pub mod utils;
