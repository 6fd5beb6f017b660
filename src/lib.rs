//! Plataforma de Cursos backend library.

pub mod config;
pub mod http;
pub mod security;

pub use config::AppConfig;
pub use http::HttpServer;
