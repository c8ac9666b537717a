pub mod config;
pub mod db;
pub mod http;
pub mod premium;
pub mod repositories;
