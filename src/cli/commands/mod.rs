pub mod auth;
pub mod backup;
pub mod company;
pub mod config;
pub mod cost_center;
pub mod db;
pub mod employee;
pub mod export;
pub mod import;
pub mod init;
pub mod notify;
pub mod param;
pub mod punch;
pub mod shift;
