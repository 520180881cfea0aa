pub mod company;
pub mod cost_center;
pub mod employee;
pub mod notification;
pub mod parameter;
pub mod punch;
pub mod shift;
pub mod user;
