pub mod auth;
pub mod contract;
pub mod dashboard;
pub mod dispatch;
pub mod meeting;
pub mod shared;
