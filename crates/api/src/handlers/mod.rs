pub mod dashboard;
pub mod notification;
