pub mod add;
pub mod chat;
pub mod common;
pub mod config;
pub mod dashboard;
pub mod done;
pub mod remind;
pub mod suggest;
