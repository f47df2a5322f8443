pub mod admin;
pub mod bid;
pub mod settlement;
pub mod view;
