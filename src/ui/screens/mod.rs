pub mod reading;
pub mod rooms;
pub mod upload;
