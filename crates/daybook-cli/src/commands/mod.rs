pub mod diary;
pub mod export;
pub mod health;
pub mod misc;
pub mod session;
