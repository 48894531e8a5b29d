pub mod breach;
pub mod health;
pub mod summary;
