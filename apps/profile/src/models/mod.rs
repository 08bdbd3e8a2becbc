pub mod algorand;
pub mod github;
