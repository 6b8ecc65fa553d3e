pub mod company;
pub mod job;
pub mod screening;
pub mod user;
