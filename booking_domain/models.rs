pub mod airport;
pub mod passenger;
