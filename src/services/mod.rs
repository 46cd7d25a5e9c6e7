pub mod league;
pub mod server;
