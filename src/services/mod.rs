pub mod history;
pub mod roster;
pub mod server;
