pub mod config;
pub mod devices;
pub mod playlist;
pub mod state;
pub mod store;
pub mod transport;

pub mod cli;
pub mod events;
pub mod inputs;
pub mod keys;
pub mod logging;
pub use state::*;
