pub mod playlist;
pub mod popups;
pub mod transport;
