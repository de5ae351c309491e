pub mod client;
pub mod error;
pub mod model;
pub mod web_api;

pub use client::PlaybackClient;
pub use error::ApiError;
pub use model::{Device, DeviceType, PlayOptions, PlayableItem, PlaybackState, RepeatState};
pub use web_api::WebApiClient;
