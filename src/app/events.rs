use crate::spotify::{Device, PlayableItem, PlaybackState};
use crossterm::event::Event;

pub enum AppEvent {
    Input(Event),
    PlaybackUpdate(Option<PlaybackState>),
    /// Device list for the dialog request with this generation
    DevicesLoaded(u64, Result<Vec<Device>, String>),
    QueueLoaded(Result<Vec<PlayableItem>, String>),
    /// A fire-and-forget call failed; `modal` routes it to the error popup
    CommandFailed { message: String, modal: bool },
    Tick,
}
