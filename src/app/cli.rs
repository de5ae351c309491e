use crate::app::store::PlayerView;
use clap::Parser;

/// Ampify - a retro playlist and transport deck for Spotify Connect 📼
#[derive(Parser, Debug)]
#[command(name = "ampify", version, about)]
pub struct Args {
    /// Spotify access token (overrides SPOTIFY_ACCESS_TOKEN and config.toml)
    #[arg(long)]
    pub token: Option<String>,

    /// Playlist, album or show URI to load into the player on start
    #[arg(long, short = 'l')]
    pub load: Option<String>,

    /// Playlist layout (defaults to the last one used)
    #[arg(long, value_enum)]
    pub view: Option<PlayerView>,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}
