//! Host-rendered overlays whose state the controller animates: the solo
//! info panel, the intro prompt and the loading screen.

mod info_panel;
mod loading;
mod prompt;

pub use info_panel::{InfoContent, InfoPanel, TiltInput};
pub use loading::{LoadingGate, LoadingStatus};
pub use prompt::IntroPrompt;
