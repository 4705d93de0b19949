// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interaction and animation core for an interactive 3D model gallery.
//!
//! Vitrine owns everything a gallery front end decides per frame: which
//! models are shown (solo or grid), how each one rotates in response to
//! pointer, touch and device tilt, the one-shot intro and model-switch
//! transitions, momentum scrolling of the portrait column, and the overlay
//! state around them (loading screen, intro prompt, info panel). Rendering
//! is left to the host, which reports loaded meshes and draws the
//! [`controller::FrameSnapshot`] produced each tick.
//!
//! # Key entry points
//!
//! - [`controller::GalleryController`] - the state machine hosts drive
//! - [`manifest::Manifest`] / [`manifest::InfoIndex`] - `models.json` and
//!   `model-info.json`
//! - [`options::Options`] - TOML-configurable tuning
//! - [`animation`] - the shared blend/transition step for every
//!   presentation
//!
//! # Frame model
//!
//! Everything is single-threaded. Input events mutate the
//! [`input::InputAggregator`]; [`controller::GalleryController::update`]
//! reads it once per tick and advances every visible display entry.
//! Time is always passed in explicitly as a [`web_time::Instant`].

pub mod animation;
pub mod camera;
pub mod controller;
pub mod error;
pub mod input;
pub mod layout;
pub mod manifest;
pub mod options;
pub mod overlay;
pub mod scene;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use controller::{
    FrameSnapshot, GalleryCommand, GalleryController, HostRequest,
};
pub use error::GalleryError;
pub use input::{InputEvent, TouchPhase, TouchPoints};
pub use manifest::{InfoIndex, Manifest};
pub use options::Options;
pub use scene::{DisplayContext, LoadedMesh, MeshBounds, NodeHandle};
