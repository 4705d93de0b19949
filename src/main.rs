//! Headless gallery session: loads a manifest, replays a short scripted
//! interaction through the controller and logs what a renderer would draw.
//!
//! Usage: `vitrine [--presets DIR] [--save-preset PATH] <models.json>
//! [model-info.json] [options.toml]`
//!
//! `--presets` lists the option presets in a directory; `--save-preset`
//! writes the effective options to a TOML file before the session runs.

use std::path::{Path, PathBuf};

use glam::Vec3;
use vitrine::animation::TransitionPhase;
use vitrine::{
    DisplayContext, GalleryController, InfoIndex, InputEvent, LoadedMesh,
    Manifest, MeshBounds, NodeHandle, Options,
};
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);
const USAGE: &str = "Usage: vitrine [--presets DIR] [--save-preset PATH] \
                     <models.json> [model-info.json] [options.toml]";

/// Flags pulled out of the command line ahead of the positional inputs.
#[derive(Debug, Default)]
struct Flags {
    presets_dir: Option<PathBuf>,
    save_preset: Option<PathBuf>,
}

fn split_flags(args: Vec<String>) -> Result<(Flags, Vec<String>), String> {
    let mut flags = Flags::default();
    let mut positional = Vec::new();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        let slot = match arg.as_str() {
            "--presets" => &mut flags.presets_dir,
            "--save-preset" => &mut flags.save_preset,
            _ => {
                positional.push(arg);
                continue;
            }
        };
        let value = iter
            .next()
            .ok_or_else(|| format!("{arg} needs a value\n{USAGE}"))?;
        *slot = Some(PathBuf::from(value));
    }
    Ok((flags, positional))
}

struct Session {
    controller: GalleryController,
    now: Instant,
}

impl Session {
    fn frames(&mut self, count: u32) {
        for _ in 0..count {
            self.now += FRAME;
            self.controller.update(self.now);
        }
    }

    fn input(&mut self, event: InputEvent) {
        self.controller.handle_input(event, self.now);
    }

    fn summary(&self, label: &str) {
        let snap = self.controller.snapshot();
        let visible = snap.entries.iter().filter(|e| e.visible).count();
        let settling = snap
            .entries
            .iter()
            .filter(|e| e.visible && e.transition != TransitionPhase::Idle)
            .count();
        log::info!(
            "[{label}] mode={:?} layout={:?} model={} visible={visible} \
             transitioning={settling} loading={:?}",
            snap.mode,
            snap.layout,
            snap.current_index,
            snap.loading,
        );
    }
}

fn load_inputs(
    args: &[String],
) -> Result<(Manifest, InfoIndex, Options), String> {
    let manifest_path = args.first().ok_or_else(|| USAGE.to_owned())?;
    let manifest = Manifest::load(Path::new(manifest_path))
        .map_err(|e| format!("{manifest_path}: {e}"))?;

    let info = match args.get(1) {
        Some(path) => InfoIndex::load(Path::new(path)).unwrap_or_else(|e| {
            log::warn!("model info unavailable ({path}): {e}");
            InfoIndex::default()
        }),
        None => InfoIndex::default(),
    };

    let options = match args.get(2) {
        Some(path) => Options::load(Path::new(path))
            .map_err(|e| format!("{path}: {e}"))?,
        None => Options::default(),
    };
    Ok((manifest, info, options))
}

fn main() {
    env_logger::init();

    let (flags, args) = match split_flags(std::env::args().skip(1).collect())
    {
        Ok(split) => split,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    if let Some(dir) = &flags.presets_dir {
        let names = Options::list_presets(dir);
        log::info!("{} presets in {}: {names:?}", names.len(), dir.display());
    }
    let (manifest, info, options) = match load_inputs(&args) {
        Ok(inputs) => inputs,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    if let Some(path) = &flags.save_preset {
        match options.save(path) {
            Ok(()) => log::info!("options saved to {}", path.display()),
            Err(e) => log::warn!("could not save {}: {e}", path.display()),
        }
    }

    let count = manifest.len();
    let mut controller = GalleryController::builder()
        .with_options(options)
        .with_viewport(1600.0, 900.0)
        .with_seed(42)
        .build();
    if let Err(e) = controller.load_manifest(manifest, info) {
        log::error!("{e}");
        std::process::exit(1);
    }

    let mut session = Session {
        controller,
        now: Instant::now(),
    };

    // Every model resolves to a unit cube; a real host reports mesh bounds.
    let bounds = MeshBounds::new(Vec3::splat(-0.5), Vec3::splat(0.5));
    for index in 0..count {
        for (slot, context) in
            [DisplayContext::Solo, DisplayContext::Grid].into_iter().enumerate()
        {
            let mesh = LoadedMesh {
                handle: NodeHandle((index * 2 + slot) as u64),
                bounds,
            };
            let _ = session
                .controller
                .asset_loaded(index, context, mesh, session.now);
        }
    }
    session.frames(40);
    session.summary("loaded");

    session.input(InputEvent::PointerMoved { x: 800.0, y: 450.0 });
    session.input(InputEvent::PointerClicked { x: 800.0, y: 450.0 });
    session.frames(30);
    session.summary("intro dismissed");
    session.frames(120);
    session.summary("grid settled");

    session.input(InputEvent::PointerMoved { x: 1200.0, y: 300.0 });
    session.frames(60);
    session.summary("grid follows pointer");

    session.input(InputEvent::PointerClicked { x: 800.0, y: 450.0 });
    session.frames(90);
    session.summary("solo");

    for _ in 0..3 {
        let _ = session.controller.handle_key("ArrowRight");
        session.frames(45);
        session.summary("next model");
    }

    session.input(InputEvent::Resized {
        width: 390.0,
        height: 844.0,
    });
    let _ = session.controller.handle_key("KeyG");
    session.frames(240);
    session.summary("portrait column");

    match serde_json::to_string_pretty(&session.controller.snapshot()) {
        Ok(json) => log::info!("final snapshot:\n{json}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
}
