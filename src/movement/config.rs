//! Loader for the RON movement tuning file at startup.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::movement::curves::MoveEasing;
use crate::movement::resources::{MovementTuning, PhaseTiming};

const TUNING_PATH: &str = "assets/data/movement.ron";

/// Error type for tuning-file load failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// On-disk shape of `assets/data/movement.ron`.
#[derive(Debug, Deserialize)]
pub struct MovementDefaults {
    pub movement_ratio: f32,
    pub base_step: f32,
    pub starting: PhaseDef,
    pub moving: PhaseDef,
    pub ending: PhaseDef,
}

#[derive(Debug, Deserialize)]
pub struct PhaseDef {
    pub duration: f32,
    pub easing: MoveEasing,
}

impl From<&PhaseDef> for PhaseTiming {
    fn from(def: &PhaseDef) -> Self {
        PhaseTiming {
            duration: def.duration,
            easing: def.easing,
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate tuning values. Non-positive steps or durations
/// would stall or NaN the animation loop, so they are rejected here.
pub fn parse_movement_defaults(contents: &str) -> Result<MovementDefaults, String> {
    let defaults: MovementDefaults = ron_options()
        .from_str(contents)
        .map_err(|e| format!("Parse error: {}", e))?;

    if defaults.base_step <= 0.0 {
        return Err("base_step must be positive".to_string());
    }
    if defaults.movement_ratio <= 0.0 {
        return Err("movement_ratio must be positive".to_string());
    }
    for (name, phase) in [
        ("starting", &defaults.starting),
        ("moving", &defaults.moving),
        ("ending", &defaults.ending),
    ] {
        if phase.duration <= 0.0 {
            return Err(format!("{} duration must be positive", name));
        }
    }

    Ok(defaults)
}

pub fn load_movement_defaults(path: &Path) -> Result<MovementDefaults, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_movement_defaults(&contents).map_err(|message| ConfigLoadError {
        file: file_name,
        message,
    })
}

/// Startup system: replace the built-in tuning when the RON file is
/// present and valid; keep defaults otherwise so the demo runs without
/// assets on disk.
pub(crate) fn setup_movement_tuning(mut tuning: ResMut<MovementTuning>) {
    match load_movement_defaults(Path::new(TUNING_PATH)) {
        Ok(defaults) => {
            *tuning = MovementTuning {
                movement_ratio: defaults.movement_ratio,
                base_step: defaults.base_step,
                starting: PhaseTiming::from(&defaults.starting),
                moving: PhaseTiming::from(&defaults.moving),
                ending: PhaseTiming::from(&defaults.ending),
            };
            info!("Loaded movement tuning from {}", TUNING_PATH);
        }
        Err(e) => {
            warn!("{}; using built-in movement tuning", e);
        }
    }
}
