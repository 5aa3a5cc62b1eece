//! Scene domain: static scenery and the aircraft entity.

mod aircraft;
mod spawn;

pub use aircraft::Aircraft;
pub use spawn::SceneCamera;

use bevy::prelude::*;

use crate::scene::aircraft::place_aircraft;
use crate::scene::spawn::spawn_scene;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene)
            .add_systems(Update, place_aircraft);
    }
}
