//! Static scene layout for the village.
//!
//! This module describes the scene the host engine builds: ground and path
//! planes, six stone houses, the light rig, and the fog. Collision volumes
//! are derived from the house walls once at construction time.

use fogvale_common::Aabb;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::collision::ObstacleSet;

/// Sky and fog color (dark red).
pub const FOG_COLOR: u32 = 0x0074_0c0c;

/// Exponential fog density.
pub const FOG_DENSITY: f32 = 0.06;

/// Side length of the square ground plane.
pub const GROUND_SIZE: f32 = 1000.0;

/// Texture repeat count for the ground, both axes.
pub const GROUND_TEXTURE_REPEAT: (f32, f32) = (600.0, 600.0);

/// Width of the path plane running through the village.
pub const PATH_WIDTH: f32 = 6.0;

/// Length of the path plane.
pub const PATH_LENGTH: f32 = 1000.0;

/// Texture repeat count for the path (across, along).
pub const PATH_TEXTURE_REPEAT: (f32, f32) = (5.0, 600.0);

/// Height the path floats above the ground to avoid z-fighting.
pub const PATH_LIFT: f32 = 0.01;

/// House wall dimensions: width, height, depth.
pub const HOUSE_SIZE: Vec3 = Vec3::new(3.0, 8.0, 9.0);

/// Texture repeat for the stone walls, both axes.
pub const STONE_TEXTURE_REPEAT: (f32, f32) = (4.0, 4.0);

/// Where the player stands when the session begins.
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 2.0, 5.0);

/// Ground-plane (x, z) positions of the six houses.
pub const HOUSE_POSITIONS: [(f32, f32); 6] = [
    (-10.0, -10.0),
    (-10.0, 0.0),
    (-10.0, 10.0),
    (10.0, -10.0),
    (10.0, 0.0),
    (10.0, 10.0),
];

/// Ambient light description.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AmbientLight {
    /// Light color as packed RGB.
    pub color: u32,
    /// Light intensity.
    pub intensity: f32,
}

/// Directional light with shadow parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// Light color as packed RGB.
    pub color: u32,
    /// Light intensity.
    pub intensity: f32,
    /// World position the light shines from.
    pub position: Vec3,
    /// Shadow map resolution (square).
    pub shadow_map_size: u32,
    /// Near plane of the shadow camera.
    pub shadow_near: f32,
    /// Far plane of the shadow camera.
    pub shadow_far: f32,
    /// Half-extent of the orthographic shadow frustum.
    pub shadow_extent: f32,
}

/// One house in the village.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct House {
    /// Center of the walls in world space.
    pub center: Vec3,
    /// Full extents of the wall box.
    pub size: Vec3,
}

impl House {
    /// Creates a house standing on the ground at the given (x, z).
    #[must_use]
    pub fn at(x: f32, z: f32) -> Self {
        Self {
            center: Vec3::new(x, HOUSE_SIZE.y / 2.0, z),
            size: HOUSE_SIZE,
        }
    }

    /// The collision volume for this house's walls.
    #[must_use]
    pub fn collider(&self) -> Aabb {
        Aabb::from_center_size(self.center, self.size)
    }
}

/// The forbidden strip occupied by the path, used by the flower sampler.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathCorridor {
    /// Half-width of the corridor on the x axis.
    pub half_width: f32,
    /// Half-length of the corridor on the z axis.
    pub half_length: f32,
}

impl Default for PathCorridor {
    fn default() -> Self {
        Self {
            half_width: 4.0,
            half_length: 500.0,
        }
    }
}

impl PathCorridor {
    /// Whether a ground point falls inside the corridor.
    #[must_use]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x > -self.half_width && x < self.half_width && z > -self.half_length && z < self.half_length
    }
}

/// Complete static description of the village scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneLayout {
    /// The six houses.
    pub houses: Vec<House>,
    /// Ambient light.
    pub ambient_light: AmbientLight,
    /// Directional light (the sun/moon).
    pub directional_light: DirectionalLight,
    /// Path corridor for sampling exclusion.
    pub path: PathCorridor,
}

impl SceneLayout {
    /// Builds the village layout with its fixed house positions and lights.
    #[must_use]
    pub fn village() -> Self {
        Self {
            houses: HOUSE_POSITIONS
                .iter()
                .map(|&(x, z)| House::at(x, z))
                .collect(),
            ambient_light: AmbientLight {
                color: 0x00ff_ffff,
                intensity: 0.3,
            },
            directional_light: DirectionalLight {
                color: 0x00ff_aa88,
                intensity: 1.0,
                position: Vec3::new(10.0, 20.0, 10.0),
                shadow_map_size: 1024,
                shadow_near: 1.0,
                shadow_far: 50.0,
                shadow_extent: 20.0,
            },
            path: PathCorridor::default(),
        }
    }

    /// Derives the immutable obstacle set from the house walls.
    #[must_use]
    pub fn obstacle_set(&self) -> ObstacleSet {
        ObstacleSet::from_volumes(self.houses.iter().map(House::collider).collect())
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::village()
    }
}
