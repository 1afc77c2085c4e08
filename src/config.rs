//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TUMBLE_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use tumble_math::Vec3;
use tumble_physics::PhysicsParams;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Physics configuration (dice demo)
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Pointer interaction configuration (dice demo)
    #[serde(default)]
    pub interaction: InteractionConfig,
    /// Dice scene configuration
    #[serde(default)]
    pub dice: DiceConfig,
    /// Tesseract scene configuration
    #[serde(default)]
    pub tesseract: TesseractConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl AppConfig {
    /// Load configuration from the default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TUMBLE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // TUMBLE_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("TUMBLE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tumble".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Eye position [x, y, z]
    pub position: [f32; 3],
    /// Look-at target [x, y, z]
    pub target: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 3.0, 5.0],
            target: [0.0, 0.0, 0.0],
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Physics configuration for the die
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Per-frame gravity acceleration [x, y, z]
    pub gravity: [f32; 3],
    /// Fraction of vertical speed kept (sign-flipped) on a bounce
    pub restitution: f32,
    /// Per-frame angular velocity multiplier
    pub angular_damping: f32,
    /// Per-frame linear velocity multiplier
    pub linear_damping: f32,
    /// Extra angular damping on floor contact
    pub bounce_angular_damping: f32,
    /// Floor height
    pub floor_y: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -0.02, 0.0],
            restitution: 0.3,
            angular_damping: 0.98,
            linear_damping: 0.99,
            bounce_angular_damping: 0.8,
            floor_y: 0.0,
        }
    }
}

impl PhysicsConfig {
    /// Convert to the physics engine's parameter struct
    pub fn to_params(&self) -> PhysicsParams {
        PhysicsParams {
            gravity: Vec3::from_array(self.gravity),
            restitution: self.restitution,
            angular_damping: self.angular_damping,
            linear_damping: self.linear_damping,
            bounce_angular_damping: self.bounce_angular_damping,
            floor_y: self.floor_y,
        }
    }
}

/// Pointer interaction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Half-width of the uniform throw impulse range
    pub throw_impulse: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            throw_impulse: 0.025,
        }
    }
}

/// Dice scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiceConfig {
    /// Edge length of the die
    pub size: f32,
    /// Starting height of the die's center
    pub start_height: f32,
    /// Side length of the floor
    pub floor_size: f32,
    /// Checkerboard cell size
    pub floor_cell_size: f32,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            size: 1.0,
            start_height: 2.0,
            floor_size: 10.0,
            floor_cell_size: 2.0,
        }
    }
}

/// Tesseract scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TesseractConfig {
    /// Full side length of the tesseract
    pub size: f32,
    /// Rotation per frame in the (x,w) plane, radians
    pub rotation_rate: f32,
    /// Viewpoint distance for the 4D -> 3D projection
    pub projection_distance: f32,
    /// Ground grid half-extent
    pub grid_extent: f32,
    /// Ground grid spacing
    pub grid_step: f32,
    /// Ground grid height
    pub grid_y: f32,
}

impl Default for TesseractConfig {
    fn default() -> Self {
        Self {
            size: 2.0,
            rotation_rate: 0.01,
            projection_distance: 3.0,
            grid_extent: 8.0,
            grid_step: 1.0,
            grid_y: -2.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Light direction [x, y, z]
    pub light_dir: [f32; 3],
    /// Ambient light strength
    pub ambient_strength: f32,
    /// Diffuse light strength
    pub diffuse_strength: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.02, 0.02, 0.08, 1.0],
            light_dir: [5.0, 5.0, 5.0],
            ambient_strength: 0.5,
            diffuse_strength: 0.8,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
