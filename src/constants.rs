//! Named values for the viewer: where settings live, startup defaults and
//! the limits content and media are checked against.

/// Configuration file location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "folio";

    /// Settings file name
    pub const FILENAME: &str = "config.toml";
}

/// Defaults applied when the settings file omits a field
pub mod defaults {
    /// Log level used when neither CLI, environment nor config name one
    pub const LOG_LEVEL: &str = "info";

    /// Directory that relative asset paths are resolved against
    pub const ASSET_ROOT: &str = "assets";

    /// Initial window size
    pub const WINDOW_WIDTH: u16 = 1280;
    pub const WINDOW_HEIGHT: u16 = 820;
}

/// Environment variables read at startup
pub mod env {
    /// Overrides the configured log level (trace, debug, info, warn, error)
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Content document constants
pub mod content {
    /// Rotations a certificate scan may declare, in degrees clockwise
    pub const ROTATION_STEP_DEGREES: u16 = 90;
}

/// Media decoding constants
pub mod media {
    /// File extensions decoded in-process into textures
    pub const DECODABLE_EXTENSIONS: &[&str] = &["png"];

    /// Bytes per pixel of the decoded RGBA buffer
    pub const RGBA_CHANNELS: usize = 4;

    /// Bytes per pixel of an RGB source image
    pub const RGB_CHANNELS: usize = 3;
}
