use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("display must be at least 1x1, got {width}x{height}")]
    EmptyDisplay { width: u16, height: u16 },
    #[error("pixel stride must be non-zero")]
    ZeroStride,
    #[error("march step budget must be non-zero")]
    ZeroStepBudget,
    #[error("hit threshold must be positive, got {0}")]
    NonPositiveEpsilon(f32),
    #[error("draw distance must be positive, got {0}")]
    NonPositiveDrawDistance(f32),
    #[error("camera z = {0} lies on the display plane")]
    CameraOnDisplayPlane(f32),
    #[error("colour thresholds out of order: near {near} >= far {far}")]
    ThresholdOrder { near: f32, far: f32 },
    #[error("{shape} radius must be positive, got {radius}")]
    NonPositiveRadius { shape: &'static str, radius: f32 },
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("failed to open window: {0}")]
    Open(#[source] minifb::Error),
    #[error("failed to push frame to window: {0}")]
    Update(#[source] minifb::Error),
}
