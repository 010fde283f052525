use std::{fs, path::Path};

use anyhow::{Context, Result};
use scaleview_components::slider::ScaleSliderArgs;

/// Reads slider arguments from a TOML file. Missing keys keep their
/// defaults.
///
/// ```toml
/// segment_count = 11
/// progress_max = 20
/// touch_slop = 8.0
/// ```
pub fn load_args(path: &Path) -> Result<ScaleSliderArgs> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_args(&text).with_context(|| format!("failed to parse config {}", path.display()))
}

fn parse_args(text: &str) -> Result<ScaleSliderArgs> {
    Ok(toml::from_str(text)?)
}
