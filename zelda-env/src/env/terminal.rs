use anyhow::Result;
use image::{DynamicImage, RgbImage};

/// Displays frames in the terminal for `human` render mode.
pub(super) struct TerminalDisplay {
    config: viuer::Config,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self {
            config: viuer::Config {
                width: Some(80),
                ..Default::default()
            },
        }
    }

    pub fn show(&self, frame: &RgbImage) -> Result<()> {
        let img = DynamicImage::ImageRgb8(frame.clone());
        viuer::print(&img, &self.config)?;
        Ok(())
    }
}
