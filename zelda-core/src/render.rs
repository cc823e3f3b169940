//! Render modes and rendered frames.
use crate::error::ZeldaError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How an environment renders its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// [`Env::render`](crate::Env::render) returns the current frame as an [`RgbFrame`].
    #[serde(rename = "rgb_array")]
    RgbArray,

    /// The environment displays frames by itself at every step.
    #[serde(rename = "human")]
    Human,
}

impl RenderMode {
    /// Returns the name used by Gymnasium.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RgbArray => "rgb_array",
            Self::Human => "human",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = ZeldaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb_array" => Ok(Self::RgbArray),
            "human" => Ok(Self::Human),
            _ => Err(ZeldaError::InvalidRenderMode(s.to_string())),
        }
    }
}

/// An RGB image in row-major order, 3 bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbFrame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbFrame {
    /// Constructs a frame. Returns `None` if `data.len() != width * height * 3`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        if data.len() != width * height * 3 {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Shape of the frame as an array, `[height, width, 3]`.
    pub fn shape(&self) -> [usize; 3] {
        [self.height, self.width, 3]
    }

    /// Raw pixels.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the `[r, g, b]` value at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Consumes the frame and returns raw pixels.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn render_mode_names() {
        assert_eq!("rgb_array".parse::<RenderMode>().unwrap(), RenderMode::RgbArray);
        assert_eq!("human".parse::<RenderMode>().unwrap(), RenderMode::Human);
        assert_eq!(RenderMode::RgbArray.to_string(), "rgb_array");
        assert!(matches!(
            "ansi".parse::<RenderMode>(),
            Err(ZeldaError::InvalidRenderMode(_))
        ));

        let mode: RenderMode = serde_yaml::from_str("human").unwrap();
        assert_eq!(mode, RenderMode::Human);
    }

    #[test]
    fn frame_shape_and_pixels() {
        assert!(RgbFrame::new(2, 2, vec![0; 11]).is_none());

        let mut data = vec![0u8; 2 * 3 * 3];
        data[(1 * 2 + 1) * 3] = 255;
        let frame = RgbFrame::new(2, 3, data).unwrap();
        assert_eq!(frame.shape(), [3, 2, 3]);
        assert_eq!(frame.pixel(1, 1), Some([255, 0, 0]));
        assert_eq!(frame.pixel(2, 0), None);
    }
}
