//! Observation for [`ZeldaEnv`](crate::ZeldaEnv).
use image::RgbImage;
use zelda_core::Obs;

/// A downsampled RGB frame of the game screen, in `(height, width, channel)` order.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeldaObs {
    frame: Vec<u8>,
    height: usize,
    width: usize,
}

impl ZeldaObs {
    /// Raw pixels.
    pub fn as_slice(&self) -> &[u8] {
        &self.frame
    }

    /// Consumes the observation and returns raw pixels.
    pub fn into_vec(self) -> Vec<u8> {
        self.frame
    }
}

impl From<RgbImage> for ZeldaObs {
    fn from(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            frame: img.into_raw(),
            height: height as _,
            width: width as _,
        }
    }
}

impl Obs for ZeldaObs {
    fn shape(&self) -> Vec<usize> {
        vec![self.height, self.width, 3]
    }
}
