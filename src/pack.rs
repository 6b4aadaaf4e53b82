//! Nibble packing of grayscale samples.
//!
//! Samples are reduced to their high four bits and stored two per byte,
//! first sample in the high nibble.

use log::{debug, info};

use crate::error::{Error, Result};
use crate::source::GrayFrame;

/// What to do with the last sample when the sample count is odd.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OddPolicy {
    /// Pair the last sample with a zero nibble.
    #[default]
    Pad,
    /// Fail with [`Error::OddSampleCount`].
    Reject,
}

/// Packed output of one frame plus the numbers reported on the console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: usize,
    pub padded: bool,
    pub bytes: Vec<u8>,
}

pub fn quantize(samples: &[u8]) -> Vec<u8> {
    samples.iter().map(|&s| s >> 4).collect()
}

/// Pack quantized samples two per byte.
///
/// Inputs above 15 are masked to their low nibble.
pub fn pack(quantized: &[u8], policy: OddPolicy) -> Result<Vec<u8>> {
    if quantized.len() % 2 != 0 && policy == OddPolicy::Reject {
        return Err(Error::OddSampleCount {
            len: quantized.len(),
        });
    }

    let mut out = Vec::with_capacity(quantized.len().div_ceil(2));
    let mut pairs = quantized.chunks_exact(2);
    for pair in &mut pairs {
        out.push(((pair[0] & 0x0f) << 4) | (pair[1] & 0x0f));
    }
    if let [last] = pairs.remainder() {
        out.push((last & 0x0f) << 4);
    }
    Ok(out)
}

/// Split each byte back into its two samples, high nibble first.
pub fn unpack(packed: &[u8]) -> Vec<u8> {
    packed.iter().flat_map(|&b| [b >> 4, b & 0x0f]).collect()
}

pub fn pack_frame(frame: &GrayFrame, policy: OddPolicy) -> Result<PackedImage> {
    let pixels = frame.data.len();
    debug!("quantizing {} samples to 4 bits", pixels);
    let quantized = quantize(&frame.data);

    let padded = pixels % 2 != 0;
    if padded && policy == OddPolicy::Pad {
        info!("odd sample count {}, padding last byte with 0", pixels);
    }
    let bytes = pack(&quantized, policy)?;
    debug!("packed into {} bytes", bytes.len());

    Ok(PackedImage {
        width: frame.width,
        height: frame.height,
        pixels,
        padded,
        bytes,
    })
}
