//! Convert a grayscale image into a 4-bit-per-pixel C array for display
//! firmware.
//!
//! The pipeline is decode ([`source`]), quantize and pack ([`pack`]), then
//! render ([`header`]).

pub mod error;
pub mod header;
pub mod pack;
pub mod source;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

pub use error::{Error, Result};
pub use header::{render_header, validate_identifier, DEFAULT_ARRAY_NAME};
pub use pack::{pack, pack_frame, quantize, unpack, OddPolicy, PackedImage};
pub use source::{load_grayscale, GrayFrame};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub name: String,
    pub odd_policy: OddPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            name: DEFAULT_ARRAY_NAME.to_string(),
            odd_policy: OddPolicy::default(),
        }
    }
}

/// Decode and pack `src`. Nothing is written.
pub fn load_and_pack(src: &Path, opts: &Options) -> Result<PackedImage> {
    validate_identifier(&opts.name)?;
    let frame = load_grayscale(src)?;
    pack_frame(&frame, opts.odd_policy)
}

/// Render `packed` and write it to `target`, truncating any existing file.
pub fn write_header(target: &Path, name: &str, packed: &PackedImage) -> Result<()> {
    let write_err = |source| Error::Write {
        path: target.to_path_buf(),
        source,
    };
    let text = render_header(name, &packed.bytes);
    let mut out = BufWriter::new(File::create(target).map_err(write_err)?);
    out.write_all(text.as_bytes()).map_err(write_err)?;
    out.flush().map_err(write_err)?;
    debug!("wrote {} bytes of header to {}", text.len(), target.display());
    Ok(())
}
