//! C header emission.

use crate::error::{Error, Result};

pub const DEFAULT_ARRAY_NAME: &str = "MIYO_SPLASH";
pub const GUARD: &str = "HEADER_H_";

/// Render `bytes` as an include-guarded `static uint8_t constexpr` array.
///
/// Values are printed as unpadded lowercase hex, each followed by `, `.
pub fn render_header(name: &str, bytes: &[u8]) -> String {
    let body: String = bytes.iter().map(|b| format!("0x{b:x}, ")).collect();
    format!(
        "#ifndef {GUARD}\n#define {GUARD}\n\n\
         static uint8_t constexpr {name}[{count}] = \n{{\n  {body}\n}};\n\n#endif\n",
        count = bytes.len()
    )
}

pub fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let head_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    if head_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(Error::InvalidName {
            name: name.to_string(),
        })
    }
}
