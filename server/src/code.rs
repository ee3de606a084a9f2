use md5::{Digest, Md5};

use crate::error::ShrinkError;

/// Longest accepted external code, in hex digits.
const MAX_CODE_DIGITS: usize = 4;

/// Derive the short code for `url`.
///
/// The code is the first two bytes of the MD5 digest of the URL's UTF-8
/// bytes, read little-endian. Distinct URLs can and will share a code; the
/// store resolves that by letting the latest shrink win.
pub fn derive_code(url: &str) -> u16 {
    let digest = Md5::digest(url.as_bytes());
    u16::from_le_bytes([digest[0], digest[1]])
}

/// Render a code the way clients see it: four lowercase, zero-padded hex
/// digits.
pub fn encode_code(code: u16) -> String {
    format!("{code:04x}")
}

/// Parse an external code back into its 16-bit value.
///
/// Accepts one to four hex digits in either case, most significant digit
/// first, so `decode_code(&encode_code(c)) == Ok(c)`.
pub fn decode_code(raw: &str) -> Result<u16, ShrinkError> {
    let invalid = || ShrinkError::InvalidCode(raw.to_owned());

    if raw.is_empty() || raw.len() > MAX_CODE_DIGITS {
        return Err(invalid());
    }
    // from_str_radix tolerates a leading '+', hex digits only here.
    if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    u16::from_str_radix(raw, 16).map_err(|_| invalid())
}
