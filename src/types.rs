//! Core value types shared across the crate.

/// 32-byte digest of a file or of an internal tree node.
pub type Digest = [u8; 32];

/// Root hash reported when no tree exists (empty directory or nothing built yet).
pub const EMPTY_ROOT: Digest = [0u8; 32];

/// Lowercase hexadecimal encoding of a digest (64 characters).
pub fn digest_to_hex(digest: &Digest) -> String {
    hex::encode(digest)
}

/// Parse a 64-character hexadecimal string into a digest.
pub fn digest_from_hex(s: &str) -> Result<Digest, hex::FromHexError> {
    let mut digest = [0u8; 32];
    hex::decode_to_slice(s.trim(), &mut digest)?;
    Ok(digest)
}
