//! Short code generation.
//!
//! Codes are derived from the long URL with the 32-bit FNV-1 hash and
//! rendered in decimal. The same URL always yields the same code, which is
//! what makes repeated saves detectable as conflicts. Distinct URLs may
//! collide; the storage backends refuse the second URL of such a pair.

const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1 (multiply, then xor) over `bytes`.
fn fnv1_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV32_OFFSET_BASIS, |hash, &byte| {
        hash.wrapping_mul(FNV32_PRIME) ^ u32::from(byte)
    })
}

/// Derives the short code for a long URL.
///
/// # Examples
///
/// ```
/// use url_shortener::utils::code_generator::generate_short_code;
///
/// assert_eq!(generate_short_code("aaa"), "1184641920");
/// assert_eq!(generate_short_code("bbb"), "496612573");
/// ```
pub fn generate_short_code(long_url: &str) -> String {
    fnv1_32(long_url.as_bytes()).to_string()
}
