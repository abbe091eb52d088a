//! Formatting helpers for raw pattern bytes.

/// Render a byte string as a double-quoted, ASCII-escaped literal.
///
/// Printable ASCII passes through; everything else uses `\xNN`, `\n`, `\t`
/// and friends, so arbitrary (non-UTF-8) patterns stay on one line.
///
/// # Examples
/// ```
/// use dictscan_core::utils::escape_bytes;
/// assert_eq!(escape_bytes(b"she"), r#""she""#);
/// assert_eq!(escape_bytes(b"a\"b"), r#""a\"b""#);
/// assert_eq!(escape_bytes(&[0xff, b'\n']), r#""\xff\n""#);
/// ```
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &b in bytes {
        out.extend(std::ascii::escape_default(b).map(char::from));
    }
    out.push('"');
    out
}

/// Render a single byte as a single-quoted, ASCII-escaped literal.
///
/// # Examples
/// ```
/// use dictscan_core::utils::escape_byte;
/// assert_eq!(escape_byte(b'u'), "'u'");
/// assert_eq!(escape_byte(b'\''), r"'\''");
/// ```
pub fn escape_byte(b: u8) -> String {
    let mut out = String::with_capacity(6);
    out.push('\'');
    out.extend(std::ascii::escape_default(b).map(char::from));
    out.push('\'');
    out
}

/// Number of decimal digits needed to print every index in `0..count`.
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        ((count - 1) as f64).log10().floor() as usize + 1
    }
}
