/// Hostname byte classes for the ASCII fast path
pub const HOST_INVALID: u8 = 0;
pub const HOST_PASSTHROUGH: u8 = 1;
pub const HOST_UPPERCASE: u8 = 2;

/// Hostname character classification for the ASCII fast path.
/// Registered names keep letters, digits, `-`, `_` and `.`; everything else
/// in ASCII is rejected.
const HOSTNAME_CHAR_TABLE: [u8; 128] = {
    let mut table = [HOST_INVALID; 128];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = HOST_PASSTHROUGH;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = HOST_PASSTHROUGH;
        i += 1;
    }
    table[b'.' as usize] = HOST_PASSTHROUGH;
    table[b'-' as usize] = HOST_PASSTHROUGH;
    table[b'_' as usize] = HOST_PASSTHROUGH;

    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = HOST_UPPERCASE;
        i += 1;
    }

    table
};

/// Classify a byte of an ASCII hostname
pub fn classify_hostname_byte(b: u8) -> u8 {
    HOSTNAME_CHAR_TABLE
        .get(b as usize)
        .copied()
        .unwrap_or(HOST_INVALID)
}

/// Check if a byte is an ASCII hex digit and return its value
pub fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Bytes that keep their percent-encoded form inside a path, since decoding
/// them would change how the path splits into segments.
pub fn is_path_delimiter(b: u8) -> bool {
    matches!(b, b'/' | b'?' | b'#')
}
