use crate::character_sets::{hex_value, is_path_delimiter};
use crate::compat::{String, Vec};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, percent_encode, percent_encode_byte};

// Encode sets list what gets escaped; the comments list what stays literal.

/// Path percent-encode set
/// Leaves ALPHA, DIGIT, `- _ . ~ ! $ & ' ( ) * + , ; = : @` and the `/`
/// segment separator unescaped.
pub const PATH_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@')
    .remove(b'/');

/// Query value percent-encode set
/// Leaves ALPHA, DIGIT, `- _ . ~ ! $ ' ( ) * , = : @ /` unescaped. Space is
/// handled by the caller (written as `+`). `;` is escaped because it also
/// separates pairs when the query is parsed back.
pub const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b',')
    .remove(b'=')
    .remove(b':')
    .remove(b'@')
    .remove(b'/');

/// Query name percent-encode set
/// `QUERY_SET` + `=`, which would otherwise end the name on re-parse
pub const QUERY_NAME_SET: &AsciiSet = &QUERY_SET.add(b'=');

/// Decode a path and re-encode it with `PATH_SET`.
///
/// Every valid `%XX` triplet is decoded to its byte and re-encoded, so safe
/// characters come out literal and the rest come out with uppercase hex.
/// Triplets for `/`, `?` and `#` are kept escaped (uppercased) so segment
/// boundaries never move. A `%` not followed by two hex digits is a literal
/// percent sign.
pub fn normalize_path_encoding(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut result = String::with_capacity(path.len());
    let mut pending: Vec<u8> = Vec::with_capacity(path.len());

    let mut i = 0;
    while i < bytes.len() {
        let decoded = match bytes[i] {
            b'%' => bytes
                .get(i + 1)
                .and_then(|&hi| hex_value(hi))
                .zip(bytes.get(i + 2).and_then(|&lo| hex_value(lo)))
                .map(|(hi, lo)| (hi << 4) | lo),
            _ => None,
        };

        match decoded {
            Some(byte) if is_path_delimiter(byte) => {
                result.extend(percent_encode(&pending, PATH_SET));
                pending.clear();
                result.push_str(percent_encode_byte(byte));
                i += 3;
            }
            Some(byte) => {
                pending.push(byte);
                i += 3;
            }
            None => {
                pending.push(bytes[i]);
                i += 1;
            }
        }
    }

    result.extend(percent_encode(&pending, PATH_SET));
    result
}

/// Decode a form-encoded query component to raw bytes.
/// `+` is a space; invalid UTF-8 survives untouched.
pub fn decode_form_component(input: &str) -> Vec<u8> {
    let spaced: Vec<u8> = input
        .bytes()
        .map(|b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&spaced).collect()
}

/// Append a form-encoded query component, writing spaces as `+`.
pub fn encode_form_component_into(buffer: &mut String, input: &[u8], encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for (i, piece) in input.split(|&b| b == b' ').enumerate() {
        if i > 0 {
            buffer.push('+');
        }
        buffer.extend(percent_encode(piece, encode_set));
    }
}
