use crate::error::{InvokeError, InvokeResult};

/// Decode captured build output as strict ASCII.
///
/// The first byte outside `0x00..=0x7f` fails the whole decode; nothing is
/// replaced or truncated.
pub fn decode_ascii(bytes: Vec<u8>) -> InvokeResult<String> {
    if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
        return Err(InvokeError::Decode {
            offset,
            byte: bytes[offset],
        });
    }
    Ok(bytes.into_iter().map(char::from).collect())
}
