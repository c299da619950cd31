//! UTF-16 → `String`.
//!
//! Lexicon exports are little-endian UTF-16, usually with a byte-order mark.
//! A big-endian mark switches the byte order for the whole file.

use crate::error::{Error, Result};

const BOM_LE: [u8; 2] = [0xFF, 0xFE];
const BOM_BE: [u8; 2] = [0xFE, 0xFF];

/// Decode `bytes` as UTF-16, little-endian unless a big-endian BOM says
/// otherwise. The BOM itself is not part of the output.
pub fn decode_utf16(bytes: &[u8]) -> Result<String> {
  if bytes.len() % 2 != 0 {
    return Err(Error::OddLength(bytes.len()));
  }

  let (body, big_endian, skipped) = match bytes {
    [a, b, rest @ ..] if [*a, *b] == BOM_LE => (rest, false, 2),
    [a, b, rest @ ..] if [*a, *b] == BOM_BE => (rest, true, 2),
    _ => (bytes, false, 0),
  };

  let units = body.chunks_exact(2).map(|pair| {
    let pair = [pair[0], pair[1]];
    if big_endian { u16::from_be_bytes(pair) } else { u16::from_le_bytes(pair) }
  });

  let mut out = String::with_capacity(body.len() / 2);
  let mut offset = skipped;
  for decoded in char::decode_utf16(units) {
    match decoded {
      Ok(c) => {
        out.push(c);
        offset += c.len_utf16() * 2;
      }
      Err(e) => {
        return Err(Error::UnpairedSurrogate { unit: e.unpaired_surrogate(), offset });
      }
    }
  }

  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn le(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_le_bytes).collect()
  }

  fn be(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_be_bytes).collect()
  }

  #[test]
  fn strips_little_endian_bom() {
    let mut bytes = BOM_LE.to_vec();
    bytes.extend(le("注音"));
    assert_eq!(decode_utf16(&bytes).unwrap(), "注音");
  }

  #[test]
  fn bom_is_optional() {
    assert_eq!(decode_utf16(&le("ㄅㄆㄇ")).unwrap(), "ㄅㄆㄇ");
  }

  #[test]
  fn big_endian_bom_overrides_byte_order() {
    let mut bytes = BOM_BE.to_vec();
    bytes.extend(be("測試  ㄘㄜˋ"));
    assert_eq!(decode_utf16(&bytes).unwrap(), "測試  ㄘㄜˋ");
  }

  #[test]
  fn surrogate_pairs_decode() {
    assert_eq!(decode_utf16(&le("𠀀字")).unwrap(), "𠀀字");
  }

  #[test]
  fn empty_input_is_empty_text() {
    assert_eq!(decode_utf16(&[]).unwrap(), "");
    assert_eq!(decode_utf16(&BOM_LE).unwrap(), "");
  }

  #[test]
  fn odd_length_is_fatal() {
    assert!(matches!(decode_utf16(&[0x41, 0x00, 0x42]), Err(Error::OddLength(3))));
  }

  #[test]
  fn unpaired_surrogate_is_fatal() {
    let mut bytes = BOM_LE.to_vec();
    bytes.extend(le("A"));
    bytes.extend(0xD800u16.to_le_bytes());
    bytes.extend(le("B"));
    let err = decode_utf16(&bytes).unwrap_err();
    assert!(matches!(err, Error::UnpairedSurrogate { unit: 0xD800, offset: 4 }));
  }
}
