// src/core/decode.rs
//! Windows-1251 handling.
//!
//! The report bytes are widened 1:1 into chars before parsing, so the HTML parser sees valid
//! text and every byte survives. ASCII stays ASCII; a byte `0x80..=0xFF` is parked in the
//! private-use block at `U+F780..=U+F7FF`. Text fragments pulled out of the tree are
//! narrowed back to bytes and run through the real code page here.
//!
//! Parking high bytes outside Latin-1 keeps them apart from characters the parser produced
//! itself: `&eacute;`, `&#233;` or `&nbsp;` arrive as `U+00E9`/`U+00A0` and pass through
//! untouched instead of being re-read as Windows-1251. The one collision left is a numeric
//! reference into `U+F780..=U+F7FF`, which is read as the byte it stands for.
//!
//! `encoding_rs`'s Windows-1251 table maps all 256 bytes, so decoding cannot fail:
//! `0x98`, the one hole in the classic code page, comes out as `U+0098`.

use encoding_rs::WINDOWS_1251;

const PARKED_BASE: u32 = 0xF700;

/// Widen raw report bytes into a `String` the HTML parser can take. Lossless.
pub fn widen_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| park(b)).collect()
}

fn park(b: u8) -> char {
    if b.is_ascii() {
        char::from(b)
    } else {
        char::from_u32(PARKED_BASE + u32::from(b)).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

fn unpark(ch: char) -> Option<u8> {
    match u32::from(ch) {
        c @ 0x00..=0x7F => u8::try_from(c).ok(),
        c @ 0xF780..=0xF7FF => u8::try_from(c - PARKED_BASE).ok(),
        _ => None,
    }
}

/// Decode a widened fragment from Windows-1251.
///
/// Parked bytes and ASCII are collected into runs and decoded; every other char came from
/// a character reference, is already Unicode and passes through.
pub fn decode_legacy(raw: &str) -> String {
    if raw.is_ascii() {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut pending: Vec<u8> = Vec::new();

    for ch in raw.chars() {
        match unpark(ch) {
            Some(b) => pending.push(b),
            None => {
                flush(&mut pending, &mut out);
                out.push(ch);
            }
        }
    }
    flush(&mut pending, &mut out);
    out
}

fn flush(pending: &mut Vec<u8>, out: &mut String) {
    if pending.is_empty() {
        return;
    }
    let (text, _) = WINDOWS_1251.decode_without_bom_handling(&pending[..]);
    out.push_str(&text);
    drop(text);
    pending.clear();
}
