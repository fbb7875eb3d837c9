//! Minimal reader for base64 XDR `ScVal`s, enough to render event topics
//! and event data.
//!
//! Understood variants: `bool`, `void`, the integer types up to `i128`,
//! `bytes`, `string`, `symbol`, `address`, `vec` and `map`. Contract structs
//! arrive as maps keyed by symbols. Anything else yields `None` and the
//! caller falls back to the raw text.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::{Map, Value};

const SCV_BOOL: u32 = 0;
const SCV_VOID: u32 = 1;
const SCV_U32: u32 = 3;
const SCV_I32: u32 = 4;
const SCV_U64: u32 = 5;
const SCV_I64: u32 = 6;
const SCV_I128: u32 = 10;
const SCV_BYTES: u32 = 13;
const SCV_STRING: u32 = 14;
const SCV_SYMBOL: u32 = 15;
const SCV_VEC: u32 = 16;
const SCV_MAP: u32 = 17;
const SCV_ADDRESS: u32 = 18;

const SC_ADDRESS_ACCOUNT: u32 = 0;
const SC_ADDRESS_CONTRACT: u32 = 1;

const MAX_DEPTH: usize = 8;

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(len)?;
        let slice = self.bytes.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    fn u32(&mut self) -> Option<u32> {
        let raw: [u8; 4] = self.take(4)?.try_into().ok()?;
        Some(u32::from_be_bytes(raw))
    }

    fn u64(&mut self) -> Option<u64> {
        let raw: [u8; 8] = self.take(8)?.try_into().ok()?;
        Some(u64::from_be_bytes(raw))
    }

    /// Variable-length opaque data, padded to a multiple of four bytes.
    fn var_opaque(&mut self) -> Option<&'a [u8]> {
        let len = self.u32()? as usize;
        let data = self.take(len)?;
        self.take((4 - len % 4) % 4)?;
        Some(data)
    }

    fn text(&mut self) -> Option<String> {
        String::from_utf8(self.var_opaque()?.to_vec()).ok()
    }

    /// XDR optional: a present flag followed by the value.
    fn present(&mut self) -> Option<bool> {
        match self.u32()? {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        }
    }

    fn address(&mut self) -> Option<String> {
        match self.u32()? {
            SC_ADDRESS_ACCOUNT => {
                // PublicKey union arm; only ed25519 exists.
                self.u32()?;
                Some(format!("account:{}", hex::encode(self.take(32)?)))
            }
            SC_ADDRESS_CONTRACT => Some(format!("contract:{}", hex::encode(self.take(32)?))),
            _ => None,
        }
    }

    /// Read one `ScVal`. Numbers wider than 64 bits and addresses become
    /// strings.
    fn value(&mut self, depth: usize) -> Option<Value> {
        if depth > MAX_DEPTH {
            return None;
        }
        let value = match self.u32()? {
            SCV_BOOL => Value::Bool(self.present()?),
            SCV_VOID => Value::Null,
            SCV_U32 => Value::from(self.u32()?),
            SCV_I32 => Value::from(self.u32()? as i32),
            SCV_U64 => Value::from(self.u64()?),
            SCV_I64 => Value::from(self.u64()? as i64),
            SCV_I128 => {
                let hi = self.u64()? as i64;
                let lo = self.u64()?;
                Value::String((((hi as i128) << 64) | lo as i128).to_string())
            }
            SCV_BYTES => Value::String(hex::encode(self.var_opaque()?)),
            SCV_STRING | SCV_SYMBOL => Value::String(self.text()?),
            SCV_ADDRESS => Value::String(self.address()?),
            SCV_VEC => {
                let mut items = Vec::new();
                if self.present()? {
                    for _ in 0..self.u32()? {
                        items.push(self.value(depth + 1)?);
                    }
                }
                Value::Array(items)
            }
            SCV_MAP => {
                let mut entries = Map::new();
                if self.present()? {
                    for _ in 0..self.u32()? {
                        let key = match self.value(depth + 1)? {
                            Value::String(key) => key,
                            other => other.to_string(),
                        };
                        let value = self.value(depth + 1)?;
                        entries.insert(key, value);
                    }
                }
                Value::Object(entries)
            }
            _ => return None,
        };
        Some(value)
    }
}

/// Decode a base64 XDR `ScVal` into JSON.
pub fn decode_value(raw: &str) -> Option<Value> {
    let bytes = BASE64.decode(raw.trim()).ok()?;
    let mut reader = Reader {
        bytes: &bytes,
        pos: 0,
    };
    let value = reader.value(0)?;

    // Trailing bytes mean this was not a single ScVal.
    (reader.pos == bytes.len()).then_some(value)
}

/// Render a scalar base64 XDR `ScVal` as text.
///
/// Addresses are rendered as `account:<hex>` or `contract:<hex>` of their
/// 32-byte key.
pub fn decode(raw: &str) -> Option<String> {
    match decode_value(raw)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
