use bytes::{Buf, BufMut, BytesMut};
use thiserror::Error;

/// NBT tag type IDs.
pub const TAG_END: u8 = 0;
pub const TAG_BYTE: u8 = 1;
pub const TAG_SHORT: u8 = 2;
pub const TAG_INT: u8 = 3;
pub const TAG_LONG: u8 = 4;
pub const TAG_FLOAT: u8 = 5;
pub const TAG_DOUBLE: u8 = 6;
pub const TAG_BYTE_ARRAY: u8 = 7;
pub const TAG_STRING: u8 = 8;
pub const TAG_LIST: u8 = 9;
pub const TAG_COMPOUND: u8 = 10;
pub const TAG_INT_ARRAY: u8 = 11;
pub const TAG_LONG_ARRAY: u8 = 12;

/// Nesting limit for lists and compounds, same as the vanilla network reader.
const MAX_DEPTH: usize = 512;

#[derive(Debug, Error)]
pub enum NbtError {
    #[error("Not enough data")]
    NotEnoughData,
    #[error("Unknown tag type {0}")]
    UnknownTagType(u8),
    #[error("Invalid string data")]
    InvalidString,
    #[error("Negative length {0}")]
    NegativeLength(i32),
    #[error("NBT nested too deeply")]
    TooDeep,
    #[error("Expected a root tag, found TAG_END")]
    MissingRoot,
}

pub type NbtResult<T> = Result<T, NbtError>;

/// An NBT value.
#[derive(Debug, Clone, PartialEq)]
pub enum NbtValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(Vec<NbtValue>),
    Compound(Vec<(String, NbtValue)>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl NbtValue {
    pub fn tag_id(&self) -> u8 {
        match self {
            NbtValue::Byte(_) => TAG_BYTE,
            NbtValue::Short(_) => TAG_SHORT,
            NbtValue::Int(_) => TAG_INT,
            NbtValue::Long(_) => TAG_LONG,
            NbtValue::Float(_) => TAG_FLOAT,
            NbtValue::Double(_) => TAG_DOUBLE,
            NbtValue::ByteArray(_) => TAG_BYTE_ARRAY,
            NbtValue::String(_) => TAG_STRING,
            NbtValue::List(_) => TAG_LIST,
            NbtValue::Compound(_) => TAG_COMPOUND,
            NbtValue::IntArray(_) => TAG_INT_ARRAY,
            NbtValue::LongArray(_) => TAG_LONG_ARRAY,
        }
    }

    /// Write this value as a root tag (with no name) for the network protocol.
    pub fn write_root_network(&self, buf: &mut BytesMut) {
        // Network NBT in 1.20.2+: root tag type byte, but NO name
        buf.put_u8(self.tag_id());
        self.write_payload(buf);
    }

    /// Write an optional root tag; absence is encoded as a lone TAG_END.
    pub fn write_optional_network(value: Option<&NbtValue>, buf: &mut BytesMut) {
        match value {
            Some(value) => value.write_root_network(buf),
            None => buf.put_u8(TAG_END),
        }
    }

    /// Read a nameless network root tag. A TAG_END type byte means "no tag".
    pub fn read_optional_network(buf: &mut BytesMut) -> NbtResult<Option<NbtValue>> {
        let tag_type = read_u8(buf)?;
        if tag_type == TAG_END {
            return Ok(None);
        }
        Self::read_payload(tag_type, buf, 0).map(Some)
    }

    /// Read a nameless network root tag that must be present.
    pub fn read_root_network(buf: &mut BytesMut) -> NbtResult<NbtValue> {
        Self::read_optional_network(buf)?.ok_or(NbtError::MissingRoot)
    }

    /// Write just the payload (no tag type or name).
    pub fn write_payload(&self, buf: &mut BytesMut) {
        match self {
            NbtValue::Byte(v) => buf.put_i8(*v),
            NbtValue::Short(v) => buf.put_i16(*v),
            NbtValue::Int(v) => buf.put_i32(*v),
            NbtValue::Long(v) => buf.put_i64(*v),
            NbtValue::Float(v) => buf.put_f32(*v),
            NbtValue::Double(v) => buf.put_f64(*v),
            NbtValue::ByteArray(v) => {
                buf.put_i32(v.len() as i32);
                for b in v {
                    buf.put_i8(*b);
                }
            }
            NbtValue::String(v) => {
                write_nbt_string(v, buf);
            }
            NbtValue::List(v) => {
                if v.is_empty() {
                    buf.put_u8(TAG_END);
                    buf.put_i32(0);
                } else {
                    buf.put_u8(v[0].tag_id());
                    buf.put_i32(v.len() as i32);
                    for item in v {
                        item.write_payload(buf);
                    }
                }
            }
            NbtValue::Compound(entries) => {
                for (name, value) in entries {
                    buf.put_u8(value.tag_id());
                    write_nbt_string(name, buf);
                    value.write_payload(buf);
                }
                buf.put_u8(TAG_END);
            }
            NbtValue::IntArray(v) => {
                buf.put_i32(v.len() as i32);
                for i in v {
                    buf.put_i32(*i);
                }
            }
            NbtValue::LongArray(v) => {
                buf.put_i32(v.len() as i32);
                for l in v {
                    buf.put_i64(*l);
                }
            }
        }
    }

    fn read_payload(tag_type: u8, buf: &mut BytesMut, depth: usize) -> NbtResult<NbtValue> {
        if depth > MAX_DEPTH {
            return Err(NbtError::TooDeep);
        }
        let value = match tag_type {
            TAG_BYTE => NbtValue::Byte(read_u8(buf)? as i8),
            TAG_SHORT => {
                ensure(buf, 2)?;
                NbtValue::Short(buf.get_i16())
            }
            TAG_INT => NbtValue::Int(read_i32(buf)?),
            TAG_LONG => {
                ensure(buf, 8)?;
                NbtValue::Long(buf.get_i64())
            }
            TAG_FLOAT => {
                ensure(buf, 4)?;
                NbtValue::Float(buf.get_f32())
            }
            TAG_DOUBLE => {
                ensure(buf, 8)?;
                NbtValue::Double(buf.get_f64())
            }
            TAG_BYTE_ARRAY => {
                let len = read_len(buf, 1)?;
                NbtValue::ByteArray(buf.split_to(len).iter().map(|b| *b as i8).collect())
            }
            TAG_STRING => NbtValue::String(read_nbt_string(buf)?),
            TAG_LIST => {
                let element_type = read_u8(buf)?;
                let len = read_i32(buf)?;
                if len < 0 {
                    return Err(NbtError::NegativeLength(len));
                }
                let mut items = Vec::with_capacity((len as usize).min(buf.remaining()));
                for _ in 0..len {
                    items.push(Self::read_payload(element_type, buf, depth + 1)?);
                }
                NbtValue::List(items)
            }
            TAG_COMPOUND => {
                let mut entries = Vec::new();
                loop {
                    let entry_type = read_u8(buf)?;
                    if entry_type == TAG_END {
                        break;
                    }
                    let name = read_nbt_string(buf)?;
                    let value = Self::read_payload(entry_type, buf, depth + 1)?;
                    entries.push((name, value));
                }
                NbtValue::Compound(entries)
            }
            TAG_INT_ARRAY => {
                let len = read_len(buf, 4)?;
                NbtValue::IntArray((0..len).map(|_| buf.get_i32()).collect())
            }
            TAG_LONG_ARRAY => {
                let len = read_len(buf, 8)?;
                NbtValue::LongArray((0..len).map(|_| buf.get_i64()).collect())
            }
            other => return Err(NbtError::UnknownTagType(other)),
        };
        Ok(value)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NbtValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&[(String, NbtValue)]> {
        match self {
            NbtValue::Compound(entries) => Some(entries.as_slice()),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Vec<(String, NbtValue)>> {
        match self {
            NbtValue::Compound(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<NbtValue>> {
        match self {
            NbtValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a compound entry. Always `None` on non-compounds.
    pub fn get(&self, key: &str) -> Option<&NbtValue> {
        self.as_compound()?
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut NbtValue> {
        self.as_compound_mut()?
            .iter_mut()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Mutable compound child, `None` if absent or not a compound.
    pub fn get_compound_mut(&mut self, key: &str) -> Option<&mut NbtValue> {
        self.get_mut(key)
            .filter(|value| matches!(value, NbtValue::Compound(_)))
    }

    pub fn get_list_mut(&mut self, key: &str) -> Option<&mut Vec<NbtValue>> {
        self.get_mut(key)?.as_list_mut()
    }

    /// Compound child stored either as `minecraft:<key>` or bare `<key>`.
    pub fn get_namespaced_mut(&mut self, key: &str) -> Option<&mut NbtValue> {
        let namespaced = format!("minecraft:{}", key);
        let name = self
            .as_compound()?
            .iter()
            .find(|(name, _)| *name == namespaced || name == key)
            .map(|(name, _)| name.clone())?;
        self.get_compound_mut(&name)
    }

    /// Insert or replace a compound entry, keeping the original position on replace.
    /// Does nothing on non-compounds.
    pub fn put(&mut self, key: impl Into<String>, value: NbtValue) {
        let key = key.into();
        if let Some(entries) = self.as_compound_mut() {
            match entries.iter_mut().find(|(name, _)| *name == key) {
                Some((_, existing)) => *existing = value,
                None => entries.push((key, value)),
            }
        }
    }

    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.put(key, NbtValue::String(value.into()));
    }

    pub fn remove(&mut self, key: &str) -> Option<NbtValue> {
        let entries = self.as_compound_mut()?;
        let index = entries.iter().position(|(name, _)| name == key)?;
        Some(entries.remove(index).1)
    }
}

fn ensure(buf: &BytesMut, len: usize) -> NbtResult<()> {
    if buf.remaining() < len {
        return Err(NbtError::NotEnoughData);
    }
    Ok(())
}

fn read_u8(buf: &mut BytesMut) -> NbtResult<u8> {
    ensure(buf, 1)?;
    Ok(buf.get_u8())
}

fn read_i32(buf: &mut BytesMut) -> NbtResult<i32> {
    ensure(buf, 4)?;
    Ok(buf.get_i32())
}

/// Read an i32 array length and check that `len * element_size` bytes follow.
fn read_len(buf: &mut BytesMut, element_size: usize) -> NbtResult<usize> {
    let len = read_i32(buf)?;
    if len < 0 {
        return Err(NbtError::NegativeLength(len));
    }
    let len = len as usize;
    ensure(buf, len.saturating_mul(element_size))?;
    Ok(len)
}

fn read_nbt_string(buf: &mut BytesMut) -> NbtResult<String> {
    ensure(buf, 2)?;
    let len = buf.get_u16() as usize;
    ensure(buf, len)?;
    let bytes = buf.split_to(len);
    String::from_utf8(bytes.to_vec()).map_err(|_| NbtError::InvalidString)
}

fn write_nbt_string(s: &str, buf: &mut BytesMut) {
    let bytes = s.as_bytes();
    buf.put_u16(bytes.len() as u16);
    buf.put_slice(bytes);
}

/// Helper macro for building compound tags.
#[macro_export]
macro_rules! nbt_compound {
    ($($key:expr => $val:expr),* $(,)?) => {
        $crate::NbtValue::Compound(vec![
            $(($key.into(), $val)),*
        ])
    };
}

/// Helper macro for building list tags.
#[macro_export]
macro_rules! nbt_list {
    ($($val:expr),* $(,)?) => {
        $crate::NbtValue::List(vec![$($val),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NbtValue {
        nbt_compound! {
            "translate" => NbtValue::String("entity.minecraft.creaking".into()),
            "with" => nbt_list![NbtValue::Int(3), NbtValue::Int(4)],
            "minecraft:attribute_modifiers" => nbt_compound! {
                "modifiers" => nbt_list![]
            },
            "data" => NbtValue::LongArray(vec![1, -2]),
        }
    }

    #[test]
    fn test_write_simple_compound() {
        let nbt = NbtValue::Compound(vec![
            ("name".into(), NbtValue::String("test".into())),
            ("value".into(), NbtValue::Int(42)),
        ]);
        let mut buf = BytesMut::new();
        nbt.write_root_network(&mut buf);
        // Should start with TAG_COMPOUND (10)
        assert_eq!(buf[0], TAG_COMPOUND);
    }

    #[test]
    fn test_read_back_network_root() {
        let nbt = sample();
        let mut buf = BytesMut::new();
        nbt.write_root_network(&mut buf);
        buf.extend_from_slice(&[0xAB]);
        let read = NbtValue::read_root_network(&mut buf).unwrap();
        assert_eq!(read, nbt);
        // Trailing packet bytes are left untouched
        assert_eq!(&buf[..], &[0xAB]);
    }

    #[test]
    fn test_optional_root_absent() {
        let mut buf = BytesMut::from(&[TAG_END][..]);
        assert_eq!(NbtValue::read_optional_network(&mut buf).unwrap(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_truncated_input_is_an_error() {
        let mut buf = BytesMut::new();
        sample().write_root_network(&mut buf);
        let mut truncated = buf.split_to(buf.len() - 3);
        assert!(matches!(
            NbtValue::read_root_network(&mut truncated),
            Err(NbtError::NotEnoughData)
        ));
    }

    #[test]
    fn test_mutation_helpers() {
        let mut nbt = sample();
        assert_eq!(nbt.get_string("translate"), Some("entity.minecraft.creaking"));

        nbt.put_string("translate", "Creaking");
        assert_eq!(nbt.get_string("translate"), Some("Creaking"));
        // Replacing keeps the entry in place
        assert_eq!(nbt.as_compound().unwrap()[0].0, "translate");

        assert!(nbt.get_namespaced_mut("attribute_modifiers").is_some());
        assert!(nbt.get_namespaced_mut("missing").is_none());

        assert_eq!(nbt.remove("data"), Some(NbtValue::LongArray(vec![1, -2])));
        assert!(nbt.get("data").is_none());
        assert_eq!(nbt.get_list_mut("with").map(|l| l.len()), Some(2));
    }

    #[test]
    fn test_long_array() {
        let nbt = NbtValue::LongArray(vec![1, 2, 3]);
        let mut buf = BytesMut::new();
        nbt.write_payload(&mut buf);
        // 4 bytes length (3) + 3 * 8 bytes = 28 bytes
        assert_eq!(buf.len(), 28);
    }
}
