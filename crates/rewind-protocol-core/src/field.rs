//! Typed wire fields used by [`PacketWrapper`](crate::PacketWrapper) reads and writes.

use bytes::{BufMut, BytesMut};
use rewind_nbt::NbtValue;
use rewind_types::{BlockPos, GlobalPos, Identifier};

use crate::codec::*;

/// A wire representation with a matching Rust value.
pub trait Field {
    type Value;

    fn read(buf: &mut BytesMut) -> CodecResult<Self::Value>;
    fn write(value: &Self::Value, buf: &mut BytesMut);
}

const MAX_STRING: usize = 32767;

macro_rules! primitive_field {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $read:path, $write:path) => {
        $(#[$meta])*
        pub struct $name;

        impl Field for $name {
            type Value = $ty;

            fn read(buf: &mut BytesMut) -> CodecResult<$ty> {
                $read(buf)
            }

            fn write(value: &$ty, buf: &mut BytesMut) {
                $write(buf, *value)
            }
        }
    };
}

primitive_field!(VarInt, i32, read_varint, write_varint);
primitive_field!(VarLong, i64, read_varlong, write_varlong);
primitive_field!(Byte, i8, read_i8, BytesMut::put_i8);
primitive_field!(UnsignedByte, u8, read_u8, BytesMut::put_u8);
primitive_field!(Short, i16, read_i16, BytesMut::put_i16);
primitive_field!(Int, i32, read_i32, BytesMut::put_i32);
primitive_field!(Long, i64, read_i64, BytesMut::put_i64);
primitive_field!(Float, f32, read_f32, BytesMut::put_f32);
primitive_field!(Double, f64, read_f64, BytesMut::put_f64);

pub struct Boolean;

impl Field for Boolean {
    type Value = bool;

    fn read(buf: &mut BytesMut) -> CodecResult<bool> {
        read_bool(buf)
    }

    fn write(value: &bool, buf: &mut BytesMut) {
        buf.put_u8(*value as u8)
    }
}

pub struct Str;

impl Field for Str {
    type Value = String;

    fn read(buf: &mut BytesMut) -> CodecResult<String> {
        read_string(buf, MAX_STRING)
    }

    fn write(value: &String, buf: &mut BytesMut) {
        write_string(buf, value)
    }
}

pub struct Uuid;

impl Field for Uuid {
    type Value = uuid::Uuid;

    fn read(buf: &mut BytesMut) -> CodecResult<uuid::Uuid> {
        read_uuid(buf)
    }

    fn write(value: &uuid::Uuid, buf: &mut BytesMut) {
        write_uuid(buf, value)
    }
}

pub struct ByteArray;

impl Field for ByteArray {
    type Value = Vec<u8>;

    fn read(buf: &mut BytesMut) -> CodecResult<Vec<u8>> {
        read_byte_array(buf)
    }

    fn write(value: &Vec<u8>, buf: &mut BytesMut) {
        write_byte_array(buf, value)
    }
}

pub struct VarIntArray;

impl Field for VarIntArray {
    type Value = Vec<i32>;

    fn read(buf: &mut BytesMut) -> CodecResult<Vec<i32>> {
        let len = read_length(buf)?;
        let mut values = Vec::with_capacity(len.min(buf.len()));
        for _ in 0..len {
            values.push(read_varint(buf)?);
        }
        Ok(values)
    }

    fn write(value: &Vec<i32>, buf: &mut BytesMut) {
        write_varint(buf, value.len() as i32);
        for v in value {
            write_varint(buf, *v);
        }
    }
}

pub struct StringArray;

impl Field for StringArray {
    type Value = Vec<String>;

    fn read(buf: &mut BytesMut) -> CodecResult<Vec<String>> {
        let len = read_length(buf)?;
        let mut values = Vec::with_capacity(len.min(buf.len()));
        for _ in 0..len {
            values.push(read_string(buf, MAX_STRING)?);
        }
        Ok(values)
    }

    fn write(value: &Vec<String>, buf: &mut BytesMut) {
        write_varint(buf, value.len() as i32);
        for s in value {
            write_string(buf, s);
        }
    }
}

pub struct OptionalString;

impl Field for OptionalString {
    type Value = Option<String>;

    fn read(buf: &mut BytesMut) -> CodecResult<Option<String>> {
        if read_bool(buf)? {
            Ok(Some(read_string(buf, MAX_STRING)?))
        } else {
            Ok(None)
        }
    }

    fn write(value: &Option<String>, buf: &mut BytesMut) {
        buf.put_u8(value.is_some() as u8);
        if let Some(s) = value {
            write_string(buf, s);
        }
    }
}

/// Nameless network tag; must be present.
pub struct Tag;

impl Field for Tag {
    type Value = NbtValue;

    fn read(buf: &mut BytesMut) -> CodecResult<NbtValue> {
        Ok(NbtValue::read_root_network(buf)?)
    }

    fn write(value: &NbtValue, buf: &mut BytesMut) {
        value.write_root_network(buf)
    }
}

/// Nameless network tag where a bare end tag means absent.
pub struct OptionalTag;

impl Field for OptionalTag {
    type Value = Option<NbtValue>;

    fn read(buf: &mut BytesMut) -> CodecResult<Option<NbtValue>> {
        Ok(NbtValue::read_optional_network(buf)?)
    }

    fn write(value: &Option<NbtValue>, buf: &mut BytesMut) {
        NbtValue::write_optional_network(value.as_ref(), buf)
    }
}

pub struct Position;

impl Field for Position {
    type Value = BlockPos;

    fn read(buf: &mut BytesMut) -> CodecResult<BlockPos> {
        Ok(BlockPos::decode(read_i64(buf)? as u64))
    }

    fn write(value: &BlockPos, buf: &mut BytesMut) {
        buf.put_u64(value.encode())
    }
}

pub struct OptionalGlobalPos;

impl Field for OptionalGlobalPos {
    type Value = Option<GlobalPos>;

    fn read(buf: &mut BytesMut) -> CodecResult<Option<GlobalPos>> {
        if !read_bool(buf)? {
            return Ok(None);
        }
        let dimension = read_string(buf, MAX_STRING)?
            .parse::<Identifier>()
            .map_err(CodecError::Unsupported)?;
        let pos = BlockPos::decode(read_i64(buf)? as u64);
        Ok(Some(GlobalPos { dimension, pos }))
    }

    fn write(value: &Option<GlobalPos>, buf: &mut BytesMut) {
        buf.put_u8(value.is_some() as u8);
        if let Some(global) = value {
            write_string(buf, &global.dimension.to_string());
            buf.put_u64(global.pos.encode());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_nbt::nbt_compound;

    fn roundtrip<F: Field>(value: F::Value) -> F::Value {
        let mut buf = BytesMut::new();
        F::write(&value, &mut buf);
        let read = F::read(&mut buf).unwrap();
        assert!(buf.is_empty());
        read
    }

    #[test]
    fn test_optional_fields_absent() {
        assert_eq!(roundtrip::<OptionalString>(None), None);
        assert_eq!(roundtrip::<OptionalTag>(None), None);
        assert_eq!(roundtrip::<OptionalGlobalPos>(None), None);
    }

    #[test]
    fn test_global_pos() {
        let pos = GlobalPos {
            dimension: Identifier::minecraft("the_nether"),
            pos: BlockPos::new(-3, 70, 12),
        };
        assert_eq!(roundtrip::<OptionalGlobalPos>(Some(pos.clone())), Some(pos));
    }

    #[test]
    fn test_tag_field() {
        let tag = nbt_compound! { "text" => rewind_nbt::NbtValue::String("hi".into()) };
        assert_eq!(roundtrip::<OptionalTag>(Some(tag.clone())), Some(tag));
    }

    #[test]
    fn test_boolean_writes_one_byte() {
        let mut buf = BytesMut::new();
        Boolean::write(&true, &mut buf);
        assert_eq!(&buf[..], &[1]);
    }
}
