use bytes::{Buf, BufMut, BytesMut};
use rewind_nbt::NbtError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("VarInt too big")]
    VarIntTooBig,
    #[error("Not enough data")]
    NotEnoughData,
    #[error("String too long: {0} > {1}")]
    StringTooLong(usize, usize),
    #[error("Negative length: {0}")]
    NegativeLength(i32),
    #[error("Invalid NBT: {0}")]
    Nbt(#[from] NbtError),
    #[error("Unsupported value: {0}")]
    Unsupported(String),
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Scale between block/tick velocities and their short encoding.
pub const VELOCITY_SCALE: f64 = 8000.0;

fn ensure(buf: &BytesMut, len: usize) -> CodecResult<()> {
    if buf.remaining() < len {
        return Err(CodecError::NotEnoughData);
    }
    Ok(())
}

/// Read a VarInt from the buffer.
pub fn read_varint(buf: &mut BytesMut) -> CodecResult<i32> {
    let mut result: i32 = 0;
    let mut shift: u32 = 0;
    loop {
        if !buf.has_remaining() {
            return Err(CodecError::NotEnoughData);
        }
        let byte = buf.get_u8();
        result |= ((byte & 0x7F) as i32) << shift;
        if byte & 0x80 == 0 {
            return Ok(result);
        }
        shift += 7;
        if shift >= 32 {
            return Err(CodecError::VarIntTooBig);
        }
    }
}

/// Write a VarInt to the buffer.
pub fn write_varint(buf: &mut BytesMut, mut value: i32) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value = ((value as u32) >> 7) as i32;
        if value != 0 {
            byte |= 0x80;
        }
        buf.put_u8(byte);
        if value == 0 {
            break;
        }
    }
}

/// Read a VarLong from the buffer.
pub fn read_varlong(buf: &mut BytesMut) -> CodecResult<i64> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;
    loop {
        if !buf.has_remaining() {
            return Err(CodecError::NotEnoughData);
        }
        let byte = buf.get_u8();
        result |= ((byte & 0x7F) as i64) << shift;
        if byte & 0x80 == 0 {
            return Ok(result);
        }
        shift += 7;
        if shift >= 64 {
            return Err(CodecError::VarIntTooBig);
        }
    }
}

/// Write a VarLong to the buffer.
pub fn write_varlong(buf: &mut BytesMut, mut value: i64) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value = ((value as u64) >> 7) as i64;
        if value != 0 {
            byte |= 0x80;
        }
        buf.put_u8(byte);
        if value == 0 {
            break;
        }
    }
}

/// Read a varint length prefix, rejecting negative values.
pub fn read_length(buf: &mut BytesMut) -> CodecResult<usize> {
    let len = read_varint(buf)?;
    if len < 0 {
        return Err(CodecError::NegativeLength(len));
    }
    Ok(len as usize)
}

/// Read a protocol string (varint-prefixed UTF-8).
pub fn read_string(buf: &mut BytesMut, max_len: usize) -> CodecResult<String> {
    let len = read_length(buf)?;
    if len > max_len * 4 {
        return Err(CodecError::StringTooLong(len, max_len));
    }
    ensure(buf, len)?;
    let bytes = buf.split_to(len);
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write a protocol string.
pub fn write_string(buf: &mut BytesMut, s: &str) {
    write_varint(buf, s.len() as i32);
    buf.put_slice(s.as_bytes());
}

/// Read a UUID (128 bits, big endian).
pub fn read_uuid(buf: &mut BytesMut) -> CodecResult<Uuid> {
    ensure(buf, 16)?;
    let mut bytes = [0u8; 16];
    buf.copy_to_slice(&mut bytes);
    Ok(Uuid::from_bytes(bytes))
}

/// Write a UUID.
pub fn write_uuid(buf: &mut BytesMut, uuid: &Uuid) {
    buf.put_slice(uuid.as_bytes());
}

/// Read a byte array with varint length prefix.
pub fn read_byte_array(buf: &mut BytesMut) -> CodecResult<Vec<u8>> {
    let len = read_length(buf)?;
    ensure(buf, len)?;
    let bytes = buf.split_to(len);
    Ok(bytes.to_vec())
}

/// Write a byte array with varint length prefix.
pub fn write_byte_array(buf: &mut BytesMut, data: &[u8]) {
    write_varint(buf, data.len() as i32);
    buf.put_slice(data);
}

pub fn read_u8(buf: &mut BytesMut) -> CodecResult<u8> {
    ensure(buf, 1)?;
    Ok(buf.get_u8())
}

pub fn read_i8(buf: &mut BytesMut) -> CodecResult<i8> {
    ensure(buf, 1)?;
    Ok(buf.get_i8())
}

pub fn read_bool(buf: &mut BytesMut) -> CodecResult<bool> {
    Ok(read_u8(buf)? != 0)
}

pub fn read_i16(buf: &mut BytesMut) -> CodecResult<i16> {
    ensure(buf, 2)?;
    Ok(buf.get_i16())
}

pub fn read_i32(buf: &mut BytesMut) -> CodecResult<i32> {
    ensure(buf, 4)?;
    Ok(buf.get_i32())
}

pub fn read_i64(buf: &mut BytesMut) -> CodecResult<i64> {
    ensure(buf, 8)?;
    Ok(buf.get_i64())
}

pub fn read_f32(buf: &mut BytesMut) -> CodecResult<f32> {
    ensure(buf, 4)?;
    Ok(buf.get_f32())
}

pub fn read_f64(buf: &mut BytesMut) -> CodecResult<f64> {
    ensure(buf, 8)?;
    Ok(buf.get_f64())
}

/// Pack degrees into a 1/256-turn byte. Lossy by design of the wire format;
/// angles outside [-180, 180) wrap around.
pub fn pack_angle(degrees: f32) -> i8 {
    (degrees * 256.0 / 360.0).round() as i32 as i8
}

/// Inverse of [`pack_angle`], within 360/256 degrees (modulo a full turn).
pub fn unpack_angle(packed: i8) -> f32 {
    packed as f32 * 360.0 / 256.0
}

/// Encode a velocity component in 1/8000 blocks per tick, clamped to the short range.
pub fn pack_velocity(velocity: f64) -> i16 {
    (velocity * VELOCITY_SCALE)
        .round()
        .clamp(i16::MIN as f64, i16::MAX as f64) as i16
}
