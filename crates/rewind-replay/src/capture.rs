//! Textual packet captures.
//!
//! One packet per line: `<clientbound|serverbound> <configuration|play> 0x<id> [hex payload]`.
//! Blank lines and lines starting with `#` are skipped.

use std::fmt;

use bytes::BytesMut;
use rewind_protocol_core::{ConnectionState, Direction, OutgoingPacket};

#[derive(Debug, Clone, PartialEq)]
pub struct CapturedPacket {
    pub direction: Direction,
    pub state: ConnectionState,
    pub id: i32,
    pub payload: BytesMut,
}

pub fn parse(input: &str) -> anyhow::Result<Vec<CapturedPacket>> {
    let mut packets = Vec::new();
    for (number, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let packet = parse_line(line)
            .map_err(|e| anyhow::anyhow!("line {}: {}", number + 1, e))?;
        packets.push(packet);
    }
    Ok(packets)
}

fn parse_line(line: &str) -> anyhow::Result<CapturedPacket> {
    let mut parts = line.split_whitespace();
    let direction = parts
        .next()
        .and_then(Direction::from_name)
        .ok_or_else(|| anyhow::anyhow!("Expected clientbound or serverbound"))?;
    let state = parts
        .next()
        .and_then(ConnectionState::from_name)
        .ok_or_else(|| anyhow::anyhow!("Expected configuration or play"))?;
    let id = parts
        .next()
        .and_then(|id| id.strip_prefix("0x"))
        .and_then(|id| i32::from_str_radix(id, 16).ok())
        .ok_or_else(|| anyhow::anyhow!("Expected a hex packet id like 0x2C"))?;
    let payload = match parts.next() {
        Some(payload) => hex::decode(payload)?,
        None => Vec::new(),
    };
    if parts.next().is_some() {
        return Err(anyhow::anyhow!("Trailing data after payload"));
    }
    Ok(CapturedPacket {
        direction,
        state,
        id,
        payload: BytesMut::from(&payload[..]),
    })
}

/// Formats a translated packet as a capture line, so output can be replayed again.
pub struct CaptureLine<'a> {
    pub state: ConnectionState,
    pub packet: &'a OutgoingPacket,
}

impl fmt::Display for CaptureLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.packet.direction {
            Direction::Clientbound => "clientbound",
            Direction::Serverbound => "serverbound",
        };
        let state = match self.state {
            ConnectionState::Configuration => "configuration",
            ConnectionState::Play => "play",
        };
        write!(f, "{} {} 0x{:02X}", direction, state, self.packet.id)?;
        if !self.packet.payload.is_empty() {
            write!(f, " {}", hex::encode(&self.packet.payload))?;
        }
        Ok(())
    }
}
