use bytes::BytesMut;

use crate::codec::CodecResult;
use crate::field::Field;
use crate::Direction;

/// A packet ready to leave a translator.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingPacket {
    pub direction: Direction,
    pub id: i32,
    pub payload: BytesMut,
}

/// Positional reader/writer over one packet body.
///
/// Reads consume the source payload, writes append to the rewritten payload. Whatever
/// input is left unread when the packet is finished is appended to the output unchanged.
/// Packets scheduled with [`PacketWrapper::send_after`] are emitted after this one, in
/// scheduling order.
#[derive(Debug)]
pub struct PacketWrapper {
    direction: Direction,
    id: i32,
    input: BytesMut,
    output: BytesMut,
    cancelled: bool,
    scheduled: Vec<OutgoingPacket>,
}

impl PacketWrapper {
    pub fn new(direction: Direction, id: i32, payload: BytesMut) -> Self {
        Self {
            direction,
            id,
            input: payload,
            output: BytesMut::new(),
            cancelled: false,
            scheduled: Vec::new(),
        }
    }

    /// An empty packet to fill with writes, used for synthetic packets.
    pub fn create(direction: Direction, id: i32) -> Self {
        Self::new(direction, id, BytesMut::new())
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    pub fn read<T: Field>(&mut self) -> CodecResult<T::Value> {
        T::read(&mut self.input)
    }

    pub fn write<T: Field>(&mut self, value: T::Value) {
        T::write(&value, &mut self.output);
    }

    /// Read a field and write it back unchanged, returning the value.
    pub fn passthrough<T: Field>(&mut self) -> CodecResult<T::Value> {
        let value = T::read(&mut self.input)?;
        T::write(&value, &mut self.output);
        Ok(value)
    }

    /// Move all unread input to the output.
    pub fn passthrough_all(&mut self) {
        let rest = self.input.split();
        self.output.extend_from_slice(&rest);
    }

    /// Raw access for codecs that are not expressed as a [`Field`].
    pub fn input_mut(&mut self) -> &mut BytesMut {
        &mut self.input
    }

    pub fn output_mut(&mut self) -> &mut BytesMut {
        &mut self.output
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Schedule a finished packet to be emitted after this one.
    pub fn send_after(&mut self, packet: PacketWrapper) {
        self.scheduled.extend(packet.finish());
    }

    /// The rewritten packet (unless cancelled) followed by everything scheduled.
    pub fn finish(mut self) -> Vec<OutgoingPacket> {
        let mut packets = Vec::with_capacity(self.scheduled.len() + 1);
        if !self.cancelled {
            self.passthrough_all();
            packets.push(OutgoingPacket {
                direction: self.direction,
                id: self.id,
                payload: self.output,
            });
        }
        packets.append(&mut self.scheduled);
        packets
    }
}
