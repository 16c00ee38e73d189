use std::sync::Arc;

use bytes::BytesMut;
use tracing::{error, trace, warn};

use crate::adapter::ProtocolTranslator;
use crate::storage::UserConnection;
use crate::wrapper::{OutgoingPacket, PacketWrapper};
use crate::{ConnectionState, Direction};

struct Stage {
    translator: Arc<dyn ProtocolTranslator>,
    user: UserConnection,
}

/// Packets that made it through the pipeline, in emission order.
#[derive(Debug, Default)]
pub struct Routed {
    pub to_client: Vec<OutgoingPacket>,
    pub to_server: Vec<OutgoingPacket>,
    pub dropped: usize,
}

/// The translator chain of one connection, ordered from the server side to the client side.
///
/// Clientbound packets enter at the server end and serverbound packets at the client end.
/// Every packet a translator emits continues in its own direction from that translator,
/// so a serverbound packet synthesised while handling a clientbound one skips the
/// translators closer to the client.
pub struct ProtocolPipeline {
    stages: Vec<Stage>,
}

impl ProtocolPipeline {
    pub fn new(translators: Vec<Arc<dyn ProtocolTranslator>>) -> Self {
        let stages = translators
            .into_iter()
            .map(|translator| {
                let mut user = UserConnection::new();
                translator.init(&mut user);
                Stage { translator, user }
            })
            .collect();
        Self { stages }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn server_protocol(&self) -> Option<i32> {
        self.stages.first().map(|s| s.translator.server_protocol())
    }

    pub fn client_protocol(&self) -> Option<i32> {
        self.stages.last().map(|s| s.translator.client_protocol())
    }

    /// State of the translator at `stage` (0 is the server side).
    pub fn user(&self, stage: usize) -> Option<&UserConnection> {
        self.stages.get(stage).map(|s| &s.user)
    }

    /// Translate one packet received from the server or the client.
    pub fn process(
        &mut self,
        state: ConnectionState,
        direction: Direction,
        id: i32,
        payload: BytesMut,
    ) -> Routed {
        let mut routed = Routed::default();
        let start = match direction {
            Direction::Clientbound => Some(0),
            Direction::Serverbound => self.stages.len().checked_sub(1),
        };
        let packet = OutgoingPacket {
            direction,
            id,
            payload,
        };
        match start {
            Some(stage) => self.route(stage, state, packet, &mut routed),
            None => deliver(packet, &mut routed),
        }
        routed
    }

    fn route(
        &mut self,
        stage: usize,
        state: ConnectionState,
        packet: OutgoingPacket,
        routed: &mut Routed,
    ) {
        let Some(Stage { translator, user }) = self.stages.get_mut(stage) else {
            deliver(packet, routed);
            return;
        };
        let source_id = packet.id;
        let direction = packet.direction;
        let mut wrapper = PacketWrapper::new(direction, source_id, packet.payload);
        if let Err(err) = translator.translate(state, &mut wrapper, user) {
            if err.is_internal() {
                error!(
                    "Dropping {:?} packet 0x{:02X} at stage {}: {}",
                    direction, source_id, stage, err
                );
            } else {
                warn!(
                    "Dropping {:?} packet 0x{:02X} at stage {}: {}",
                    direction, source_id, stage, err
                );
            }
            routed.dropped += 1;
            return;
        }
        if wrapper.is_cancelled() {
            trace!(
                "{:?} packet 0x{:02X} cancelled at stage {}",
                direction,
                source_id,
                stage
            );
        }
        for out in wrapper.finish() {
            let next = match out.direction {
                Direction::Clientbound => Some(stage + 1),
                Direction::Serverbound => stage.checked_sub(1),
            };
            match next {
                Some(next) => self.route(next, state, out, routed),
                None => deliver(out, routed),
            }
        }
    }
}

fn deliver(packet: OutgoingPacket, routed: &mut Routed) {
    match packet.direction {
        Direction::Clientbound => routed.to_client.push(packet),
        Direction::Serverbound => routed.to_server.push(packet),
    }
}
