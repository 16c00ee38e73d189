/// The state of a protocol connection that translation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    Configuration,
    Play,
}

impl ConnectionState {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "configuration" => Some(ConnectionState::Configuration),
            "play" => Some(ConnectionState::Play),
            _ => None,
        }
    }
}

/// Which way a packet travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Server to client.
    Clientbound,
    /// Client to server.
    Serverbound,
}

impl Direction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clientbound" => Some(Direction::Clientbound),
            "serverbound" => Some(Direction::Serverbound),
            _ => None,
        }
    }
}
