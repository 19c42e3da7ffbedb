//! Per-room serialization of engine operations.
//!
//! Every room is an independent state machine whose operations must apply
//! in submission order without interleaving. The registry enforces that
//! with one mutex per room; rooms on different keys run in parallel.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::state::Room;
use crate::errors::GameError;

pub type RoomId = i64;

#[derive(Default)]
pub struct RoomRegistry {
    rooms: DashMap<RoomId, Arc<Mutex<Room>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, room: Room) {
        debug!(room_id = room.id, "room opened");
        self.rooms.insert(room.id, Arc::new(Mutex::new(room)));
    }

    pub fn close(&self, id: RoomId) -> bool {
        debug!(room_id = id, "room closed");
        self.rooms.remove(&id).is_some()
    }

    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains_key(&id)
    }

    /// Run one engine operation against the room, holding its lock for the
    /// duration so mutations never interleave. Fails with `NotFound` for an
    /// unknown room id.
    pub fn with_room<T>(
        &self,
        id: RoomId,
        f: impl FnOnce(&mut Room) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let cell = {
            let entry = self
                .rooms
                .get(&id)
                .ok_or_else(|| GameError::not_found(format!("room {id}")))?;
            // Clone out so the map shard is not held while the op runs.
            Arc::clone(entry.value())
        };
        let mut room = cell.lock();
        f(&mut room)
    }
}
