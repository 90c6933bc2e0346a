use alloc::{boxed::Box, vec::Vec};
use core::fmt;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::*;

/// Kinds of notifications a [`Game`] emits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    CellOpened,
    CellMarked,
    CellUnmarked,
    GameStarted,
    GameWon,
    GameLost,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        Self::CellOpened,
        Self::CellMarked,
        Self::CellUnmarked,
        Self::GameStarted,
        Self::GameWon,
        Self::GameLost,
    ];
}

/// A notification together with its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CellOpened { coords: Coord2, value: u8 },
    CellMarked { coords: Coord2 },
    CellUnmarked { coords: Coord2 },
    GameStarted,
    GameWon { moves: u32 },
    GameLost { coords: Coord2 },
}

impl GameEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::CellOpened { .. } => EventKind::CellOpened,
            Self::CellMarked { .. } => EventKind::CellMarked,
            Self::CellUnmarked { .. } => EventKind::CellUnmarked,
            Self::GameStarted => EventKind::GameStarted,
            Self::GameWon { .. } => EventKind::GameWon,
            Self::GameLost { .. } => EventKind::GameLost,
        }
    }
}

pub type EventHandler = Box<dyn FnMut(&GameEvent)>;

/// Per-kind subscriber lists, dispatched synchronously in registration order.
///
/// Handlers are not isolated from each other: a panicking handler unwinds
/// through the operation that fired the event.
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<EventKind, Vec<EventHandler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: EventKind, handler: impl FnMut(&GameEvent) + 'static) {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    pub fn emit(&mut self, event: GameEvent) {
        log::trace!("Emitting {:?}", event);
        if let Some(handlers) = self.handlers.get_mut(&event.kind()) {
            for handler in handlers.iter_mut() {
                handler(&event);
            }
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for kind in EventKind::ALL {
            let count = self.handler_count(kind);
            if count > 0 {
                map.entry(&kind, &count);
            }
        }
        map.finish()
    }
}
