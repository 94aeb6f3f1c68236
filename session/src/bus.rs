//! Synchronous observer registry for gameplay events.

use rand::RngCore;
use sidewinder_core::{AudioDirective, GameEvent, GridBounds};
use sidewinder_world::GameState;
use thiserror::Error;

/// Number of listener slots a session's registry holds.
pub const LISTENER_CAPACITY: usize = 8;

/// Mutable surroundings handed to listeners during [`EventBus::publish`].
///
/// Listeners receive the whole session state plus the per-frame audio
/// buffer; they never touch a device directly, which keeps every reaction
/// testable headlessly.
pub struct EventContext<'a> {
    /// Authoritative state of the running session.
    pub state: &'a mut GameState,
    /// Play area the session runs in.
    pub bounds: GridBounds,
    /// Randomness for fruit placement.
    pub rng: &'a mut dyn RngCore,
    /// Audio side effects collected for the backend to execute.
    pub audio: &'a mut Vec<AudioDirective>,
}

/// Reactive behavior invoked when a subscribed event is published.
///
/// Callbacks run synchronously inside [`EventBus::publish`] and must not
/// publish the event kind they are reacting to.
pub trait EventListener {
    /// Reacts to one published event.
    fn handle(&mut self, event: GameEvent, ctx: &mut EventContext<'_>);
}

/// Errors raised while registering listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SubscribeError {
    /// Every listener slot is already taken.
    #[error("listener registry is full ({capacity} slots)")]
    RegistryFull {
        /// Fixed number of slots the registry holds.
        capacity: usize,
    },
}

struct Registration {
    event: GameEvent,
    listener: Box<dyn EventListener>,
}

/// Fixed-capacity registry dispatching events in registration order.
///
/// Registrations are append-only for the life of a session; there is no
/// unsubscription because the listener set is statically known at startup.
#[derive(Default)]
pub struct EventBus {
    slots: [Option<Registration>; LISTENER_CAPACITY],
}

impl EventBus {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for `event` in the first free slot.
    pub fn subscribe(
        &mut self,
        event: GameEvent,
        listener: Box<dyn EventListener>,
    ) -> Result<(), SubscribeError> {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(Registration { event, listener });
                Ok(())
            }
            None => Err(SubscribeError::RegistryFull {
                capacity: LISTENER_CAPACITY,
            }),
        }
    }

    /// Invokes every listener subscribed to `event`, in registration order.
    pub fn publish(&mut self, event: GameEvent, ctx: &mut EventContext<'_>) {
        for registration in self.slots.iter_mut().flatten() {
            if registration.event == event {
                registration.listener.handle(event, ctx);
            }
        }
    }

    /// Number of occupied listener slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Reports whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
