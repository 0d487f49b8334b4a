//! Pointer-event delivery and the host subscription contract.
//!
//! The host owns the actual input machinery (DOM listeners, a winit loop, a
//! test harness) and forwards events to the plot one at a time. The
//! subscription tells the host when delivery is wanted: the plot attaches at
//! construction and the guard detaches on drop, so listener registration and
//! release always pair up.

use glam::DVec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Pointer input forwarded by the host.
///
/// Positions are logical pixels in the surface's coordinate space. `Up`
/// carries no position: a release anywhere, including outside the surface,
/// must end a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: DVec2 },
    Move { position: DVec2 },
    Up,
}

/// Identifier pairing one `attach` with its `detach`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Host side of pointer delivery.
///
/// `attach` must register listeners wide enough to observe pointer-up
/// outside the plot's own surface; `detach` must remove exactly what the
/// matching `attach` registered.
pub trait EventSource {
    fn attach(&mut self) -> SubscriptionId;
    fn detach(&mut self, id: SubscriptionId);
}

/// Shared handle to a host event source. The component is single threaded,
/// so `Rc<RefCell<..>>` is the ownership story throughout.
pub type SharedEventSource = Rc<RefCell<dyn EventSource>>;

/// Event source for headless hosts: hands out ids and forgets them.
#[derive(Debug, Default)]
pub struct NullEventSource {
    next: u64,
}

impl EventSource for NullEventSource {
    fn attach(&mut self) -> SubscriptionId {
        self.next += 1;
        SubscriptionId(self.next)
    }

    fn detach(&mut self, _id: SubscriptionId) {}
}

/// Releases a pointer subscription when dropped.
///
/// Holds only a weak handle, so an already-dropped host is not kept alive
/// for the guard's sake; release then becomes a no-op.
#[derive(Debug)]
pub struct EventSubscription {
    source: Weak<RefCell<dyn EventSource>>,
    id: SubscriptionId,
}

impl EventSubscription {
    /// Attach to `source` and hand back the release guard.
    pub fn acquire(source: &SharedEventSource) -> Self {
        let id = source.borrow_mut().attach();
        log::debug!(target: "orbitplot", "pointer subscription {id:?} attached");
        Self {
            source: Rc::downgrade(source),
            id,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Some(source) = self.source.upgrade() {
            source.borrow_mut().detach(self.id);
            log::debug!(target: "orbitplot", "pointer subscription {:?} released", self.id);
        }
    }
}
