//! tabi-lists
//!
//! Collaborative travel-list core: the shared wishlist and the souvenir
//! list of a personal itinerary viewer, backed by a hosted row store.
//!
//! Layered architecture:
//! - domain: entities, group labels, move intents, errors
//! - store: remote row-service abstraction and implementations
//! - engine: list synchronization (optimistic apply, remote commit,
//!   reconcile by reload)
//! - dnd: drag-gesture wiring on top of the engine
//!
//! Embedded library: the host shell owns rendering, delete confirmation and
//! the transient error display. It drives the engine's operations and
//! re-renders from the engine's current snapshot; it never mutates list
//! state directly.

pub mod dnd;
pub mod domain;
pub mod engine;
pub mod notify;
pub mod store;

pub use dnd::DragSession;
pub use domain::{
    EngineError, EngineResult, Group, ListItem, MoveIntent, SouvenirGroup, StoreError,
    StoreResult, TravelItinerary, WishlistGroup,
};
pub use engine::ListEngine;
pub use list_dnd::{DragController, DropTarget};
pub use notify::{ErrorSink, ERROR_DISPLAY_MS};
pub use store::{ListStore, MemoryListStore, RestListStore, StoreConfig};
