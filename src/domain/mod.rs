//! Domain Layer
//!
//! Entities and core abstractions. No I/O here; serde only covers the wire
//! shapes the store layer persists.

mod error;
mod item;
mod itinerary;
mod move_intent;

pub use error::{EngineError, EngineResult, StoreError, StoreResult};
pub use item::{Group, ListItem, SouvenirGroup, WishlistGroup};
pub use itinerary::{
    ActivityOwner, DaySchedule, FlightInfo, ItineraryFlights, TransitKind, TravelActivity,
    TravelItinerary,
};
pub use move_intent::MoveIntent;
