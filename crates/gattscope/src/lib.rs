//! gattscope - display adapter for BLE GATT characteristics
//!
//! This library renders one GATT characteristic's name, UUID, handle, value
//! and property flags as display-ready strings for a UI, and drives the
//! minimal descriptor/characteristic request sequence needed to populate
//! that state through a service collaborator it does not own. Discovery,
//! connections and the transport itself stay with the platform BLE stack;
//! this crate only consumes their results through the [`GattService`] trait.

pub mod gatt;
pub mod uuid;

// Re-export common types for convenience
pub use gatt::{
    Characteristic, CharacteristicChangedCallback, CharacteristicProperties, CharacteristicView,
    Descriptor, GattService, NameTable,
};
pub use uuid::{Uuid, UuidParseError};
