//! GATT presentation layer
//!
//! Value objects for discovered characteristics and descriptors, the
//! collaborator contract of the service that owns the connection, and the
//! characteristic view that turns both into display strings.

pub mod constants;
pub mod service;
pub mod types;
pub mod view;


pub use service::GattService;
pub use types::{Characteristic, CharacteristicProperties, Descriptor};
pub use view::{CharacteristicChangedCallback, CharacteristicView, NameTable};
