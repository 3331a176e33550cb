//! Collaborator contract for the service that owns the device connection

use crate::uuid::Uuid;

use super::types::{Characteristic, Descriptor};

/// The slice of a GATT service that a [`CharacteristicView`] drives.
///
/// Implementors own the wire connection and the request queue; a device
/// connection carries one GATT request at a time, so requests issued here
/// are queued and ordered by the implementor. All three request methods are
/// fire-and-forget: they never block, return nothing, and deliver results
/// through the implementor's own update path (typically by handing the view
/// a refreshed [`Characteristic`] snapshot). A service must outlive every
/// view built from it, which the view enforces by borrowing.
///
/// [`CharacteristicView`]: super::view::CharacteristicView
pub trait GattService {
    /// Queues a write of `value` to the descriptor.
    fn write_descriptor(&self, descriptor: &Descriptor, value: &[u8]);

    /// Queues a read of the descriptor value.
    fn read_descriptor(&self, descriptor: &Descriptor);

    /// Queues a read of the characteristic value.
    fn read_characteristic(&self, characteristic: &Characteristic);

    /// UUID of the service itself. Synchronous; no device round-trip.
    fn service_uuid(&self) -> Uuid;
}
