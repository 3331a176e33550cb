//! Value objects describing a discovered GATT characteristic
//!
//! These are snapshots handed over by whatever stack performed discovery;
//! nothing here talks to a device. ATT handles are 1-based, so handle 0
//! marks an object that was never bound to a real attribute.

use bitflags::bitflags;

use crate::uuid::Uuid;

bitflags! {
    /// Property bits from the characteristic declaration, controlling which
    /// operations the peripheral permits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CharacteristicProperties: u8 {
        const BROADCAST = 0x01;
        const READ = 0x02;
        const WRITE_WITHOUT_RESPONSE = 0x04;
        const WRITE = 0x08;
        const NOTIFY = 0x10;
        const INDICATE = 0x20;
        const AUTHENTICATED_SIGNED_WRITES = 0x40;
        const EXTENDED_PROPERTIES = 0x80;
    }
}

impl CharacteristicProperties {
    pub fn can_read(&self) -> bool {
        self.contains(Self::READ)
    }

    pub fn can_write(&self) -> bool {
        self.contains(Self::WRITE)
    }

    pub fn can_write_without_response(&self) -> bool {
        self.contains(Self::WRITE_WITHOUT_RESPONSE)
    }

    pub fn can_notify(&self) -> bool {
        self.contains(Self::NOTIFY)
    }

    pub fn can_indicate(&self) -> bool {
        self.contains(Self::INDICATE)
    }

    pub fn can_broadcast(&self) -> bool {
        self.contains(Self::BROADCAST)
    }

    pub fn can_signed_write(&self) -> bool {
        self.contains(Self::AUTHENTICATED_SIGNED_WRITES)
    }

    pub fn has_extended_properties(&self) -> bool {
        self.contains(Self::EXTENDED_PROPERTIES)
    }
}

impl Default for CharacteristicProperties {
    fn default() -> Self {
        CharacteristicProperties::empty()
    }
}

/// A descriptor attached to a characteristic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    /// Descriptor type UUID
    pub uuid: Uuid,
    /// Attribute handle of the descriptor
    pub handle: u16,
    /// Last known descriptor value
    pub value: Vec<u8>,
}

impl Descriptor {
    /// True when the descriptor is bound to a real GATT attribute.
    pub fn is_valid(&self) -> bool {
        self.handle != 0
    }
}

/// A characteristic as discovered on a remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Characteristic {
    /// Characteristic value UUID
    pub uuid: Uuid,
    /// Attribute handle of the characteristic value
    pub handle: u16,
    /// Declared human-readable name, when the stack knows one
    pub name: Option<String>,
    /// Property bits from the declaration
    pub properties: CharacteristicProperties,
    /// Last known characteristic value
    pub value: Vec<u8>,
    /// Descriptors in discovery order
    pub descriptors: Vec<Descriptor>,
}

impl Characteristic {
    /// True when the characteristic is bound to a real GATT attribute.
    /// The default value is unbound.
    pub fn is_valid(&self) -> bool {
        self.handle != 0
    }

    /// Finds the first descriptor of the given type.
    pub fn descriptor(&self, uuid: Uuid) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.uuid == uuid)
    }
}
