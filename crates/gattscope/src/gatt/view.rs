//! Display adapter for a single GATT characteristic
//!
//! [`CharacteristicView`] wraps one discovered characteristic together with
//! a borrowed handle to the service that exposes it, renders the
//! characteristic's metadata as display-ready strings, and issues the small
//! request sequence (notification/indication enablement plus initial reads)
//! needed to populate that state. It performs no I/O of its own: every
//! request is fire-and-forget against the [`GattService`], and results come
//! back only when the caller installs a refreshed snapshot with
//! [`CharacteristicView::set_characteristic`].

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace, warn};

use crate::uuid::Uuid;

use super::constants::{
    CCC_ENABLE_INDICATION, CCC_ENABLE_NOTIFICATION, CHAR_USER_DESC_UUID, CLIENT_CHAR_CONFIG_UUID,
    NORDIC_UART_RX_UUID, NORDIC_UART_TX_UUID,
};
use super::service::GattService;
use super::types::{Characteristic, CharacteristicProperties, Descriptor};

/// Callback invoked after [`CharacteristicView::set_characteristic`]
/// replaces the wrapped characteristic.
pub type CharacteristicChangedCallback = Box<dyn Fn(&Characteristic)>;

/// Property labels in the fixed order [`CharacteristicView::permission`]
/// renders them.
const PROPERTY_LABELS: [(CharacteristicProperties, &str); 8] = [
    (CharacteristicProperties::READ, "Read"),
    (CharacteristicProperties::WRITE, "Write"),
    (CharacteristicProperties::NOTIFY, "Notify"),
    (CharacteristicProperties::INDICATE, "Indicate"),
    (CharacteristicProperties::EXTENDED_PROPERTIES, "ExtendedProperty"),
    (CharacteristicProperties::BROADCAST, "Broadcast"),
    (CharacteristicProperties::WRITE_WITHOUT_RESPONSE, "WriteNoResp"),
    (CharacteristicProperties::AUTHENTICATED_SIGNED_WRITES, "WriteSigned"),
];

/// Fallback UUID-to-name table consulted when a characteristic declares no
/// name and carries no user-description descriptor.
///
/// The defaults cover the Nordic UART Service data characteristics; callers
/// with other vendor characteristics supply their own entries through
/// [`CharacteristicView::set_name_table`].
pub struct NameTable {
    names: HashMap<Uuid, String>,
}

impl NameTable {
    /// A table with no entries; every miss falls through to "Unknown".
    pub fn empty() -> Self {
        NameTable {
            names: HashMap::new(),
        }
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, uuid: Uuid, name: impl Into<String>) {
        self.names.insert(uuid, name.into());
    }

    /// Looks up the display name for a characteristic UUID.
    pub fn lookup(&self, uuid: &Uuid) -> Option<&str> {
        self.names.get(uuid).map(String::as_str)
    }
}

impl Default for NameTable {
    fn default() -> Self {
        let mut table = NameTable::empty();
        table.insert(NORDIC_UART_TX_UUID, "Nordic UART TX");
        table.insert(NORDIC_UART_RX_UUID, "Nordic UART RX");
        table
    }
}

/// Presentation adapter for one GATT characteristic.
///
/// The service reference is a capability handle only: the view never owns
/// the service, and the borrow makes the caller guarantee the service lives
/// at least as long as the view.
pub struct CharacteristicView<'a> {
    characteristic: Characteristic,
    service: &'a dyn GattService,
    /// Client Characteristic Configuration descriptor, cached at
    /// construction. `None` when the characteristic has no CCCD; every use
    /// below handles that case.
    cccd: Option<Descriptor>,
    names: NameTable,
    changed_callback: Option<CharacteristicChangedCallback>,
}

impl<'a> CharacteristicView<'a> {
    /// Wraps `characteristic` and issues the initial request sequence
    /// against `service`.
    ///
    /// For a valid characteristic this enables notifications and/or
    /// indications on the CCCD (both writes go out when both property bits
    /// are set; they target the same descriptor, so the indication write is
    /// the configuration that sticks), then queues a read of the CCCD and a
    /// read of the characteristic value. An unbound characteristic issues
    /// nothing. All requests are fire-and-forget; see [`GattService`].
    pub fn new(characteristic: Characteristic, service: &'a dyn GattService) -> Self {
        let cccd = characteristic
            .descriptor(Uuid::from_u16(CLIENT_CHAR_CONFIG_UUID))
            .cloned();
        let view = CharacteristicView {
            characteristic,
            service,
            cccd,
            names: NameTable::default(),
            changed_callback: None,
        };
        view.request_initial_state();
        view
    }

    fn request_initial_state(&self) {
        if !self.characteristic.is_valid() {
            debug!("Characteristic is unbound, skipping initial requests");
            return;
        }

        let properties = self.characteristic.properties;
        match &self.cccd {
            Some(cccd) => {
                if properties.can_notify() {
                    debug!("Enabling notifications: Handle=0x{:04x}", cccd.handle);
                    self.service.write_descriptor(cccd, &CCC_ENABLE_NOTIFICATION);
                }
                if properties.can_indicate() {
                    debug!("Enabling indications: Handle=0x{:04x}", cccd.handle);
                    self.service.write_descriptor(cccd, &CCC_ENABLE_INDICATION);
                }
                self.service.read_descriptor(cccd);
            }
            None => {
                if properties.can_notify() || properties.can_indicate() {
                    warn!(
                        "Characteristic {} supports notify/indicate but has no CCCD",
                        self.characteristic.uuid
                    );
                }
            }
        }
        self.service.read_characteristic(&self.characteristic);
    }

    /// Re-queues the CCCD read and the characteristic read, the same pair
    /// construction issues. Call this to ask the stack for fresh state; the
    /// display accessors themselves never touch the service. No-op for an
    /// unbound characteristic.
    pub fn refresh(&self) {
        if !self.characteristic.is_valid() {
            return;
        }
        trace!(
            "Refreshing characteristic: Handle=0x{:04x}",
            self.characteristic.handle
        );
        if let Some(cccd) = &self.cccd {
            self.service.read_descriptor(cccd);
        }
        self.service.read_characteristic(&self.characteristic);
    }

    /// Replaces the wrapped characteristic with a fresh snapshot and invokes
    /// the changed callback.
    ///
    /// This is the single mutation path, used both when the stack reports a
    /// new value and when the caller rebinds the view. It issues no requests
    /// and keeps the construction-time CCCD cache.
    pub fn set_characteristic(&mut self, characteristic: Characteristic) {
        self.characteristic = characteristic;
        if let Some(callback) = &self.changed_callback {
            callback(&self.characteristic);
        }
    }

    /// Registers the observer invoked by [`set_characteristic`], replacing
    /// any previous one.
    ///
    /// [`set_characteristic`]: Self::set_characteristic
    pub fn set_changed_callback(&mut self, callback: CharacteristicChangedCallback) {
        self.changed_callback = Some(callback);
    }

    /// Replaces the fallback name table.
    pub fn set_name_table(&mut self, names: NameTable) {
        self.names = names;
    }

    /// Display name of the characteristic.
    ///
    /// Falls through declared name, then the first Characteristic User
    /// Description descriptor, then the name table, then "Unknown".
    pub fn name(&self) -> String {
        if let Some(name) = &self.characteristic.name {
            if !name.is_empty() {
                return name.clone();
            }
        }

        for descriptor in &self.characteristic.descriptors {
            if descriptor.uuid == Uuid::from_u16(CHAR_USER_DESC_UUID) {
                let name = String::from_utf8_lossy(&descriptor.value);
                if !name.is_empty() {
                    return name.into_owned();
                }
                // Present but empty, fall through to the table
                break;
            }
        }

        match self.names.lookup(&self.characteristic.uuid) {
            Some(name) => name.to_string(),
            None => "Unknown".to_string(),
        }
    }

    /// Characteristic UUID, in the shortest form it narrows to: `0x` plus
    /// lowercase hex for a 16- or 32-bit SIG alias, the full hyphenated
    /// string otherwise.
    pub fn uuid(&self) -> String {
        display_uuid(&self.characteristic.uuid)
    }

    /// Current characteristic value as display text.
    ///
    /// A non-empty value renders each byte as its signed decimal with a
    /// trailing comma, `[65, 66]` as `"65,66,"`. An empty value renders a
    /// three-line diagnostic block instead: the CCCD UUID tagged `(d_uuid)`,
    /// the CCCD payload in hex tagged `(d_val)` and the owning service UUID
    /// tagged `(srv_uuid)`. Without a CCCD the first two lines show the nil
    /// UUID and an empty payload.
    pub fn value(&self) -> String {
        let data = &self.characteristic.value;

        if data.is_empty() {
            let (cccd_uuid, cccd_value) = match &self.cccd {
                Some(cccd) => (cccd.uuid, cccd.value.as_slice()),
                None => (Uuid::NIL, &[][..]),
            };

            let mut result = display_uuid(&cccd_uuid);
            result.push_str("(d_uuid)\n");
            result.push_str(&hex::encode(cccd_value));
            result.push_str(" (d_val)\n");
            // The service UUID always renders in full, never narrowed
            result.push_str(&self.service.service_uuid().to_string());
            result.push_str("(srv_uuid)\n");
            return result;
        }

        let mut result = String::new();
        for byte in data {
            result.push_str(&(*byte as i8).to_string());
            result.push(',');
        }
        result
    }

    /// Attribute handle as `0x` plus lowercase hex, `26` as `"0x1a"`.
    pub fn handle(&self) -> String {
        format!("0x{:x}", self.characteristic.handle)
    }

    /// Property bits as a parenthesized, space-separated list of flag names
    /// in fixed order: `READ | NOTIFY` renders as `"( Read Notify )"`.
    pub fn permission(&self) -> String {
        let properties = self.characteristic.properties;
        let mut labels = Vec::new();
        for (flag, label) in PROPERTY_LABELS {
            if properties.contains(flag) {
                labels.push(label);
            }
        }
        format!("( {} )", labels.join(" "))
    }

    /// An independent handle to the wrapped characteristic.
    pub fn characteristic(&self) -> Characteristic {
        self.characteristic.clone()
    }
}

impl fmt::Debug for CharacteristicView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacteristicView")
            .field("characteristic", &self.characteristic)
            .field("cccd", &self.cccd)
            .field("has_changed_callback", &self.changed_callback.is_some())
            .finish()
    }
}

/// Shortest display form of a UUID: 16-bit alias, else 32-bit alias, else
/// the full hyphenated string.
fn display_uuid(uuid: &Uuid) -> String {
    if let Some(alias) = uuid.as_u16() {
        format!("0x{:x}", alias)
    } else if let Some(alias) = uuid.as_u32() {
        format!("0x{:x}", alias)
    } else {
        uuid.to_string()
    }
}
