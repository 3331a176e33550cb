//! Well-known GATT attribute values

use crate::uuid::Uuid;

// Descriptor type UUIDs (16-bit SIG aliases)
pub const CHAR_USER_DESC_UUID: u16 = 0x2901;
pub const CLIENT_CHAR_CONFIG_UUID: u16 = 0x2902;

// Client Characteristic Configuration payloads. The CCCD value is a u16
// bitfield (notifications bit 0, indications bit 1) written little-endian.
pub const CCC_ENABLE_NOTIFICATION: [u8; 2] = [0x01, 0x00];
pub const CCC_ENABLE_INDICATION: [u8; 2] = [0x02, 0x00];

// Nordic UART Service data characteristics, the default entries of the
// fallback name table
pub const NORDIC_UART_TX_UUID: Uuid = Uuid::from_u128(0x6e400002_b5a3_f393_e0a9_e50e24dcca9e);
pub const NORDIC_UART_RX_UUID: Uuid = Uuid::from_u128(0x6e400003_b5a3_f393_e0a9_e50e24dcca9e);
