//! Bluetooth UUID value type.
//!
//! GATT attributes are identified by 128-bit UUIDs, but SIG-assigned ones are
//! almost always written in their 16-bit (or, rarely, 32-bit) alias form.
//! `Uuid` stores the full 128 bits and knows how to narrow itself back to an
//! alias when one exists.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The Bluetooth base UUID, "00000000-0000-1000-8000-00805f9b34fb", stored
/// little-endian. 16- and 32-bit aliases live in its top four bytes.
const BASE_UUID_BYTES: [u8; 16] = [
    0xFB, 0x34, 0x9B, 0x5F, 0x80, 0x00, 0x00, 0x80, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Offset of the alias value within the little-endian byte layout.
const ALIAS_OFFSET: usize = 12;

/// A 128-bit Bluetooth UUID.
///
/// Internally always little-endian, matching the order UUIDs travel in ATT
/// PDUs. Display and parsing use the standard big-endian hyphenated text form.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid {
    bytes: [u8; 16],
}

impl Uuid {
    /// The all-zero UUID. Never SIG-assigned, so it never narrows to an
    /// alias; used as the display stand-in for an absent attribute.
    pub const NIL: Uuid = Uuid { bytes: [0u8; 16] };

    /// Creates a UUID from 16 little-endian bytes.
    pub const fn from_bytes_le(bytes: [u8; 16]) -> Self {
        Uuid { bytes }
    }

    /// Creates a UUID from 16 big-endian bytes (the order of the text form).
    pub fn from_bytes_be(mut bytes: [u8; 16]) -> Self {
        bytes.reverse();
        Uuid { bytes }
    }

    /// Creates a UUID from a 16-bit SIG alias: `alias * 2^96 + BASE_UUID`.
    pub const fn from_u16(alias: u16) -> Self {
        let mut bytes = BASE_UUID_BYTES;
        bytes[ALIAS_OFFSET] = alias as u8;
        bytes[ALIAS_OFFSET + 1] = (alias >> 8) as u8;
        Uuid { bytes }
    }

    /// Creates a UUID from a 32-bit SIG alias.
    pub const fn from_u32(alias: u32) -> Self {
        let mut bytes = BASE_UUID_BYTES;
        bytes[ALIAS_OFFSET] = alias as u8;
        bytes[ALIAS_OFFSET + 1] = (alias >> 8) as u8;
        bytes[ALIAS_OFFSET + 2] = (alias >> 16) as u8;
        bytes[ALIAS_OFFSET + 3] = (alias >> 24) as u8;
        Uuid { bytes }
    }

    /// Creates a UUID from the full 128-bit value as written in the text
    /// form, i.e. `0x6e400002_b5a3_f393_e0a9_e50e24dcca9e` for the UUID
    /// "6e400002-b5a3-f393-e0a9-e50e24dcca9e".
    pub const fn from_u128(value: u128) -> Self {
        Uuid {
            bytes: value.to_le_bytes(),
        }
    }

    /// Tries to create a UUID from a little-endian byte slice, as UUIDs
    /// arrive inside ATT PDUs. Accepts 2 (16-bit alias), 4 (32-bit alias)
    /// or 16 bytes; any other length returns `None`.
    pub fn try_from_slice_le(slice: &[u8]) -> Option<Self> {
        match slice.len() {
            2 => Some(Uuid::from_u16(u16::from_le_bytes([slice[0], slice[1]]))),
            4 => Some(Uuid::from_u32(u32::from_le_bytes([
                slice[0], slice[1], slice[2], slice[3],
            ]))),
            16 => {
                let mut bytes = [0u8; 16];
                bytes.copy_from_slice(slice);
                Some(Uuid::from_bytes_le(bytes))
            }
            _ => None,
        }
    }

    /// Returns the 16 bytes in big-endian (text form) order.
    pub fn as_bytes_be(&self) -> [u8; 16] {
        let mut bytes = self.bytes;
        bytes.reverse();
        bytes
    }

    /// True when the UUID sits inside the Bluetooth base UUID.
    fn is_sig_assigned(&self) -> bool {
        self.bytes[0..ALIAS_OFFSET] == BASE_UUID_BYTES[0..ALIAS_OFFSET]
    }

    /// The 16-bit alias, when this UUID is a SIG-assigned 16-bit UUID.
    pub fn as_u16(&self) -> Option<u16> {
        if self.is_sig_assigned()
            && self.bytes[ALIAS_OFFSET + 2] == 0
            && self.bytes[ALIAS_OFFSET + 3] == 0
        {
            Some(u16::from_le_bytes([
                self.bytes[ALIAS_OFFSET],
                self.bytes[ALIAS_OFFSET + 1],
            ]))
        } else {
            None
        }
    }

    /// The 32-bit alias, when this UUID is SIG-assigned.
    pub fn as_u32(&self) -> Option<u32> {
        if self.is_sig_assigned() {
            Some(u32::from_le_bytes([
                self.bytes[ALIAS_OFFSET],
                self.bytes[ALIAS_OFFSET + 1],
                self.bytes[ALIAS_OFFSET + 2],
                self.bytes[ALIAS_OFFSET + 3],
            ]))
        } else {
            None
        }
    }
}

impl From<u16> for Uuid {
    fn from(alias: u16) -> Self {
        Uuid::from_u16(alias)
    }
}

impl From<u32> for Uuid {
    fn from(alias: u32) -> Self {
        Uuid::from_u32(alias)
    }
}

impl fmt::Display for Uuid {
    /// Standard hyphenated 8-4-4-4-12 form, lowercase, no braces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.as_bytes_be();
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
            b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]
        )
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Alias form when one exists, full form otherwise
        if let Some(alias) = self.as_u16() {
            write!(f, "Uuid(0x{:04x})", alias)
        } else if let Some(alias) = self.as_u32() {
            write!(f, "Uuid(0x{:08x})", alias)
        } else {
            write!(f, "Uuid({})", self)
        }
    }
}

/// Failure to parse a UUID from text.
#[derive(Debug, Error)]
pub enum UuidParseError {
    #[error("UUID text must contain 4, 8 or 32 hex digits, found {0}")]
    InvalidLength(usize),

    #[error("invalid hex in UUID text: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl FromStr for Uuid {
    type Err = UuidParseError;

    /// Parses "180d", "0x180d", "0000180d", full hyphenated text and the
    /// brace-wrapped variant some stacks print. Everything that is not a hex
    /// digit is stripped before the length decides the form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s
            .strip_prefix("0x")
            .unwrap_or(s)
            .chars()
            .filter(|c| c.is_ascii_hexdigit())
            .collect();

        match digits.len() {
            4 => {
                let mut alias = [0u8; 2];
                hex::decode_to_slice(&digits, &mut alias)?;
                Ok(Uuid::from_u16(u16::from_be_bytes(alias)))
            }
            8 => {
                let mut alias = [0u8; 4];
                hex::decode_to_slice(&digits, &mut alias)?;
                Ok(Uuid::from_u32(u32::from_be_bytes(alias)))
            }
            32 => {
                let mut bytes = [0u8; 16];
                hex::decode_to_slice(&digits, &mut bytes)?;
                Ok(Uuid::from_bytes_be(bytes))
            }
            n => Err(UuidParseError::InvalidLength(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_round_trips_through_base_uuid() {
        let heart_rate = Uuid::from_u16(0x180d);
        assert_eq!(heart_rate.as_u16(), Some(0x180d));
        assert_eq!(heart_rate.as_u32(), Some(0x180d));
        assert_eq!(
            heart_rate.to_string(),
            "0000180d-0000-1000-8000-00805f9b34fb"
        );

        let wide = Uuid::from_u32(0x1234_5678);
        assert_eq!(wide.as_u16(), None);
        assert_eq!(wide.as_u32(), Some(0x1234_5678));
    }

    #[test]
    fn vendor_uuid_never_narrows() {
        let nus_tx = Uuid::from_u128(0x6e400002_b5a3_f393_e0a9_e50e24dcca9e);
        assert_eq!(nus_tx.as_u16(), None);
        assert_eq!(nus_tx.as_u32(), None);
        assert_eq!(
            nus_tx.to_string(),
            "6e400002-b5a3-f393-e0a9-e50e24dcca9e"
        );
    }

    #[test]
    fn nil_is_not_sig_assigned() {
        assert_eq!(Uuid::NIL.as_u16(), None);
        assert_eq!(Uuid::NIL.as_u32(), None);
        assert_eq!(
            Uuid::NIL.to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(Uuid::default(), Uuid::NIL);
    }

    #[test]
    fn parses_short_full_and_braced_forms() {
        assert_eq!("180d".parse::<Uuid>().unwrap(), Uuid::from_u16(0x180d));
        assert_eq!("0x180d".parse::<Uuid>().unwrap(), Uuid::from_u16(0x180d));
        assert_eq!(
            "0000180d".parse::<Uuid>().unwrap(),
            Uuid::from_u32(0x180d)
        );
        assert_eq!(
            "6e400002-b5a3-f393-e0a9-e50e24dcca9e".parse::<Uuid>().unwrap(),
            Uuid::from_u128(0x6e400002_b5a3_f393_e0a9_e50e24dcca9e)
        );
        assert_eq!(
            "{0000180d-0000-1000-8000-00805f9b34fb}".parse::<Uuid>().unwrap(),
            Uuid::from_u16(0x180d)
        );
    }

    #[test]
    fn builds_from_wire_slices() {
        assert_eq!(
            Uuid::try_from_slice_le(&[0x0d, 0x18]),
            Some(Uuid::from_u16(0x180d))
        );
        assert_eq!(
            Uuid::try_from_slice_le(&[0x78, 0x56, 0x34, 0x12]),
            Some(Uuid::from_u32(0x1234_5678))
        );
        let full = Uuid::from_u128(0x6e400002_b5a3_f393_e0a9_e50e24dcca9e);
        assert_eq!(Uuid::try_from_slice_le(&full.bytes), Some(full));
        assert_eq!(Uuid::try_from_slice_le(&[0x0d, 0x18, 0x00]), None);
    }

    #[test]
    fn rejects_odd_lengths() {
        assert!(matches!(
            "180".parse::<Uuid>(),
            Err(UuidParseError::InvalidLength(3))
        ));
        assert!("".parse::<Uuid>().is_err());
    }

    #[test]
    fn debug_prefers_alias_form() {
        assert_eq!(format!("{:?}", Uuid::from_u16(0x2902)), "Uuid(0x2902)");
        assert_eq!(
            format!("{:?}", Uuid::from_u32(0xdead_beef)),
            "Uuid(0xdeadbeef)"
        );
    }
}
