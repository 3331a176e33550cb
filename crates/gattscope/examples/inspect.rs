use gattscope::gatt::constants::{CHAR_USER_DESC_UUID, CLIENT_CHAR_CONFIG_UUID};
use gattscope::{
    Characteristic, CharacteristicProperties, CharacteristicView, Descriptor, GattService, Uuid,
};

/// Stand-in for a platform BLE stack: prints every request the view queues.
struct ConsoleService {
    uuid: Uuid,
}

impl GattService for ConsoleService {
    fn write_descriptor(&self, descriptor: &Descriptor, value: &[u8]) {
        println!(
            "  -> write descriptor 0x{:04x}: {:02x?}",
            descriptor.handle, value
        );
    }

    fn read_descriptor(&self, descriptor: &Descriptor) {
        println!("  -> read descriptor 0x{:04x}", descriptor.handle);
    }

    fn read_characteristic(&self, characteristic: &Characteristic) {
        println!("  -> read characteristic 0x{:04x}", characteristic.handle);
    }

    fn service_uuid(&self) -> Uuid {
        self.uuid
    }
}

fn main() {
    // Heart Rate service with its notify-only measurement characteristic,
    // as a discovery pass would hand it over
    let service = ConsoleService {
        uuid: Uuid::from_u16(0x180d),
    };

    let measurement = Characteristic {
        uuid: Uuid::from_u16(0x2a37),
        handle: 0x0012,
        name: None,
        properties: CharacteristicProperties::READ | CharacteristicProperties::NOTIFY,
        value: Vec::new(),
        descriptors: vec![
            Descriptor {
                uuid: Uuid::from_u16(CLIENT_CHAR_CONFIG_UUID),
                handle: 0x0013,
                value: vec![0x00, 0x00],
            },
            Descriptor {
                uuid: Uuid::from_u16(CHAR_USER_DESC_UUID),
                handle: 0x0014,
                value: b"Heart Rate Measurement".to_vec(),
            },
        ],
    };

    println!("Wrapping characteristic, initial requests go out now:");
    let mut view = CharacteristicView::new(measurement, &service);

    println!();
    println!("Name:       {}", view.name());
    println!("UUID:       {}", view.uuid());
    println!("Handle:     {}", view.handle());
    println!("Properties: {}", view.permission());
    // No value has arrived yet, so this prints the diagnostic block
    println!("Value:\n{}", view.value());

    // Install an observer, then hand the view a fresh snapshot the way a
    // stack's notification path would
    view.set_changed_callback(Box::new(|characteristic| {
        println!("  (changed) raw value: {:02x?}", characteristic.value);
    }));

    let mut updated = view.characteristic();
    updated.value = vec![0x00, 72];
    println!("Applying a notified value:");
    view.set_characteristic(updated);
    println!("Value:      {}", view.value());

    println!();
    println!("Asking the stack for fresh state:");
    view.refresh();
}
