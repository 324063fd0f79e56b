//! Print the physical register window of every discovered IP core

use genip::IpcoreDevice;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let devices = genip::find_devices();
    if devices.is_empty() {
        eprintln!("no IP core devices found");
        std::process::exit(1);
    }

    for path in devices {
        let dev = IpcoreDevice::open(&path)?;
        let settings = dev.settings()?;
        println!(
            "{}: base_phys=0x{:x} span=0x{:x}",
            path, settings.base_phys, settings.span
        );
    }

    Ok(())
}
