//! Simple example showing basic IP core information retrieval

use genip::{self, GenipError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📱 genip IP Core Information Example");
    println!("====================================\n");

    match genip::get_ipcore_info() {
        Ok(info) => {
            println!("✅ IP core found!");
            println!("  Model: {}", info.model);
            println!("  Compatible: {}", info.compatible);
            println!("  Device: {}", info.device);
            println!("  Registers: 0x{:x} (+0x{:x})", info.base_phys, info.span);

            if let Some(raw) = info.version_raw {
                println!("  Version register: 0x{:08x}", raw);
            }
        }
        Err(GenipError::NoDevice) => {
            println!("❌ No IP core device node found.");
            println!("   Is the tes-ipcore driver loaded?");
        }
        Err(e) => {
            println!("❌ Error: {}", e);
        }
    }

    Ok(())
}
