//! Read a single hardware register from the first discovered IP core
//!
//! Usage: cargo run --example read_register -- [offset]

use genip::IpcoreDevice;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let offset = std::env::args()
        .nth(1)
        .map(|s| {
            let s = s.trim_start_matches("0x");
            u64::from_str_radix(s, 16)
        })
        .transpose()?
        .unwrap_or(0);

    let path = genip::find_device().ok_or("no IP core device found")?;
    let dev = IpcoreDevice::open(&path)?;

    let value = dev.reg_read(offset)?;
    println!("{}: reg[0x{:x}] = 0x{:08x}", path, offset, value);

    Ok(())
}
