//! Minimal IP core info CLI tool

fn main() {
    match genip::get_ipcore_info() {
        Ok(info) => println!("{} 0x{:x}+0x{:x}", info.model, info.base_phys, info.span),
        Err(_) => std::process::exit(1),
    }
}
