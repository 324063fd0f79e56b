//! Command-line interface for genip

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use genip::{self, IpcoreDevice, VersionCheck};

#[derive(Parser)]
#[command(name = "genip")]
#[command(version = genip::VERSION)]
#[command(about = "Register access tool for TES IP core devices", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe IP cores and print structured reports
    Info {
        /// Specific device path (auto-detect if not specified)
        #[arg(short, long)]
        device: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Export the report(s) to a JSON file
        #[arg(long)]
        json_output: Option<String>,
    },

    /// Print the physical register window of a device
    Settings {
        /// Device path
        #[arg(short, long)]
        device: String,
    },

    /// Read a hardware register
    Read {
        /// Device path
        #[arg(short, long)]
        device: String,

        /// Register offset (decimal or 0x-prefixed hex)
        #[arg(short, long, value_parser = parse_u64)]
        offset: u64,
    },

    /// Write a hardware register
    Write {
        /// Device path
        #[arg(short, long)]
        device: String,

        /// Register offset (decimal or 0x-prefixed hex)
        #[arg(short, long, value_parser = parse_u64)]
        offset: u64,

        /// Value to write (decimal or 0x-prefixed hex)
        #[arg(short, long, value_parser = parse_u32)]
        value: u32,
    },

    /// List available IP core devices
    Devices,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_u64(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid number '{}': {}", s, e))
}

fn parse_u32(s: &str) -> Result<u32, String> {
    parse_u64(s)?
        .try_into()
        .map_err(|_| format!("'{}' does not fit in 32 bits", s))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Info { device, format, json_output } => {
            let reports = match device {
                Some(path) => vec![genip::get_ipcore_info_with_device(Some(path.as_str()))
                    .with_context(|| format!("probing {}", path))?],
                None => {
                    let reports = genip::probe_all();
                    if reports.is_empty() {
                        bail!("no IP core devices found (is the tes-ipcore driver loaded?)");
                    }
                    reports
                }
            };

            for info in &reports {
                match format {
                    OutputFormat::Text => print_info_text(info),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(info)?),
                }
            }

            if let Some(json_path) = json_output {
                for (i, info) in reports.iter().enumerate() {
                    let path = if reports.len() == 1 {
                        json_path.clone()
                    } else {
                        format!("{}.{}", json_path, i)
                    };
                    info.export_json(&path)?;
                    println!("\n✅ Report exported to: {}", path);
                }
            }
        }

        Commands::Settings { device } => {
            let dev = IpcoreDevice::open(device)?;
            let settings = dev.settings()?;
            println!("📐 Register window of {}:", device);
            println!("  base_phys: 0x{:x}", settings.base_phys);
            println!("  span:      0x{:x} ({} bytes)", settings.span, settings.span);
        }

        Commands::Read { device, offset } => {
            let dev = IpcoreDevice::open(device)?;
            let value = dev.reg_read(*offset)?;
            println!("0x{:08x}", value);
        }

        Commands::Write { device, offset, value } => {
            let dev = IpcoreDevice::open(device)?;
            dev.reg_write(*offset, *value)?;
            println!("reg[0x{:x}] <- 0x{:08x}", offset, value);
        }

        Commands::Devices => {
            let devices = genip::scan_devices();
            if devices.is_empty() {
                println!("❌ No IP core devices found.");
            } else {
                println!("📱 Found {} IP core device(s):", devices.len());
                for device in devices {
                    println!("  • {}", device);
                }
            }
        }

        Commands::Version => {
            println!("genip v{}", genip::version());
            println!("Register access tool for TES IP cores");
        }
    }

    Ok(())
}

fn print_info_text(info: &genip::IpcoreInfo) {
    println!("📊 IP Core Information:");
    println!("=======================");
    println!("Model: {}", info.model);
    println!("Compatible: {}", info.compatible);
    println!("Device: {}", info.device);
    println!("Register window: 0x{:x} (+0x{:x})", info.base_phys, info.span);

    if let Some(raw) = info.version_raw {
        println!("Version register: 0x{:08x}", raw);
    }

    match info.version_check {
        Some(VersionCheck::Match) => println!("Version check: ok"),
        Some(VersionCheck::Mismatch(raw)) => {
            println!("Version check: MISMATCH (read 0x{:08x})", raw)
        }
        Some(VersionCheck::Unchecked) => println!("Version check: no signature for this model"),
        None => println!("Version check: register not readable"),
    }

    println!("IRQ name: {}", info.irq_name);
}
