//! Shared ioctl contract of the `tes-ipcore` kernel driver
//!
//! Everything in this module is binary layout agreement with the kernel
//! side: command codes, wire structures and the char device identity
//! constants. The structures are `#[repr(C)]` and must match the driver
//! bit for bit.

use std::mem::size_of;

// asm-generic ioctl encoding: nr | type | size | dir, low to high
const IOC_NR_SHIFT: u32 = 0;
const IOC_TYPE_SHIFT: u32 = 8;
const IOC_SIZE_SHIFT: u32 = 16;
const IOC_DIR_SHIFT: u32 = 30;

const IOC_NR_MASK: u32 = 0xFF;
const IOC_TYPE_MASK: u32 = 0xFF;
const IOC_SIZE_MASK: u32 = 0x3FFF;
const IOC_DIR_MASK: u32 = 0x03;

/// Direction bit: no argument transfer
pub const IOC_NONE: u32 = 0;
/// Direction bit: userspace writes, kernel reads
pub const IOC_WRITE: u32 = 1;
/// Direction bit: kernel writes, userspace reads
pub const IOC_READ: u32 = 2;

const fn ioc(dir: u32, ty: u32, nr: u32, size: usize) -> u32 {
    (dir << IOC_DIR_SHIFT)
        | (ty << IOC_TYPE_SHIFT)
        | (nr << IOC_NR_SHIFT)
        | ((size as u32) << IOC_SIZE_SHIFT)
}

/// Build an `_IOR` command code for argument type `T`
pub const fn ior<T>(ty: u32, nr: u32) -> u32 {
    ioc(IOC_READ, ty, nr, size_of::<T>())
}

/// Build an `_IOW` command code for argument type `T`
pub const fn iow<T>(ty: u32, nr: u32) -> u32 {
    ioc(IOC_WRITE, ty, nr, size_of::<T>())
}

/// Build an `_IOWR` command code for argument type `T`
pub const fn iowr<T>(ty: u32, nr: u32) -> u32 {
    ioc(IOC_READ | IOC_WRITE, ty, nr, size_of::<T>())
}

/// Extract the direction bits from a command code
pub const fn ioc_dir(cmd: u32) -> u32 {
    (cmd >> IOC_DIR_SHIFT) & IOC_DIR_MASK
}

/// Extract the type/magic byte from a command code
pub const fn ioc_type(cmd: u32) -> u32 {
    (cmd >> IOC_TYPE_SHIFT) & IOC_TYPE_MASK
}

/// Extract the command number from a command code
pub const fn ioc_nr(cmd: u32) -> u32 {
    (cmd >> IOC_NR_SHIFT) & IOC_NR_MASK
}

/// Extract the argument size from a command code
pub const fn ioc_size(cmd: u32) -> usize {
    ((cmd >> IOC_SIZE_SHIFT) & IOC_SIZE_MASK) as usize
}

/// ioctl type byte; 't' is rarely used by other drivers
pub const GENIP_IOCTL_TYPE: u32 = b't' as u32;

/// Command number: copy settings from device tree to userspace
pub const GENIP_IOCTL_NR_SETTINGS: u32 = 0x01;
/// Command number: write a register
pub const GENIP_IOCTL_NR_REG_WRITE: u32 = 0x02;
/// Command number: read a register
pub const GENIP_IOCTL_NR_REG_READ: u32 = 0x03;

/// argument = pointer to a [`GenipSettings`] the driver fills in
pub const GENIP_IOCTL_GET_SETTINGS: u32 =
    ior::<GenipSettings>(GENIP_IOCTL_TYPE, GENIP_IOCTL_NR_SETTINGS);
/// argument = pointer to a [`GenipRegAccess`] with offset and value set
pub const GENIP_IOCTL_W: u32 = iow::<GenipRegAccess>(GENIP_IOCTL_TYPE, GENIP_IOCTL_NR_REG_WRITE);
/// argument = pointer to a [`GenipRegAccess`]; the driver overwrites `value`
pub const GENIP_IOCTL_R: u32 = iowr::<GenipRegAccess>(GENIP_IOCTL_TYPE, GENIP_IOCTL_NR_REG_READ);

/// Basic driver name
pub const GENIP_DRIVER_NAME: &str = "tes-ipcore";
/// Number of maximum supported IPs (total)
pub const GENIP_MAX_DEVICES: usize = 15;
/// Device class name
pub const GENIP_DEVCLASS_NAME: &str = "tes-ipcore-class";
/// Chrdev region name
pub const GENIP_CHRDEV_NAME: &str = "tes-ipcores";

/// Physical resource information
///
/// Supplied by the device tree and copied to userspace by the
/// `GENIP_IOCTL_GET_SETTINGS` command. Both fields are `size_t` on the
/// kernel side, so they are word-sized here as well.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenipSettings {
    /// Start address of the registers
    pub base_phys: usize,
    /// Size of the register area
    pub span: usize,
}

/// Register read/write request
///
/// The same layout serves both directions; which field is input and which
/// is output is decided by the command code carrying it. The offset is a
/// `u64` instead of a pointer so the layout is the same for 32 and 64 bit
/// builds on either side of the boundary.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenipRegAccess {
    /// in, register ID to read from / write to
    pub offset: u64,
    /// in/out, register value written or read back
    pub value: u32,
}
