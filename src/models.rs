//! Device model tables for the supported TES IP cores
//!
//! One [`PlatformData`] record per IP core the driver matches via its
//! device tree compatible string. The records mirror the driver's
//! platform data and never change at runtime.

use serde::{Deserialize, Serialize};

/// Static configuration for one IP core model compatible with the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformData {
    /// Device tree compatible string matched by the driver
    pub compatible: &'static str,
    /// The name of the device created in /dev/
    pub fs_dev_name: &'static str,
    /// The id of the version register in hardware
    pub version_reg: u32,
    /// The expected value of that register
    pub version_reg_expected: u32,
    /// Mask for the relevant bits of the version register
    pub version_reg_mask: u32,
    /// The id of the IRQ status register
    pub irq_status_reg: u32,
    /// The name of the irq for that device
    pub irq_name: &'static str,
}

/// Outcome of comparing a raw version register value against a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersionCheck {
    /// Masked value equals the expected value
    Match,
    /// Masked value differs; carries the raw register value
    Mismatch(u32),
    /// The model carries no mask/expected pair, so nothing can be verified
    Unchecked,
}

impl PlatformData {
    /// Compare a raw version register value against this model
    ///
    /// A model with a zero mask has no usable version signature and
    /// yields [`VersionCheck::Unchecked`], never a pass or fail.
    pub fn check_version(&self, raw: u32) -> VersionCheck {
        if self.version_reg_mask == 0 {
            return VersionCheck::Unchecked;
        }
        if raw & self.version_reg_mask == self.version_reg_expected & self.version_reg_mask {
            VersionCheck::Match
        } else {
            VersionCheck::Mismatch(raw)
        }
    }
}

/// CDC display controller
#[cfg(feature = "cdc")]
pub static GENIP_CDC_PDATA: PlatformData = PlatformData {
    compatible: "tes,cdc-2.1",
    fs_dev_name: "cdc",
    irq_name: "cdc_irq",
    version_reg: 0,
    version_reg_mask: 0xffffff00,
    version_reg_expected: 0x00040000,
    irq_status_reg: 0, // TODO IRQ status reg
};

/// DHD
#[cfg(feature = "dhd")]
pub static GENIP_DHD_PDATA: PlatformData = PlatformData {
    compatible: "tes,dhd-1.0",
    fs_dev_name: "dhd",
    irq_name: "dhd_irq",
    version_reg: 0,
    // TODO: reg mask and expected value
    version_reg_mask: 0,
    version_reg_expected: 0,
    irq_status_reg: 0, // TODO IRQ status reg
};

/// WARP
#[cfg(feature = "warp")]
pub static GENIP_WARP_PDATA: PlatformData = PlatformData {
    compatible: "tes,warp-1.0",
    fs_dev_name: "warp",
    irq_name: "warp_irq",
    version_reg: 0x0,
    // TODO: reg mask and expected value
    version_reg_mask: 0,
    version_reg_expected: 0,
    irq_status_reg: 0x11,
};

/// D2D drawing engine
#[cfg(feature = "d2d")]
pub static GENIP_D2D_PDATA: PlatformData = PlatformData {
    compatible: "tes,d2d-1.0",
    fs_dev_name: "d2d",
    irq_name: "d2d_irq",
    version_reg: 0,
    // TODO: reg mask and expected value
    version_reg_mask: 0,
    version_reg_expected: 0,
    irq_status_reg: 0, // TODO IRQ status reg
};

/// Load all enabled model records
pub fn platform_models() -> Vec<&'static PlatformData> {
    let mut models: Vec<&'static PlatformData> = Vec::new();

    #[cfg(feature = "cdc")]
    models.push(&GENIP_CDC_PDATA);
    #[cfg(feature = "dhd")]
    models.push(&GENIP_DHD_PDATA);
    #[cfg(feature = "warp")]
    models.push(&GENIP_WARP_PDATA);
    #[cfg(feature = "d2d")]
    models.push(&GENIP_D2D_PDATA);

    models
}

/// Look a model up by its device tree compatible string
pub fn find_by_compatible(compatible: &str) -> Option<&'static PlatformData> {
    platform_models()
        .into_iter()
        .find(|m| m.compatible == compatible)
}

/// Look a model up by the /dev/ name the driver registers for it
pub fn find_by_dev_name(fs_dev_name: &str) -> Option<&'static PlatformData> {
    platform_models()
        .into_iter()
        .find(|m| m.fs_dev_name == fs_dev_name)
}
