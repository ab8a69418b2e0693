//! Anarion GMAC control block
//!
//! Vendor registers that sit beside the DWMAC core and control its reset
//! line and PHY interface mux. Layout:
//! - reset control (0x00): write 1 to hold the MAC in reset, 0 to release
//! - sw config     (0x04): bits 2:0 select the PHY interface, other bits
//!   are reserved and must be preserved

use super::{RegisterIo, reg_rw, reg_write_ops};

// =============================================================================
// Register Offsets
// =============================================================================

/// Reset control register offset
pub const GMAC_RESET_CONTROL_REG: usize = 0x00;
/// Software configuration register offset
pub const GMAC_SW_CONFIG_REG: usize = 0x04;

/// Platform resource index of the control block (index 0 is the MAC itself)
pub const CTL_BLOCK_RESOURCE_INDEX: usize = 1;
/// Smallest control block mapping that covers both registers
pub const CTL_BLOCK_SIZE: usize = 0x08;

// =============================================================================
// Reset Control (GMAC_RESET_CONTROL_REG @ 0x00)
// =============================================================================

/// Hold the MAC in reset
pub const GMAC_RESET_ASSERT: u32 = 1;
/// Release the MAC from reset
pub const GMAC_RESET_RELEASE: u32 = 0;

// =============================================================================
// Software Configuration (GMAC_SW_CONFIG_REG @ 0x04)
// =============================================================================

/// PHY interface select mask (bits 2:0)
pub const GMAC_CONFIG_INTF_SEL_MASK: u32 = 0x7;
/// PHY interface select value for the RGMII family
pub const GMAC_CONFIG_INTF_RGMII: u32 = 0x1;

// =============================================================================
// Control Register Block
// =============================================================================

/// Typed view over a mapped Anarion control block
#[derive(Debug)]
pub struct ControlRegs<R> {
    io: R,
}

impl<R: RegisterIo> ControlRegs<R> {
    /// Wrap a mapped control block
    pub fn new(io: R) -> Self {
        Self { io }
    }

    reg_write_ops!(
        assert_reset,
        release_reset,
        GMAC_RESET_CONTROL_REG,
        GMAC_RESET_ASSERT,
        GMAC_RESET_RELEASE,
        "the GMAC reset line",
        "Assert",
        "Release"
    );

    reg_rw!(
        sw_config,
        set_sw_config,
        GMAC_SW_CONFIG_REG,
        "software configuration register"
    );

    /// Borrow the underlying register I/O
    pub fn io(&self) -> &R {
        &self.io
    }
}

/// Merge an interface selector into a software configuration word,
/// preserving every bit outside the select field.
#[inline]
pub const fn merge_intf_sel(sw_config: u32, intf_sel: u32) -> u32 {
    (sw_config & !GMAC_CONFIG_INTF_SEL_MASK) | (intf_sel & GMAC_CONFIG_INTF_SEL_MASK)
}
