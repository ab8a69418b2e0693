//! Anarion GMAC glue state and lifecycle hooks

use core::convert::Infallible;

use crate::driver::config::PlatData;
use crate::error::{Error, GlueError, GlueResult};
use crate::platform::{BspHooks, StmmacPlatform};
use crate::register::RegisterIo;
use crate::register::ctl::{
    CTL_BLOCK_RESOURCE_INDEX, CTL_BLOCK_SIZE, ControlRegs, merge_intf_sel,
};

/// Per-device glue state
///
/// Owns the mapped control block for as long as the device is attached, and
/// the interface selector that [`init`](BspHooks::init) programs into it.
/// The only way to obtain one is [`AnarionGmac::configure`]:
///
/// ```compile_fail
/// use anarion_dwmac::{AnarionGmac, MmioRegion};
///
/// let region = unsafe { MmioRegion::new(0x4000_0000, 8) };
/// let gmac = AnarionGmac::new(region);
/// ```
#[derive(Debug)]
pub struct AnarionGmac<R> {
    ctl_block: ControlRegs<R>,
    phy_intf_sel: u32,
}

impl<R: RegisterIo> AnarionGmac<R> {
    /// Wrap a mapped control block with no interface selected yet
    pub(crate) fn new(ctl_block: R) -> Self {
        Self {
            ctl_block: ControlRegs::new(ctl_block),
            phy_intf_sel: 0,
        }
    }

    /// Interface selector written to the software configuration register
    pub fn phy_intf_sel(&self) -> u32 {
        self.phy_intf_sel
    }

    /// The mapped control block
    pub fn ctl_block(&self) -> &R {
        self.ctl_block.io()
    }

    /// Map the control block, allocate glue state and resolve the interface
    /// selector for `plat_dat`'s PHY mode.
    ///
    /// # Errors
    ///
    /// - [`GlueError::ResourceUnavailable`] if the control block cannot be mapped
    /// - [`GlueError::OutOfMemory`] if device-managed storage is exhausted
    /// - [`GlueError::UnsupportedConfiguration`] for any non-RGMII mode
    pub fn configure<P>(
        pdev: &mut P,
        plat_dat: &PlatData,
    ) -> Result<P::Priv<Self>, Error<P::Error>>
    where
        P: StmmacPlatform<Region = R>,
    {
        let ctl_block = Self::map_ctl_block(pdev)?;

        let mut gmac = pdev
            .alloc_priv(Self::new(ctl_block))
            .ok_or(GlueError::OutOfMemory)?;

        let mode = plat_dat.phy_interface;
        let Some(sel) = mode.intf_sel() else {
            #[cfg(feature = "defmt")]
            defmt::error!("anarion: unsupported phy-mode ({})", mode);
            return Err(GlueError::UnsupportedConfiguration(mode).into());
        };
        gmac.phy_intf_sel = sel;

        Ok(gmac)
    }

    fn map_ctl_block<P>(pdev: &mut P) -> GlueResult<R>
    where
        P: StmmacPlatform<Region = R>,
    {
        let Some(ctl_block) = pdev.ioremap_resource(CTL_BLOCK_RESOURCE_INDEX) else {
            #[cfg(feature = "defmt")]
            defmt::error!("anarion: cannot get reset region");
            return Err(GlueError::ResourceUnavailable);
        };

        if ctl_block.size() < CTL_BLOCK_SIZE {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "anarion: reset region too small ({=usize} bytes)",
                ctl_block.size()
            );
            return Err(GlueError::ResourceUnavailable);
        }

        Ok(ctl_block)
    }
}

impl<R: RegisterIo> BspHooks for AnarionGmac<R> {
    type Error = Infallible;

    /// Hold the MAC in reset, select the PHY interface, then release reset
    fn init(&mut self) -> Result<(), Infallible> {
        self.ctl_block.assert_reset();

        let sw_config = self.ctl_block.sw_config();
        let updated = merge_intf_sel(sw_config, self.phy_intf_sel);
        self.ctl_block.set_sw_config(updated);

        #[cfg(feature = "defmt")]
        defmt::debug!("anarion: sw_config {:#010x} -> {:#010x}", sw_config, updated);

        self.ctl_block.release_reset();
        Ok(())
    }

    /// Leave the MAC held in reset
    fn exit(&mut self) {
        self.ctl_block.assert_reset();
    }
}
