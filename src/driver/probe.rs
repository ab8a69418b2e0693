//! Platform driver entry points
//!
//! [`probe`] is what the host calls when a device matching
//! [`ANARION_DWMAC_MATCH`] is found. It gathers the generic stmmac
//! resources, sets up the glue state and hands everything to the common
//! stmmac probe with the Anarion hooks installed.

use crate::driver::glue::AnarionGmac;
use crate::error::{Error, Result};
use crate::platform::{OfDeviceId, PlatformDriver, StmmacPlatform};

/// Platform driver name
pub const DRIVER_NAME: &str = "anarion-dwmac";

/// Firmware `compatible` string of the Anarion GMAC
pub const ANARION_GMAC_COMPATIBLE: &str = "adaptrum,anarion-gmac";

/// Firmware match table
pub static ANARION_DWMAC_MATCH: [OfDeviceId; 1] = [OfDeviceId {
    compatible: ANARION_GMAC_COMPATIBLE,
}];

/// Probe one Anarion GMAC
///
/// Any error from the framework's own calls is returned unchanged as
/// [`Error::Platform`]. Glue failures abort the probe before the common
/// stmmac probe runs, so the hooks are never installed.
pub fn probe<P: StmmacPlatform>(pdev: &mut P) -> Result<(), P::Error> {
    let stmmac_res = pdev.get_platform_resources().map_err(Error::Platform)?;

    let plat_dat = pdev
        .probe_config_dt(&stmmac_res)
        .map_err(Error::Platform)?;

    let gmac = AnarionGmac::configure(pdev, &plat_dat)?;

    pdev.pltfr_probe::<AnarionGmac<P::Region>>(plat_dat, stmmac_res, gmac)
        .map_err(Error::Platform)
}

/// Driver descriptor to register with the host, carrying the framework's
/// power-management table untouched
pub fn driver<P: StmmacPlatform>() -> PlatformDriver<P::PmOps> {
    PlatformDriver {
        name: DRIVER_NAME,
        of_match_table: &ANARION_DWMAC_MATCH,
        pm: P::pm_ops(),
    }
}
