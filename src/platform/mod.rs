//! Host Framework Interface
//!
//! The glue layer never brings the MAC up itself. It plugs into a generic
//! stmmac platform framework owned by the host OS, which is described here
//! as two traits:
//!
//! - [`StmmacPlatform`]: what the framework offers a glue driver during
//!   probe (resources, parsed configuration, mapping, device-managed
//!   storage, and the common probe routine)
//! - [`BspHooks`]: what a glue driver hands back to the framework to be
//!   called around MAC bring-up and teardown
//!
//! # Hook Ordering
//!
//! The framework calls [`BspHooks::init`] before the MAC is brought up and
//! again on resume, and [`BspHooks::exit`] on teardown and on suspend. The
//! framework guarantees the two are never invoked concurrently for the same
//! device.

use core::ops::DerefMut;

use crate::driver::config::{PlatData, StmmacResources};
use crate::register::RegisterIo;

// =============================================================================
// Glue Hooks
// =============================================================================

/// Board-support callbacks installed into the stmmac framework
pub trait BspHooks {
    /// Error type returned by [`init`](Self::init)
    type Error;

    /// Prepare the platform for MAC bring-up
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Undo [`init`](Self::init) when the MAC goes down
    fn exit(&mut self);
}

// =============================================================================
// Host Framework
// =============================================================================

/// The stmmac platform framework as seen from one device being probed
pub trait StmmacPlatform {
    /// Framework error type, propagated unchanged by the glue layer
    type Error;

    /// A mapped memory resource of the device
    type Region: RegisterIo + 'static;

    /// Device-managed storage, released by the framework on detach
    type Priv<T>: DerefMut<Target = T>;

    /// Power-management operation table
    type PmOps: 'static;

    /// Collect the MAC's register base and interrupts
    fn get_platform_resources(&mut self) -> Result<StmmacResources, Self::Error>;

    /// Parse the generic stmmac firmware properties
    fn probe_config_dt(&mut self, res: &StmmacResources) -> Result<PlatData, Self::Error>;

    /// Map the device's memory resource number `index`
    fn ioremap_resource(&mut self, index: usize) -> Option<Self::Region>;

    /// Move `value` into device-managed storage
    fn alloc_priv<T>(&mut self, value: T) -> Option<Self::Priv<T>>;

    /// Run the common stmmac probe with `bsp_priv` installed as the glue hooks
    ///
    /// The framework owns `bsp_priv` from here on and decides how a failed
    /// [`BspHooks::init`] is reported.
    fn pltfr_probe<H: BspHooks + 'static>(
        &mut self,
        plat: PlatData,
        res: StmmacResources,
        bsp_priv: Self::Priv<H>,
    ) -> Result<(), Self::Error>;

    /// Generic stmmac power-management table (suspend calls `exit`, resume
    /// calls `init`)
    fn pm_ops() -> &'static Self::PmOps;
}

// =============================================================================
// Driver Registration
// =============================================================================

/// One entry of a firmware match table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OfDeviceId {
    /// Firmware `compatible` string
    pub compatible: &'static str,
}

/// Platform driver descriptor registered with the host
#[derive(Debug)]
pub struct PlatformDriver<Pm: 'static> {
    /// Driver name
    pub name: &'static str,
    /// Firmware match table
    pub of_match_table: &'static [OfDeviceId],
    /// Power-management operations, passed through from the framework
    pub pm: &'static Pm,
}

impl<Pm> PlatformDriver<Pm> {
    /// Whether any of a device's `compatible` strings is in the match table
    pub fn matches<'a, I>(&self, compatibles: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        of_match_device(self.of_match_table, compatibles).is_some()
    }
}

/// Find the first match-table entry that one of `compatibles` names
///
/// Firmware lists compatibles from most to least specific, so the device's
/// order takes priority over the table's.
pub fn of_match_device<'a, I>(
    table: &'static [OfDeviceId],
    compatibles: I,
) -> Option<&'static OfDeviceId>
where
    I: IntoIterator<Item = &'a str>,
{
    compatibles
        .into_iter()
        .find_map(|compat| table.iter().find(|id| id.compatible == compat))
}
