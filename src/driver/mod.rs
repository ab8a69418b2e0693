//! Anarion DWMAC glue driver
//!
//! - [`config`] - PHY interface modes and the data exchanged with stmmac
//! - [`glue`] - Per-device glue state and the init/exit hooks
//! - [`probe`] - Probe entry point and driver registration data
//!
//! # Example
//!
//! ```ignore
//! use anarion_dwmac::driver::{probe, driver};
//!
//! // Hand the descriptor to the host's platform bus...
//! let drv = driver::<MyStmmacPlatform>();
//!
//! // ...which calls probe() for each matching device
//! probe(&mut pdev)?;
//! ```

// Submodules
pub mod config;
pub mod glue;
pub mod probe;

// Re-exports for convenience
pub use config::{PhyInterface, PlatData, StmmacResources};
pub use glue::AnarionGmac;
pub use probe::{
    ANARION_DWMAC_MATCH, ANARION_GMAC_COMPATIBLE, DRIVER_NAME, driver, probe,
};
