//! Adaptrum Anarion DWMAC Glue Layer
//!
//! A `no_std`, `no_alloc` glue driver that adapts the generic Synopsys
//! DesignWare MAC (stmmac) platform driver to the Adaptrum Anarion SoC.
//!
//! The Anarion wraps its DWMAC core with a small vendor control block that
//! owns the MAC reset line and the PHY interface mux. This crate maps that
//! block, checks that the board asks for an RGMII PHY, and installs two hooks
//! into the host stmmac framework:
//!
//! - **init**: hold the MAC in reset, select RGMII, release reset
//! - **exit**: hold the MAC in reset
//!
//! Everything else (DMA, descriptor rings, MDIO, interrupts) belongs to the
//! generic stmmac driver.
//!
//! # Architecture
//!
//! 1. **Driver Layer** ([`driver`]): probe entry point, glue state, hooks
//! 2. **Platform Layer** ([`platform`]): traits the host stmmac framework implements
//! 3. **Register Layer** ([`register`]): control block layout and MMIO access
//!
//! # Features
//!
//! - `defmt`: Enable defmt logging and formatting for public types
//!
//! # Example
//!
//! ```ignore
//! use anarion_dwmac::{StmmacPlatform, driver, probe};
//!
//! struct HostDevice { /* ... */ }
//!
//! impl StmmacPlatform for HostDevice {
//!     type Error = i32;
//!     type Region = anarion_dwmac::MmioRegion;
//!     // ...
//! }
//!
//! // Register once
//! let drv = driver::<HostDevice>();
//! assert!(drv.matches(["adaptrum,anarion-gmac"]));
//!
//! // Per matching device
//! probe(&mut host_device)?;
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels mirror the [lints] table in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements,
    clippy::let_underscore_future
)]

pub mod driver;
pub mod error;
pub mod platform;
pub mod register;

// Testing utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use driver::config::{PhyInterface, PlatData, StmmacResources};
pub use driver::glue::AnarionGmac;
pub use driver::probe::{ANARION_GMAC_COMPATIBLE, DRIVER_NAME, driver, probe};
pub use error::{Error, GlueError, GlueResult, Result};
pub use platform::{BspHooks, OfDeviceId, PlatformDriver, StmmacPlatform};
pub use register::{MmioRegion, RegisterIo};
