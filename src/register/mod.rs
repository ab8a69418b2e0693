//! Memory-mapped register access for the Anarion control block
//!
//! The control block is mapped by the host framework, so unlike the MAC's
//! own register file its base address is only known at probe time. Access
//! goes through the [`RegisterIo`] trait; [`MmioRegion`] is the volatile
//! implementation used on hardware.

pub mod ctl;

pub use ctl::ControlRegs;

// =============================================================================
// Register I/O Trait
// =============================================================================

/// 32-bit register access relative to the start of a mapped region
pub trait RegisterIo {
    /// Read the 32-bit word at `offset` bytes from the region base
    fn read32(&self, offset: usize) -> u32;

    /// Write a 32-bit word at `offset` bytes from the region base
    fn write32(&mut self, offset: usize, value: u32);

    /// Size of the mapped region in bytes
    fn size(&self) -> usize;
}

/// Read a 32-bit register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn read_reg(addr: usize) -> u32 {
    unsafe { core::ptr::read_volatile(addr as *const u32) }
}

/// Write a 32-bit value to a register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn write_reg(addr: usize, value: u32) {
    unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
}

// =============================================================================
// MMIO Region
// =============================================================================

/// A mapped I/O memory window accessed with volatile loads and stores
#[derive(Debug)]
pub struct MmioRegion {
    base: usize,
    len: usize,
}

impl MmioRegion {
    /// Wrap an already-mapped region of `len` bytes starting at `base`
    ///
    /// # Safety
    /// `base` must be 4-byte aligned and `base..base + len` must stay mapped
    /// as device memory for as long as the returned value (or anything it is
    /// moved into) is alive. Nothing else may access the region meanwhile.
    pub const unsafe fn new(base: usize, len: usize) -> Self {
        Self { base, len }
    }

    /// Base address of the mapping
    pub fn base(&self) -> usize {
        self.base
    }

    /// Length of the mapping in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the mapping is zero-sized
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    fn addr(&self, offset: usize) -> usize {
        debug_assert!(offset % 4 == 0, "unaligned register offset {offset:#x}");
        debug_assert!(
            offset + 4 <= self.len,
            "register offset {offset:#x} outside {}-byte region",
            self.len
        );
        self.base + offset
    }
}

impl RegisterIo for MmioRegion {
    #[inline(always)]
    fn read32(&self, offset: usize) -> u32 {
        // SAFETY: constructor contract guarantees the window is mapped
        unsafe { read_reg(self.addr(offset)) }
    }

    #[inline(always)]
    fn write32(&mut self, offset: usize, value: u32) {
        // SAFETY: constructor contract guarantees the window is mapped
        unsafe { write_reg(self.addr(offset), value) };
    }

    fn size(&self) -> usize {
        self.len
    }
}

// =============================================================================
// Register Access Macros
// =============================================================================

/// Generate read/write accessor methods for a register in a block that
/// holds its [`RegisterIo`] in an `io` field.
///
/// # Example
/// ```ignore
/// impl<R: RegisterIo> ControlRegs<R> {
///     reg_rw!(sw_config, set_sw_config, GMAC_SW_CONFIG_REG,
///             "software configuration register");
/// }
/// ```
macro_rules! reg_rw {
    ($read_fn:ident, $write_fn:ident, $offset:expr, $doc:expr) => {
        #[doc = concat!("Read ", $doc)]
        #[inline(always)]
        pub fn $read_fn(&self) -> u32 {
            self.io.read32($offset)
        }

        #[doc = concat!("Write ", $doc)]
        #[inline(always)]
        pub fn $write_fn(&mut self, value: u32) {
            self.io.write32($offset, value);
        }
    };
}

/// Generate a pair of methods that write fixed values to a register.
macro_rules! reg_write_ops {
    ($set_fn:ident, $clear_fn:ident, $offset:expr, $set_val:expr, $clear_val:expr, $what:expr, $set_verb:expr, $clear_verb:expr) => {
        #[doc = concat!($set_verb, " ", $what)]
        #[inline(always)]
        pub fn $set_fn(&mut self) {
            self.io.write32($offset, $set_val);
        }

        #[doc = concat!($clear_verb, " ", $what)]
        #[inline(always)]
        pub fn $clear_fn(&mut self) {
            self.io.write32($offset, $clear_val);
        }
    };
}

pub(crate) use reg_rw;
pub(crate) use reg_write_ops;
