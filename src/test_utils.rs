//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the glue layer
//! on the host without hardware access or a real stmmac framework.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::boxed::Box;
use std::collections::HashMap;
use std::rc::Rc;
use std::vec::Vec;

use crate::driver::config::{PhyInterface, PlatData, StmmacResources};
use crate::platform::{BspHooks, StmmacPlatform};
use crate::register::RegisterIo;
use crate::register::ctl::CTL_BLOCK_SIZE;

// =============================================================================
// Mock Control Block
// =============================================================================

/// One recorded register access: (offset, value)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegAccess {
    Read(usize, u32),
    Write(usize, u32),
}

#[derive(Debug, Default)]
struct BlockState {
    /// Register values: offset -> value
    registers: HashMap<usize, u32>,
    /// Every access in program order
    log: Vec<RegAccess>,
}

/// Mock register window for testing the control block sequences
///
/// Clones share the same registers and log, so a test can keep one handle
/// while another is moved into the driver.
///
/// # Example
///
/// ```ignore
/// let block = MockControlBlock::new();
/// block.set_register(GMAC_SW_CONFIG_REG, 0xFFFF_FFF8);
///
/// let mut regs = ControlRegs::new(block.clone());
/// regs.assert_reset();
/// assert_eq!(block.accesses(), [RegAccess::Write(0, 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct MockControlBlock {
    state: Rc<RefCell<BlockState>>,
    size: usize,
}

impl Default for MockControlBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl MockControlBlock {
    /// Create a new mock control block with every register reading 0
    pub fn new() -> Self {
        Self {
            state: Rc::default(),
            size: CTL_BLOCK_SIZE,
        }
    }

    /// Report a mapping of `size` bytes instead of the full control block
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Preload a register value (not logged)
    pub fn set_register(&self, offset: usize, value: u32) {
        self.state.borrow_mut().registers.insert(offset, value);
    }

    /// Get the current value of a register, `None` if never set or written
    pub fn get_register(&self, offset: usize) -> Option<u32> {
        self.state.borrow().registers.get(&offset).copied()
    }

    /// All accesses made so far, in order
    pub fn accesses(&self) -> Vec<RegAccess> {
        self.state.borrow().log.clone()
    }

    /// Only the writes made so far, as (offset, value)
    pub fn writes(&self) -> Vec<(usize, u32)> {
        self.state
            .borrow()
            .log
            .iter()
            .filter_map(|a| match *a {
                RegAccess::Write(offset, value) => Some((offset, value)),
                RegAccess::Read(..) => None,
            })
            .collect()
    }

    /// Clear the access log, keeping register values
    pub fn clear_log(&self) {
        self.state.borrow_mut().log.clear();
    }
}

impl RegisterIo for MockControlBlock {
    fn read32(&self, offset: usize) -> u32 {
        let mut state = self.state.borrow_mut();
        let value = state.registers.get(&offset).copied().unwrap_or(0);
        state.log.push(RegAccess::Read(offset, value));
        value
    }

    fn write32(&mut self, offset: usize, value: u32) {
        let mut state = self.state.borrow_mut();
        state.log.push(RegAccess::Write(offset, value));
        state.registers.insert(offset, value);
    }

    fn size(&self) -> usize {
        self.size
    }
}

// =============================================================================
// Mock stmmac Framework
// =============================================================================

/// Error type of the mock framework
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// A negative errno-style code
    Code(i32),
    /// The installed init hook reported failure
    InitFailed,
}

/// Stand-in for the framework's power-management table
#[derive(Debug)]
pub struct MockPmOps {
    pub name: &'static str,
}

pub static MOCK_PM_OPS: MockPmOps = MockPmOps {
    name: "stmmac_pltfr_pm_ops",
};

/// Object-safe view of installed hooks
trait InstalledHooks {
    fn run_init(&mut self) -> bool;
    fn run_exit(&mut self);
}

impl<H: BspHooks> InstalledHooks for H {
    fn run_init(&mut self) -> bool {
        BspHooks::init(self).is_ok()
    }

    fn run_exit(&mut self) {
        BspHooks::exit(self);
    }
}

/// Mock stmmac platform framework for one device
///
/// Mirrors the common stmmac platform probe: the installed `init` hook runs
/// before the (simulated) MAC probe, `exit` runs if that probe fails, on
/// remove and on suspend, and `init` runs again on resume.
pub struct MockPlatform {
    phy_interface: PhyInterface,
    ctl_block: Option<MockControlBlock>,
    ioremap_fails: bool,
    alloc_fails: bool,
    resources_error: Option<MockError>,
    config_error: Option<MockError>,
    probe_error: Option<MockError>,
    ioremap_calls: Vec<usize>,
    hooks: Option<Box<dyn InstalledHooks>>,
    init_calls: usize,
    probed_plat: Option<PlatData>,
}

impl MockPlatform {
    /// A device whose firmware requests `phy_interface` and that has no
    /// control block resource
    pub fn new(phy_interface: PhyInterface) -> Self {
        Self {
            phy_interface,
            ctl_block: None,
            ioremap_fails: false,
            alloc_fails: false,
            resources_error: None,
            config_error: None,
            probe_error: None,
            ioremap_calls: Vec::new(),
            hooks: None,
            init_calls: 0,
            probed_plat: None,
        }
    }

    /// Provide `block` as memory resource 1
    pub fn with_ctl_block(mut self, block: MockControlBlock) -> Self {
        self.ctl_block = Some(block);
        self
    }

    /// Make every mapping attempt fail
    pub fn with_ioremap_failure(mut self) -> Self {
        self.ioremap_fails = true;
        self
    }

    /// Make device-managed allocation fail
    pub fn with_alloc_failure(mut self) -> Self {
        self.alloc_fails = true;
        self
    }

    pub fn with_resources_error(mut self, err: MockError) -> Self {
        self.resources_error = Some(err);
        self
    }

    pub fn with_config_error(mut self, err: MockError) -> Self {
        self.config_error = Some(err);
        self
    }

    pub fn with_probe_error(mut self, err: MockError) -> Self {
        self.probe_error = Some(err);
        self
    }

    /// Resource indices the driver asked to map
    pub fn ioremap_calls(&self) -> Vec<usize> {
        self.ioremap_calls.clone()
    }

    /// Whether hooks are currently installed
    pub fn has_hooks(&self) -> bool {
        self.hooks.is_some()
    }

    /// How many times the init hook has run
    pub fn init_calls(&self) -> usize {
        self.init_calls
    }

    /// Whether the common probe routine was entered
    pub fn common_probe_called(&self) -> bool {
        self.probed_plat.is_some()
    }

    /// Configuration handed to the common probe routine
    pub fn probed_plat(&self) -> Option<PlatData> {
        self.probed_plat
    }

    /// Simulate device removal
    pub fn remove(&mut self) {
        if let Some(mut hooks) = self.hooks.take() {
            hooks.run_exit();
        }
    }

    /// Simulate system suspend
    pub fn suspend(&mut self) {
        if let Some(hooks) = self.hooks.as_mut() {
            hooks.run_exit();
        }
    }

    /// Simulate system resume
    pub fn resume(&mut self) -> Result<(), MockError> {
        let hooks = self.hooks.as_mut().ok_or(MockError::Code(-19))?;
        self.init_calls += 1;
        if hooks.run_init() {
            Ok(())
        } else {
            Err(MockError::InitFailed)
        }
    }
}

impl StmmacPlatform for MockPlatform {
    type Error = MockError;
    type Region = MockControlBlock;
    type Priv<T> = Box<T>;
    type PmOps = MockPmOps;

    fn get_platform_resources(&mut self) -> Result<StmmacResources, MockError> {
        if let Some(err) = self.resources_error {
            return Err(err);
        }
        Ok(StmmacResources {
            addr: 0x1000_0000,
            irq: 32,
            ..StmmacResources::default()
        })
    }

    fn probe_config_dt(&mut self, _res: &StmmacResources) -> Result<PlatData, MockError> {
        if let Some(err) = self.config_error {
            return Err(err);
        }
        Ok(PlatData::new().with_phy_interface(self.phy_interface))
    }

    fn ioremap_resource(&mut self, index: usize) -> Option<MockControlBlock> {
        self.ioremap_calls.push(index);
        if self.ioremap_fails || index != 1 {
            return None;
        }
        self.ctl_block.clone()
    }

    fn alloc_priv<T>(&mut self, value: T) -> Option<Box<T>> {
        if self.alloc_fails {
            None
        } else {
            Some(Box::new(value))
        }
    }

    fn pltfr_probe<H: BspHooks + 'static>(
        &mut self,
        plat: PlatData,
        _res: StmmacResources,
        bsp_priv: Box<H>,
    ) -> Result<(), MockError> {
        self.probed_plat = Some(plat);

        let mut hooks: Box<dyn InstalledHooks> = bsp_priv;
        self.init_calls += 1;
        if !hooks.run_init() {
            return Err(MockError::InitFailed);
        }

        if let Some(err) = self.probe_error {
            hooks.run_exit();
            return Err(err);
        }

        self.hooks = Some(hooks);
        Ok(())
    }

    fn pm_ops() -> &'static MockPmOps {
        &MOCK_PM_OPS
    }
}

// =============================================================================
// Test Assertions
// =============================================================================

/// Assert that a register was written with a specific value
#[macro_export]
macro_rules! assert_reg_written {
    ($block:expr, $offset:expr, $value:expr) => {
        let writes = $block.writes();
        assert!(
            writes.iter().any(|w| w.0 == $offset && w.1 == $value),
            "Expected write to offset {:#x} with value {:#010x}, but got: {:?}",
            $offset,
            $value,
            writes
        );
    };
}

#[cfg(test)]
mod tests {
    use std::vec;

    use super::*;

    struct CountingHooks {
        inits: Rc<RefCell<u32>>,
        exits: Rc<RefCell<u32>>,
        fail_init: bool,
    }

    impl BspHooks for CountingHooks {
        type Error = ();

        fn init(&mut self) -> Result<(), ()> {
            *self.inits.borrow_mut() += 1;
            if self.fail_init {
                Err(())
            } else {
                Ok(())
            }
        }

        fn exit(&mut self) {
            *self.exits.borrow_mut() += 1;
        }
    }

    fn counting(fail_init: bool) -> (CountingHooks, Rc<RefCell<u32>>, Rc<RefCell<u32>>) {
        let inits = Rc::new(RefCell::new(0));
        let exits = Rc::new(RefCell::new(0));
        let hooks = CountingHooks {
            inits: inits.clone(),
            exits: exits.clone(),
            fail_init,
        };
        (hooks, inits, exits)
    }

    #[test]
    fn mock_block_read_write() {
        let mut block = MockControlBlock::new();

        // Initially reads 0
        assert_eq!(block.read32(4), 0);

        block.set_register(4, 0x1234);
        assert_eq!(block.read32(4), 0x1234);

        block.write32(4, 0x5678);
        assert_eq!(block.get_register(4), Some(0x5678));

        assert_eq!(
            block.accesses(),
            vec![
                RegAccess::Read(4, 0),
                RegAccess::Read(4, 0x1234),
                RegAccess::Write(4, 0x5678),
            ]
        );
        assert_eq!(block.writes(), vec![(4, 0x5678)]);
        crate::assert_reg_written!(block, 4, 0x5678);
    }

    #[test]
    fn mock_block_size() {
        assert_eq!(MockControlBlock::new().size(), CTL_BLOCK_SIZE);
        assert_eq!(MockControlBlock::new().with_size(4).size(), 4);
    }

    #[test]
    fn mock_block_clones_share_state() {
        let block = MockControlBlock::new();
        let mut other = block.clone();

        other.write32(0, 1);
        assert_eq!(block.get_register(0), Some(1));

        block.clear_log();
        assert!(other.accesses().is_empty());
        assert_eq!(other.get_register(0), Some(1));
    }

    #[test]
    fn mock_platform_runs_init_then_keeps_hooks() {
        let (hooks, inits, exits) = counting(false);
        let mut pdev = MockPlatform::new(PhyInterface::Rgmii);

        pdev.pltfr_probe::<CountingHooks>(
            PlatData::new(),
            StmmacResources::default(),
            Box::new(hooks),
        )
        .unwrap();
        assert_eq!(*inits.borrow(), 1);
        assert!(pdev.has_hooks());

        pdev.remove();
        assert_eq!(*exits.borrow(), 1);
        assert!(!pdev.has_hooks());
    }

    #[test]
    fn mock_platform_reports_failed_init() {
        let (hooks, _, exits) = counting(true);
        let mut pdev = MockPlatform::new(PhyInterface::Rgmii);

        let err = pdev
            .pltfr_probe::<CountingHooks>(
                PlatData::new(),
                StmmacResources::default(),
                Box::new(hooks),
            )
            .unwrap_err();
        assert_eq!(err, MockError::InitFailed);
        assert_eq!(*exits.borrow(), 0);
        assert!(!pdev.has_hooks());
    }

    #[test]
    fn mock_platform_unwinds_on_probe_error() {
        let (hooks, inits, exits) = counting(false);
        let mut pdev =
            MockPlatform::new(PhyInterface::Rgmii).with_probe_error(MockError::Code(-12));

        let err = pdev
            .pltfr_probe::<CountingHooks>(
                PlatData::new(),
                StmmacResources::default(),
                Box::new(hooks),
            )
            .unwrap_err();
        assert_eq!(err, MockError::Code(-12));
        assert_eq!(*inits.borrow(), 1);
        assert_eq!(*exits.borrow(), 1);
    }

    #[test]
    fn mock_platform_only_maps_resource_one() {
        let mut pdev =
            MockPlatform::new(PhyInterface::Rgmii).with_ctl_block(MockControlBlock::new());

        assert!(pdev.ioremap_resource(0).is_none());
        assert!(pdev.ioremap_resource(1).is_some());
        assert_eq!(pdev.ioremap_calls(), vec![0, 1]);
    }

    #[test]
    fn resume_without_probe_fails() {
        let mut pdev = MockPlatform::new(PhyInterface::Rgmii);
        assert_eq!(pdev.resume(), Err(MockError::Code(-19)));
        assert_eq!(pdev.init_calls(), 0);
    }
}
