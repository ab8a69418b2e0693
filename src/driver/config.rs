//! Configuration types shared with the host stmmac framework

use crate::register::ctl::GMAC_CONFIG_INTF_RGMII;

/// PHY interface mode, as named by the firmware `phy-mode` property
///
/// Covers every mode the stmmac framework can hand to a glue layer; the
/// Anarion control block only implements the RGMII family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterface {
    /// No interface mode given
    #[default]
    NotApplicable,
    /// Internal PHY
    Internal,
    /// Media Independent Interface
    Mii,
    /// Gigabit Media Independent Interface
    Gmii,
    /// Serial Gigabit Media Independent Interface
    Sgmii,
    /// Ten Bit Interface
    Tbi,
    /// Reverse Media Independent Interface
    RevMii,
    /// Reduced Media Independent Interface
    Rmii,
    /// Reverse Reduced Media Independent Interface
    RevRmii,
    /// RGMII, no internal delays
    Rgmii,
    /// RGMII with internal RX and TX delays
    RgmiiId,
    /// RGMII with internal RX delay only
    RgmiiRxid,
    /// RGMII with internal TX delay only
    RgmiiTxid,
    /// Reduced Ten Bit Interface
    Rtbi,
    /// Serial Media Independent Interface
    Smii,
    /// 10 Gigabit Media Independent Interface
    Xgmii,
    /// 40 Gigabit Media Independent Interface
    Xlgmii,
    /// Multimedia over Coax
    Moca,
    /// Penta SGMII
    Psgmii,
    /// Quad SGMII
    Qsgmii,
    /// Turbo RGMII
    Trgmii,
    /// 100BASE-X
    Base100X,
    /// 1000BASE-X
    Base1000X,
    /// 1000BASE-KX
    Base1000Kx,
    /// 2500BASE-X
    Base2500X,
    /// 5GBASE-R
    Base5gR,
    /// Reduced XAUI
    Rxaui,
    /// 10 Gigabit Attachment Unit Interface
    Xaui,
    /// 10GBASE-KR
    Base10gKr,
    /// 10GBASE-R
    Base10gR,
    /// 25GBASE-R
    Base25gR,
    /// Universal Serial 10GE MII
    Usxgmii,
    /// Quad Universal SGMII
    Qusgmii,
    /// 10G quad-port XGMII
    Qxgmii10g,
}

impl PhyInterface {
    /// Every interface mode, in firmware enumeration order
    pub const ALL: [PhyInterface; 34] = [
        PhyInterface::NotApplicable,
        PhyInterface::Internal,
        PhyInterface::Mii,
        PhyInterface::Gmii,
        PhyInterface::Sgmii,
        PhyInterface::Tbi,
        PhyInterface::RevMii,
        PhyInterface::Rmii,
        PhyInterface::RevRmii,
        PhyInterface::Rgmii,
        PhyInterface::RgmiiId,
        PhyInterface::RgmiiRxid,
        PhyInterface::RgmiiTxid,
        PhyInterface::Rtbi,
        PhyInterface::Smii,
        PhyInterface::Xgmii,
        PhyInterface::Xlgmii,
        PhyInterface::Moca,
        PhyInterface::Psgmii,
        PhyInterface::Qsgmii,
        PhyInterface::Trgmii,
        PhyInterface::Base100X,
        PhyInterface::Base1000X,
        PhyInterface::Base1000Kx,
        PhyInterface::Base2500X,
        PhyInterface::Base5gR,
        PhyInterface::Rxaui,
        PhyInterface::Xaui,
        PhyInterface::Base10gKr,
        PhyInterface::Base10gR,
        PhyInterface::Base25gR,
        PhyInterface::Usxgmii,
        PhyInterface::Qusgmii,
        PhyInterface::Qxgmii10g,
    ];

    /// Firmware name of the mode (the `phy-mode` string)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PhyInterface::NotApplicable => "",
            PhyInterface::Internal => "internal",
            PhyInterface::Mii => "mii",
            PhyInterface::Gmii => "gmii",
            PhyInterface::Sgmii => "sgmii",
            PhyInterface::Tbi => "tbi",
            PhyInterface::RevMii => "rev-mii",
            PhyInterface::Rmii => "rmii",
            PhyInterface::RevRmii => "rev-rmii",
            PhyInterface::Rgmii => "rgmii",
            PhyInterface::RgmiiId => "rgmii-id",
            PhyInterface::RgmiiRxid => "rgmii-rxid",
            PhyInterface::RgmiiTxid => "rgmii-txid",
            PhyInterface::Rtbi => "rtbi",
            PhyInterface::Smii => "smii",
            PhyInterface::Xgmii => "xgmii",
            PhyInterface::Xlgmii => "xlgmii",
            PhyInterface::Moca => "moca",
            PhyInterface::Psgmii => "psgmii",
            PhyInterface::Qsgmii => "qsgmii",
            PhyInterface::Trgmii => "trgmii",
            PhyInterface::Base100X => "100base-x",
            PhyInterface::Base1000X => "1000base-x",
            PhyInterface::Base1000Kx => "1000base-kx",
            PhyInterface::Base2500X => "2500base-x",
            PhyInterface::Base5gR => "5gbase-r",
            PhyInterface::Rxaui => "rxaui",
            PhyInterface::Xaui => "xaui",
            PhyInterface::Base10gKr => "10gbase-kr",
            PhyInterface::Base10gR => "10gbase-r",
            PhyInterface::Base25gR => "25gbase-r",
            PhyInterface::Usxgmii => "usxgmii",
            PhyInterface::Qusgmii => "qusgmii",
            PhyInterface::Qxgmii10g => "10g-qxgmii",
        }
    }

    /// Parse a firmware `phy-mode` string
    ///
    /// Matching is case-insensitive, as device-tree parsers accept it.
    /// Returns `None` for unknown names; the empty string is not a valid
    /// `phy-mode` and also yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
    }

    /// Whether this mode belongs to the RGMII family (any delay variant)
    #[must_use]
    pub const fn is_rgmii(&self) -> bool {
        matches!(
            self,
            PhyInterface::Rgmii
                | PhyInterface::RgmiiId
                | PhyInterface::RgmiiRxid
                | PhyInterface::RgmiiTxid
        )
    }

    /// Control block interface selector for this mode, if the Anarion
    /// mux supports it
    #[must_use]
    pub const fn intf_sel(&self) -> Option<u32> {
        if self.is_rgmii() {
            Some(GMAC_CONFIG_INTF_RGMII)
        } else {
            None
        }
    }
}

impl core::fmt::Display for PhyInterface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hardware resources the stmmac framework collected for the MAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StmmacResources {
    /// Mapped MAC register base address
    pub addr: usize,
    /// MAC address from firmware, if one was provided
    pub mac: Option<[u8; 6]>,
    /// Main MAC interrupt
    pub irq: u32,
    /// Wake-on-LAN interrupt, if separate from the main one
    pub wol_irq: Option<u32>,
    /// Low-power-idle interrupt
    pub lpi_irq: Option<u32>,
}

/// Platform configuration parsed from firmware by the stmmac framework
///
/// Only the parts the glue layer consumes are modelled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlatData {
    /// Requested PHY interface mode
    pub phy_interface: PhyInterface,
}

impl PlatData {
    /// Create a configuration with no interface mode set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phy_interface: PhyInterface::NotApplicable,
        }
    }

    /// Set the PHY interface mode
    #[must_use]
    pub const fn with_phy_interface(mut self, interface: PhyInterface) -> Self {
        self.phy_interface = interface;
        self
    }
}
