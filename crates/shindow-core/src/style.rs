//! Window decoration bitmasks and the pure functions that toggle them.
//!
//! Bit values mirror the Win32 `WS_*` and `WS_EX_*` constants so the
//! composition logic can be exercised without a real window.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// Window style bits (`GWL_STYLE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct WindowStyle(pub u32);

/// Extended window style bits (`GWL_EXSTYLE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ExtendedStyle(pub u32);

impl WindowStyle {
    pub const CAPTION: Self = Self(0x00C0_0000);
    pub const THICKFRAME: Self = Self(0x0004_0000);
    pub const MINIMIZEBOX: Self = Self(0x0002_0000);
    pub const MAXIMIZEBOX: Self = Self(0x0001_0000);
    pub const SYSMENU: Self = Self(0x0008_0000);
    /// Composite: caption, system menu, thick frame, minimize and maximize boxes.
    pub const OVERLAPPEDWINDOW: Self = Self(0x00CF_0000);

    /// Every bit removed when a window goes borderless.
    pub const DECORATIONS: Self = Self(
        Self::CAPTION.0
            | Self::THICKFRAME.0
            | Self::MINIMIZEBOX.0
            | Self::MAXIMIZEBOX.0
            | Self::SYSMENU.0,
    );

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl ExtendedStyle {
    pub const DLGMODALFRAME: Self = Self(0x0000_0001);
    pub const CLIENTEDGE: Self = Self(0x0000_0200);
    pub const STATICEDGE: Self = Self(0x0002_0000);

    /// The 3-D edge bits removed when a window goes borderless.
    pub const EDGES: Self = Self(Self::DLGMODALFRAME.0 | Self::CLIENTEDGE.0 | Self::STATICEDGE.0);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

macro_rules! impl_bit_ops {
    ($ty:ty) => {
        impl BitOr for $ty {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl BitAnd for $ty {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl Not for $ty {
            type Output = Self;
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        impl fmt::LowerHex for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerHex::fmt(&self.0, f)
            }
        }
    };
}

impl_bit_ops!(WindowStyle);
impl_bit_ops!(ExtendedStyle);

/// Strips caption, resizable frame, minimize/maximize boxes and system menu.
///
/// All other bits (visibility, child/popup flags, etc.) pass through.
pub fn compose_borderless_style(current: WindowStyle) -> WindowStyle {
    current & !WindowStyle::DECORATIONS
}

/// Strips the dialog-modal frame, client edge and static edge.
pub fn compose_borderless_ex_style(current: ExtendedStyle) -> ExtendedStyle {
    current & !ExtendedStyle::EDGES
}

/// Restores the standard overlapped-window decorations.
pub fn compose_bordered_style(current: WindowStyle) -> WindowStyle {
    current | WindowStyle::DECORATIONS | WindowStyle::OVERLAPPEDWINDOW
}

/// Restores the 3-D edge bits.
pub fn compose_bordered_ex_style(current: ExtendedStyle) -> ExtendedStyle {
    current | ExtendedStyle::EDGES
}

/// Returns true when no decoration or edge bit is present.
pub fn is_borderless(style: WindowStyle, ex_style: ExtendedStyle) -> bool {
    !style.intersects(WindowStyle::DECORATIONS) && !ex_style.intersects(ExtendedStyle::EDGES)
}
