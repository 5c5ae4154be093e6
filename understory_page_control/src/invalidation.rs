// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Refresh requests accumulated by [`PageControl`](crate::PageControl).

bitflags::bitflags! {
    /// Work the host must schedule after the control's state changed.
    ///
    /// Mutators only record flags; nothing is re-rendered synchronously. Hosts
    /// drain the accumulated set with
    /// [`PageControl::take_invalidation`](crate::PageControl::take_invalidation)
    /// and map each flag onto their framework's invalidation calls.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Invalidation: u8 {
        /// The dot list changed; visual dot elements must be recreated.
        const ELEMENTS = 0b0000_0001;
        /// Per-dot styles must be re-applied.
        const STYLE    = 0b0000_0010;
        /// Dot positions must be recomputed.
        const LAYOUT   = 0b0000_0100;
        /// The intrinsic size may have changed.
        const MEASURE  = 0b0000_1000;
    }
}

impl Invalidation {
    /// Flags raised when the active index moves.
    pub const INDEX: Self = Self::STYLE.union(Self::LAYOUT);

    /// Flags raised when the configuration is replaced.
    pub const CONFIGURATION: Self = Self::STYLE.union(Self::LAYOUT).union(Self::MEASURE);

    /// Flags raised when the dot list is replaced.
    pub const DOTS: Self = Self::all();
}

impl Default for Invalidation {
    fn default() -> Self {
        Self::empty()
    }
}
