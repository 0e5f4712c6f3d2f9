use bitflags::bitflags;

bitflags! {
    /// Static capabilities of a color format converter, fixed at registration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Capabilities: u8 {
        /// The converter can turn a color into text (used for copy).
        const SERIALIZE = 1 << 0;
        /// The converter can parse text into a color (used for paste).
        const DESERIALIZE = 1 << 1;

        const BOTH = Self::SERIALIZE.bits() | Self::DESERIALIZE.bits();
    }
}

impl Capabilities {
    #[must_use]
    pub const fn can_serialize(self) -> bool {
        self.contains(Self::SERIALIZE)
    }

    #[must_use]
    pub const fn can_deserialize(self) -> bool {
        self.contains(Self::DESERIALIZE)
    }
}
