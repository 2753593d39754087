//! Named color palettes selectable with `theme <name>`.
//!
//! The interpreter only names a palette; the shell applies its colors.

use folio_types::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    Green,
    Purple,
    Blue,
    Amber,
    Solana,
}

impl Palette {
    pub const ALL: [Palette; 5] = [
        Palette::Green,
        Palette::Purple,
        Palette::Blue,
        Palette::Amber,
        Palette::Solana,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Amber => "amber",
            Self::Solana => "solana",
        }
    }

    /// Exact, already lower-cased name match.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// One-line description for the `theme` listing.
    pub fn description(self) -> &'static str {
        match self {
            Self::Green => "Vert terminal classique (defaut)",
            Self::Purple => "Violet cybersec",
            Self::Blue => "Bleu tech",
            Self::Amber => "Ambre retro",
            Self::Solana => "Violet/vert Solana",
        }
    }

    /// Prompt, input echo, and success color.
    pub fn terminal_green(self) -> Rgb {
        match self {
            Self::Green => Rgb::new(0x22, 0xc5, 0x5e),
            Self::Purple => Rgb::new(0xa8, 0x55, 0xf7),
            Self::Blue => Rgb::new(0x3b, 0x82, 0xf6),
            Self::Amber => Rgb::new(0xf5, 0x9e, 0x0b),
            Self::Solana => Rgb::new(0x14, 0xf1, 0x95),
        }
    }

    /// Header and banner color.
    pub fn accent_primary(self) -> Rgb {
        match self {
            Self::Green => Rgb::new(0xa8, 0x55, 0xf7),
            Self::Purple => Rgb::new(0xc0, 0x84, 0xfc),
            Self::Blue => Rgb::new(0x60, 0xa5, 0xfa),
            Self::Amber => Rgb::new(0xfb, 0xbf, 0x24),
            Self::Solana => Rgb::new(0x99, 0x45, 0xff),
        }
    }

    pub fn accent_secondary(self) -> Rgb {
        match self {
            Self::Green | Self::Purple | Self::Solana => Rgb::new(0x7c, 0x3a, 0xed),
            Self::Blue => Rgb::new(0x25, 0x63, 0xeb),
            Self::Amber => Rgb::new(0xd9, 0x77, 0x06),
        }
    }

    /// Comma-separated list of every palette name.
    pub fn names() -> String {
        Self::ALL.map(Palette::name).join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve() {
        for p in Palette::ALL {
            assert_eq!(Palette::from_name(p.name()), Some(p));
        }
        assert_eq!(Palette::from_name("neon"), None);
        assert_eq!(Palette::from_name("Green"), None);
    }

    #[test]
    fn names_listing() {
        assert_eq!(Palette::names(), "green, purple, blue, amber, solana");
    }

    #[test]
    fn default_is_green() {
        assert_eq!(Palette::default(), Palette::Green);
    }

    #[test]
    fn solana_colors() {
        assert_eq!(Palette::Solana.terminal_green().to_hex(), "#14f195");
        assert_eq!(Palette::Solana.accent_primary().to_hex(), "#9945ff");
        assert_eq!(Palette::Amber.accent_secondary().to_hex(), "#d97706");
    }
}
