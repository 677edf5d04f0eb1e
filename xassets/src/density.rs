/// Android screen density bucket.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// Resource directory for this bucket, e.g. `drawable-hdpi`.
    pub fn res_dir(self, prefix: &str) -> String {
        format!("{}-{}", prefix, self)
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Mdpi => write!(f, "mdpi"),
            Self::Hdpi => write!(f, "hdpi"),
            Self::Xhdpi => write!(f, "xhdpi"),
            Self::Xxhdpi => write!(f, "xxhdpi"),
            Self::Xxxhdpi => write!(f, "xxxhdpi"),
        }
    }
}

/// Target `(width, height)` per bucket, in generation order.
pub type SizeTable = &'static [(Density, (u32, u32))];

pub const HEADER_SIZES: SizeTable = &[
    (Density::Hdpi, (194, 72)),
    (Density::Mdpi, (129, 48)),
    (Density::Xhdpi, (258, 96)),
    (Density::Xxhdpi, (387, 144)),
    (Density::Xxxhdpi, (516, 192)),
];

pub const ICON_SIZES: SizeTable = &[
    (Density::Hdpi, (162, 162)),
    (Density::Mdpi, (108, 108)),
    (Density::Xhdpi, (216, 216)),
    (Density::Xxhdpi, (324, 324)),
    (Density::Xxxhdpi, (432, 432)),
];
