use std::fmt;

/// The closed set of locales the generator knows how to dispatch on.
///
/// Generated code mirrors this enumeration one-to-one, so adding a variant
/// here is the only way to support a new language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Locale {
    EnGb,
    SvSe,
    RuRu,
}

impl Locale {
    /// Every supported locale, in declaration order.
    pub const ALL: [Locale; 3] = [Locale::EnGb, Locale::SvSe, Locale::RuRu];

    /// Fallback target for missing locales and plural categories.
    pub const BASELINE: Locale = Locale::EnGb;

    /// Recognize an ISO code by its primary language subtag.
    ///
    /// Region subtags are ignored: `en`, `en_US` and `en-GB` all resolve to
    /// [`Locale::EnGb`].
    pub fn recognize(iso_code: &str) -> Option<Locale> {
        let primary = iso_code.split(['-', '_']).next().unwrap_or(iso_code);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::EnGb),
            "sv" => Some(Locale::SvSe),
            "ru" => Some(Locale::RuRu),
            _ => None,
        }
    }

    /// Total mapping from any ISO code; unknown codes map to the baseline.
    pub fn from_iso(iso_code: &str) -> Locale {
        Self::recognize(iso_code).unwrap_or(Self::BASELINE)
    }

    pub fn is_baseline(self) -> bool {
        self == Self::BASELINE
    }

    /// Canonical identifier, as used in catalogs (`en_GB`).
    pub fn code(self) -> &'static str {
        match self {
            Locale::EnGb => "en_GB",
            Locale::SvSe => "sv_SE",
            Locale::RuRu => "ru_RU",
        }
    }

    /// Variant name in generated code.
    pub fn variant(self) -> &'static str {
        match self {
            Locale::EnGb => "EnGb",
            Locale::SvSe => "SvSe",
            Locale::RuRu => "RuRu",
        }
    }

    /// Primary language subtag.
    pub fn language(self) -> &'static str {
        match self {
            Locale::EnGb => "en",
            Locale::SvSe => "sv",
            Locale::RuRu => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
