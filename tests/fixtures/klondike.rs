// @generated by locgen. Do not edit by hand.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    EnGb,
    SvSe,
    RuRu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl Locale {
    /// Resolve an ISO code by its language subtag; unknown codes map to `Locale::EnGb`.
    pub fn from_iso(code: &str) -> Locale {
        let language = code.split(['-', '_']).next().unwrap_or(code);
        match language.to_ascii_lowercase().as_str() {
            "en" => Locale::EnGb,
            "sv" => Locale::SvSe,
            "ru" => Locale::RuRu,
            _ => Locale::EnGb,
        }
    }

    #[allow(unused_variables)]
    pub fn plural_category(self, quantity: i64) -> PluralCategory {
        let n: u64 = quantity.unsigned_abs();
        let i: u64 = n.to_string().len() as u64;
        let v: u64 = 0;
        let w: u64 = 0;
        match self {
            Locale::EnGb | Locale::SvSe => {
                if i == 0 && v == 0 {
                    return PluralCategory::One;
                }
                PluralCategory::Other
            }
            Locale::RuRu => {
                if v == 0 && i % 10 == 1 && i % 100 != 11 {
                    return PluralCategory::One;
                }
                if v == 0 && (2..=4).contains(&(i % 10)) && !(12..=14).contains(&(i % 100)) {
                    return PluralCategory::Few;
                }
                if v == 0 && (i % 10 == 0 || (5..=9).contains(&(i % 10)) || (11..=14).contains(&(i % 100))) {
                    return PluralCategory::Many;
                }
                PluralCategory::Other
            }
        }
    }
}

pub mod klondike {
    use super::*;

    /// `button_name` (at most 20 characters)
    pub fn button_name(locale: Locale) -> String {
        match locale {
            Locale::EnGb => String::from("Start"),
            Locale::SvSe => String::from("Starta"),
            Locale::RuRu => self::button_name(Locale::EnGb),
        }
    }

    /// `bananas`
    pub fn bananas(count: i64, locale: Locale) -> String {
        match locale {
            Locale::EnGb => match locale.plural_category(count) {
                PluralCategory::One => String::from("One banana"),
                PluralCategory::Other => format!("{} bananas", count),
                PluralCategory::Zero | PluralCategory::Two | PluralCategory::Few | PluralCategory::Many => format!("{} bananas", count),
            },
            Locale::RuRu => match locale.plural_category(count) {
                PluralCategory::One => format!("{} банан", count),
                PluralCategory::Few => format!("{} банана", count),
                PluralCategory::Many => format!("{} бананов", count),
                PluralCategory::Zero | PluralCategory::Two | PluralCategory::Other => self::bananas(count, Locale::EnGb),
            },
            Locale::SvSe => self::bananas(count, Locale::EnGb),
        }
    }

    pub mod game {
        use super::*;

        /// `game.score`
        pub fn score(points: i64, locale: Locale) -> String {
            match locale {
                Locale::EnGb => format!("Score: {}", points),
                Locale::RuRu => format!("Счёт: {}", points),
                Locale::SvSe => self::score(points, Locale::EnGb),
            }
        }

        /// `game.player_won`
        pub fn player_won(player: &str, amount: f64, locale: Locale) -> String {
            match locale {
                Locale::EnGb => format!("{} won {} coins", player, amount),
                Locale::SvSe => format!("{} vann {} mynt", player, amount),
                Locale::RuRu => self::player_won(player, amount, Locale::EnGb),
            }
        }
    }
}
