#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    Africa,
    Americas,
    Asia,
    Europe,
}

impl Continent {
    pub const ALL: [Self; 4] = [Self::Africa, Self::Americas, Self::Asia, Self::Europe];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Africa => "africa",
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "africa" => Some(Self::Africa),
            "americas" => Some(Self::Americas),
            "asia" => Some(Self::Asia),
            "europe" => Some(Self::Europe),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Americas => "Americas",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
        }
    }
}
