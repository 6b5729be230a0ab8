//! WMO weather code interpretation
//!
//! Open-Meteo reports conditions as WMO codes. Only the codes listed in
//! [`WeatherCondition::from_wmo_code`] are recognised; matching is exact,
//! so neighbouring codes inside a WMO range (e.g. 56, 80, 96) are `Unknown`.

use serde::{Deserialize, Serialize};

/// Weather condition for a recognised WMO code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky (WMO 0)
    ClearSky,
    /// Mainly clear (WMO 1)
    MainlyClear,
    /// Partly cloudy (WMO 2)
    PartlyCloudy,
    /// Overcast (WMO 3)
    Overcast,
    /// Fog (WMO 45)
    Fog,
    /// Depositing rime fog (WMO 48)
    DepositingRimeFog,
    /// Light drizzle (WMO 51)
    LightDrizzle,
    /// Moderate drizzle (WMO 53)
    ModerateDrizzle,
    /// Dense drizzle (WMO 55)
    DenseDrizzle,
    /// Slight rain (WMO 61)
    SlightRain,
    /// Moderate rain (WMO 63)
    ModerateRain,
    /// Heavy rain (WMO 65)
    HeavyRain,
    /// Slight snow (WMO 71)
    SlightSnow,
    /// Moderate snow (WMO 73)
    ModerateSnow,
    /// Heavy snow (WMO 75)
    HeavySnow,
    /// Thunderstorm (WMO 95)
    Thunderstorm,
    /// Any code not listed above
    Unknown,
}

impl WeatherCondition {
    /// Every recognised condition, in WMO code order
    pub const KNOWN: [Self; 16] = [
        Self::ClearSky,
        Self::MainlyClear,
        Self::PartlyCloudy,
        Self::Overcast,
        Self::Fog,
        Self::DepositingRimeFog,
        Self::LightDrizzle,
        Self::ModerateDrizzle,
        Self::DenseDrizzle,
        Self::SlightRain,
        Self::ModerateRain,
        Self::HeavyRain,
        Self::SlightSnow,
        Self::ModerateSnow,
        Self::HeavySnow,
        Self::Thunderstorm,
    ];

    /// Convert a WMO weather code to a `WeatherCondition`
    ///
    /// See: <https://open-meteo.com/en/docs> for the WMO code reference
    #[must_use]
    pub const fn from_wmo_code(code: i64) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 => Self::Fog,
            48 => Self::DepositingRimeFog,
            51 => Self::LightDrizzle,
            53 => Self::ModerateDrizzle,
            55 => Self::DenseDrizzle,
            61 => Self::SlightRain,
            63 => Self::ModerateRain,
            65 => Self::HeavyRain,
            71 => Self::SlightSnow,
            73 => Self::ModerateSnow,
            75 => Self::HeavySnow,
            95 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// The WMO code this condition was decoded from, `None` for `Unknown`
    #[must_use]
    pub const fn wmo_code(&self) -> Option<i64> {
        match self {
            Self::ClearSky => Some(0),
            Self::MainlyClear => Some(1),
            Self::PartlyCloudy => Some(2),
            Self::Overcast => Some(3),
            Self::Fog => Some(45),
            Self::DepositingRimeFog => Some(48),
            Self::LightDrizzle => Some(51),
            Self::ModerateDrizzle => Some(53),
            Self::DenseDrizzle => Some(55),
            Self::SlightRain => Some(61),
            Self::ModerateRain => Some(63),
            Self::HeavyRain => Some(65),
            Self::SlightSnow => Some(71),
            Self::ModerateSnow => Some(73),
            Self::HeavySnow => Some(75),
            Self::Thunderstorm => Some(95),
            Self::Unknown => None,
        }
    }

    /// Get a human-readable description of the weather condition
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Foggy",
            Self::DepositingRimeFog => "Depositing rime fog",
            Self::LightDrizzle => "Light drizzle",
            Self::ModerateDrizzle => "Moderate drizzle",
            Self::DenseDrizzle => "Dense drizzle",
            Self::SlightRain => "Slight rain",
            Self::ModerateRain => "Moderate rain",
            Self::HeavyRain => "Heavy rain",
            Self::SlightSnow => "Slight snow",
            Self::ModerateSnow => "Moderate snow",
            Self::HeavySnow => "Heavy snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
