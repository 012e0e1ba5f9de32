use chrono::NaiveDateTime;
use serde::Deserialize;

/// One raw row of a sensor capture window. Source files carry no timestamp
/// column; values are numeric or empty (missing).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Reading {
    pub co2: Option<f64>,
    pub tvoc: Option<f64>,
    pub hum_ext: Option<f64>,
    pub hum_room: Option<f64>,
    pub hum_wall: Option<f64>,
    pub hum_ceiling: Option<f64>,
    pub temp_ext: Option<f64>,
    pub temp_room: Option<f64>,
    pub temp_wall: Option<f64>,
    pub temp_ceiling: Option<f64>,
}

/// A tracked measurement column of a [`Reading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    Co2,
    Tvoc,
    HumExt,
    HumRoom,
    HumWall,
    HumCeiling,
    TempExt,
    TempRoom,
    TempWall,
    TempCeiling,
}

/// All tracked measurement columns, in source-file header order.
pub const MEASURES: [Measure; 10] = [
    Measure::Co2,
    Measure::Tvoc,
    Measure::HumExt,
    Measure::HumRoom,
    Measure::HumWall,
    Measure::HumCeiling,
    Measure::TempExt,
    Measure::TempRoom,
    Measure::TempWall,
    Measure::TempCeiling,
];

impl Measure {
    /// Gas concentration series (first chart panel).
    pub const GAS: [Measure; 2] = [Measure::Co2, Measure::Tvoc];

    /// Temperature by sensor location (second chart panel).
    pub const TEMPERATURE: [Measure; 4] = [
        Measure::TempExt,
        Measure::TempRoom,
        Measure::TempWall,
        Measure::TempCeiling,
    ];

    /// Humidity by sensor location (third chart panel).
    pub const HUMIDITY: [Measure; 4] = [
        Measure::HumExt,
        Measure::HumRoom,
        Measure::HumWall,
        Measure::HumCeiling,
    ];

    /// The column name as it appears in source-file headers.
    pub fn name(self) -> &'static str {
        match self {
            Measure::Co2 => "co2",
            Measure::Tvoc => "tvoc",
            Measure::HumExt => "hum_ext",
            Measure::HumRoom => "hum_room",
            Measure::HumWall => "hum_wall",
            Measure::HumCeiling => "hum_ceiling",
            Measure::TempExt => "temp_ext",
            Measure::TempRoom => "temp_room",
            Measure::TempWall => "temp_wall",
            Measure::TempCeiling => "temp_ceiling",
        }
    }

    /// Extract this column's value from a reading.
    pub fn value(self, reading: &Reading) -> Option<f64> {
        match self {
            Measure::Co2 => reading.co2,
            Measure::Tvoc => reading.tvoc,
            Measure::HumExt => reading.hum_ext,
            Measure::HumRoom => reading.hum_room,
            Measure::HumWall => reading.hum_wall,
            Measure::HumCeiling => reading.hum_ceiling,
            Measure::TempExt => reading.temp_ext,
            Measure::TempRoom => reading.temp_room,
            Measure::TempWall => reading.temp_wall,
            Measure::TempCeiling => reading.temp_ceiling,
        }
    }
}

impl Reading {
    /// True when every tracked measure holds a value.
    pub fn is_complete(&self) -> bool {
        MEASURES.iter().all(|m| m.value(self).is_some())
    }
}

/// A reading with its derived absolute timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: NaiveDateTime,
    pub reading: Reading,
}
