//! Transport mode type.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A kind of public transport vehicle.
///
/// Labels are matched case-insensitively. Labels outside the known set are
/// preserved in [`TransportMode::Unknown`] rather than rejected, so data
/// from the transit provider never fails to load because of a new mode.
///
/// # Examples
///
/// ```
/// use vvwo::domain::TransportMode;
///
/// assert_eq!(TransportMode::parse("CityBus"), TransportMode::CityBus);
/// assert_eq!(TransportMode::parse("tram").as_str(), "tram");
///
/// let footpath = TransportMode::parse("Footpath");
/// assert_eq!(footpath, TransportMode::Unknown("Footpath".to_string()));
/// assert_eq!(footpath.as_str(), "Footpath");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransportMode {
    Tram,
    CityBus,
    IntercityBus,
    PlusBus,
    SuburbanRailway,
    Train,
    Cableway,
    Ferry,
    HailedSharedTaxi,
    /// A mode label outside the known set, stored as received.
    Unknown(String),
}

impl TransportMode {
    /// Every known mode, in declaration order.
    pub const KNOWN: [TransportMode; 9] = [
        TransportMode::Tram,
        TransportMode::CityBus,
        TransportMode::IntercityBus,
        TransportMode::PlusBus,
        TransportMode::SuburbanRailway,
        TransportMode::Train,
        TransportMode::Cableway,
        TransportMode::Ferry,
        TransportMode::HailedSharedTaxi,
    ];

    /// Parse a mode label. Never fails.
    pub fn parse(label: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(label))
            .cloned()
            .unwrap_or_else(|| TransportMode::Unknown(label.to_string()))
    }

    /// Returns the canonical label (the raw label for unknown modes).
    pub fn as_str(&self) -> &str {
        match self {
            TransportMode::Tram => "tram",
            TransportMode::CityBus => "cityBus",
            TransportMode::IntercityBus => "intercityBus",
            TransportMode::PlusBus => "plusBus",
            TransportMode::SuburbanRailway => "suburbanRailway",
            TransportMode::Train => "train",
            TransportMode::Cableway => "cableway",
            TransportMode::Ferry => "ferry",
            TransportMode::HailedSharedTaxi => "hailedSharedTaxi",
            TransportMode::Unknown(label) => label,
        }
    }

    /// The full set of known modes, used when no filter applies.
    pub fn all_known() -> BTreeSet<TransportMode> {
        Self::KNOWN.iter().cloned().collect()
    }

    /// The bus family: city, intercity and PlusBus lines.
    pub fn buses() -> BTreeSet<TransportMode> {
        [
            TransportMode::CityBus,
            TransportMode::IntercityBus,
            TransportMode::PlusBus,
        ]
        .into_iter()
        .collect()
    }
}

impl From<String> for TransportMode {
    fn from(label: String) -> Self {
        TransportMode::parse(&label)
    }
}

impl From<TransportMode> for String {
    fn from(mode: TransportMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Debug for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransportMode({})", self.as_str())
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
