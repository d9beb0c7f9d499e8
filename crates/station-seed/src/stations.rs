//! The SDMIS 69 station list.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Kind of unit a station document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationType {
    /// Fire station (centre d'incendie et de secours).
    Caserne,
    /// Administrative unit at the departmental headquarters.
    Service,
}

impl StationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StationType::Caserne => "caserne",
            StationType::Service => "service",
        }
    }
}

/// Hand-authored station entry, before it is stamped for insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationSeed {
    pub name: &'static str,
    pub station_type: StationType,
    pub groupement: Option<&'static str>,
}

impl StationSeed {
    const fn caserne(name: &'static str, groupement: &'static str) -> Self {
        Self {
            name,
            station_type: StationType::Caserne,
            groupement: Some(groupement),
        }
    }

    const fn service(name: &'static str) -> Self {
        Self {
            name,
            station_type: StationType::Service,
            groupement: None,
        }
    }

    /// Builds the document to insert, stamped with `created_at`.
    pub fn stamp(&self, created_at: OffsetDateTime) -> Station {
        Station {
            name: self.name.to_string(),
            station_type: self.station_type,
            groupement: self.groupement.map(str::to_string),
            created_at,
        }
    }
}

/// Document stored in the `stations` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    #[serde(rename = "type")]
    pub station_type: StationType,
    /// Written as null for administrative services.
    pub groupement: Option<String>,
    #[serde(with = "bson::serde_helpers::time_0_3_offsetdatetime_as_bson_datetime")]
    pub created_at: OffsetDateTime,
}

/// Every station and service of SDMIS 69, in insertion order.
pub const STATIONS: &[StationSeed] = &[
    StationSeed::caserne("CIS Lyon Duchère", "Centre"),
    StationSeed::caserne("CIS Lyon Gerland", "Sud"),
    StationSeed::caserne("CIS Lyon Croix-Rousse", "Nord"),
    StationSeed::caserne("CIS Villeurbanne", "Est"),
    StationSeed::caserne("CIS Caluire", "Nord"),
    StationSeed::caserne("CIS Vénissieux", "Sud"),
    StationSeed::caserne("CIS Bron", "Est"),
    StationSeed::caserne("CIS Décines", "Est"),
    StationSeed::caserne("CIS Givors", "Sud"),
    StationSeed::caserne("CIS Tarare", "Ouest"),
    StationSeed::service("Direction Départementale"),
    StationSeed::service("Service RH"),
    StationSeed::service("Service Matériel"),
    StationSeed::service("Service Formation"),
];

/// Stamps the whole station list with a single creation time.
pub fn stamped_stations(created_at: OffsetDateTime) -> Vec<Station> {
    STATIONS.iter().map(|seed| seed.stamp(created_at)).collect()
}
