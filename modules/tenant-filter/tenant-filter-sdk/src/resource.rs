//! Resource kinds and their scope paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Property paths used in visibility predicates.
///
/// A dotted path traverses a parent reference: `ward.district` is the
/// district of the ward the record belongs to.
pub mod scope_properties {
    pub const ID: &str = "id";
    pub const WARD_ID: &str = "ward_id";
    pub const HOSPITAL_ID: &str = "hospital_id";
    pub const DISTRICT: &str = "district";
    pub const CITY: &str = "city";
    pub const WARD_DISTRICT: &str = "ward.district";
}

/// Queryable domain entity kinds that are subject to tenant filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Ward,
    Hospital,
    Alert,
    AdmissionReport,
    WaterQualityReport,
    WeatherRecord,
}

/// How a resource kind relates back to a ward, a district and a hospital.
///
/// `None` means the kind has no such relation; rules that need it cannot be
/// attached to the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScopePaths {
    pub id: &'static str,
    pub ward: &'static str,
    pub district: &'static str,
    pub hospital: Option<&'static str>,
    /// The district path is a stand-in for a real district column.
    ///
    /// Hospitals carry no district, so their city is compared instead. This
    /// is an approximation that breaks if city and district names diverge.
    pub district_is_proxy: bool,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Ward,
        ResourceKind::Hospital,
        ResourceKind::Alert,
        ResourceKind::AdmissionReport,
        ResourceKind::WaterQualityReport,
        ResourceKind::WeatherRecord,
    ];
    pub const COUNT: usize = Self::ALL.len();

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Ward => "ward",
            ResourceKind::Hospital => "hospital",
            ResourceKind::Alert => "alert",
            ResourceKind::AdmissionReport => "admission_report",
            ResourceKind::WaterQualityReport => "water_quality_report",
            ResourceKind::WeatherRecord => "weather_record",
        }
    }

    /// Dense index in `0..ResourceKind::COUNT`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn scope_paths(self) -> ScopePaths {
        use scope_properties::{CITY, DISTRICT, HOSPITAL_ID, ID, WARD_DISTRICT, WARD_ID};

        match self {
            ResourceKind::Ward => ScopePaths {
                id: ID,
                ward: ID,
                district: DISTRICT,
                hospital: None,
                district_is_proxy: false,
            },
            ResourceKind::Hospital => ScopePaths {
                id: ID,
                ward: WARD_ID,
                district: CITY,
                hospital: Some(ID),
                district_is_proxy: true,
            },
            ResourceKind::AdmissionReport => ScopePaths {
                id: ID,
                ward: WARD_ID,
                district: WARD_DISTRICT,
                hospital: Some(HOSPITAL_ID),
                district_is_proxy: false,
            },
            ResourceKind::Alert
            | ResourceKind::WaterQualityReport
            | ResourceKind::WeatherRecord => ScopePaths {
                id: ID,
                ward: WARD_ID,
                district: WARD_DISTRICT,
                hospital: None,
                district_is_proxy: false,
            },
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
