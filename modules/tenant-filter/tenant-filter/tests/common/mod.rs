#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::must_use_candidate)]

//! Demo dataset shared by the integration tests.
//!
//! Three Mumbai wards belong to the "Maharashtra" district and two wards to
//! "Delhi". Every ward has one alert, one water report and one weather
//! record; the two hospitals each file one admission report.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tenant_filter::{TenantFilterConfig, build_client};
use tenant_filter_sdk::{
    AdmissionReport, Alert, Hospital, Severity, TenantFilterApi, Ward, WardLink,
    WaterQualityReport, WeatherRecord,
};
use uuid::Uuid;
use ww_security::{HospitalId, WardId};

pub struct DemoData {
    pub wards: Vec<Ward>,
    pub hospitals: Vec<Hospital>,
    pub alerts: Vec<Alert>,
    pub admissions: Vec<AdmissionReport>,
    pub water: Vec<WaterQualityReport>,
    pub weather: Vec<WeatherRecord>,
}

impl DemoData {
    pub fn ward(&self, name: &str) -> &Ward {
        self.wards.iter().find(|w| w.name == name).unwrap()
    }

    pub fn hospital(&self, name: &str) -> &Hospital {
        self.hospitals.iter().find(|h| h.name == name).unwrap()
    }

    pub fn link(&self, ward_name: &str) -> WardLink {
        let ward = self.ward(ward_name);
        WardLink {
            id: ward.id,
            district: ward.district.clone(),
        }
    }
}

pub fn client() -> Arc<dyn TenantFilterApi> {
    build_client(TenantFilterConfig::default()).unwrap()
}

pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, d, 9, 0, 0).unwrap()
}

fn ward(name: &str, city: &str, district: &str) -> Ward {
    Ward {
        id: WardId::new_v4(),
        name: name.to_owned(),
        city: city.to_owned(),
        state: district.to_owned(),
        district: district.to_owned(),
        population: Some(80_000),
    }
}

pub fn demo() -> DemoData {
    let wards = vec![
        ward("Dharavi", "Mumbai", "Maharashtra"),
        ward("Kurla", "Mumbai", "Maharashtra"),
        ward("Bandra", "Mumbai", "Maharashtra"),
        ward("Karol Bagh", "Delhi", "Delhi"),
        ward("Saket", "Delhi", "Delhi"),
    ];

    let hospitals = vec![
        Hospital {
            id: HospitalId::new_v4(),
            name: "Sion Hospital".to_owned(),
            ward_id: wards[0].id,
            city: "Mumbai".to_owned(),
            capacity: 1400,
            icu_beds: 90,
        },
        Hospital {
            id: HospitalId::new_v4(),
            name: "Ram Manohar Lohia".to_owned(),
            ward_id: wards[3].id,
            city: "Delhi".to_owned(),
            capacity: 1500,
            icu_beds: 110,
        },
    ];

    let link = |w: &Ward| WardLink {
        id: w.id,
        district: w.district.clone(),
    };

    let alerts = wards
        .iter()
        .enumerate()
        .map(|(i, w)| Alert {
            id: Uuid::new_v4(),
            ward: link(w),
            severity: if i % 2 == 0 {
                Severity::High
            } else {
                Severity::Low
            },
            message: format!("syndromic signal in {}", w.name),
            created_at: day(u32::try_from(i).unwrap() + 1),
        })
        .collect();

    let admissions = hospitals
        .iter()
        .map(|h| {
            let w = wards.iter().find(|w| w.id == h.ward_id).unwrap();
            AdmissionReport {
                id: Uuid::new_v4(),
                ward: link(w),
                hospital_id: h.id,
                syndrome: "DIARRHEA".to_owned(),
                admission_count: 12,
                report_date: day(3),
            }
        })
        .collect();

    let water = wards
        .iter()
        .map(|w| WaterQualityReport {
            id: Uuid::new_v4(),
            ward: link(w),
            ph_level: 7.1,
            turbidity: 3.5,
            report_date: day(2),
        })
        .collect();

    let weather = wards
        .iter()
        .map(|w| WeatherRecord {
            id: Uuid::new_v4(),
            ward: link(w),
            temperature: 31.0,
            rainfall: 12.5,
            recorded_at: day(2),
        })
        .collect();

    DemoData {
        wards,
        hospitals,
        alerts,
        admissions,
        water,
        weather,
    }
}
