//! Scoped record shapes served by the platform.
//!
//! These carry only the fields that participate in scoping and in the
//! business conditions commonly composed with it. Records that belong to a
//! ward embed a [`WardLink`] holding the joined parent fields, which is how
//! `ward.district` is resolved without a second lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use ww_security::{HospitalId, WardId};

use crate::record::{PropertyValue, ScopedRecord};
use crate::resource::{ResourceKind, scope_properties as p};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ward {
    pub id: WardId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub district: String,
    pub population: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: HospitalId,
    pub name: String,
    pub ward_id: WardId,
    pub city: String,
    pub capacity: u32,
    pub icu_beds: u32,
}

/// Parent ward fields joined onto a ward-scoped record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardLink {
    pub id: WardId,
    pub district: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub ward: WardLink,
    pub severity: Severity,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionReport {
    pub id: Uuid,
    pub ward: WardLink,
    pub hospital_id: HospitalId,
    pub syndrome: String,
    pub admission_count: u32,
    pub report_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterQualityReport {
    pub id: Uuid,
    pub ward: WardLink,
    pub ph_level: f64,
    pub turbidity: f64,
    pub report_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub id: Uuid,
    pub ward: WardLink,
    pub temperature: f64,
    pub rainfall: f64,
    pub recorded_at: DateTime<Utc>,
}

impl WardLink {
    fn property(&self, path: &str) -> Option<PropertyValue<'_>> {
        match path {
            p::WARD_ID => Some(PropertyValue::Id(self.id.as_uuid())),
            p::WARD_DISTRICT => Some(PropertyValue::Text(&self.district)),
            _ => None,
        }
    }
}

impl ScopedRecord for Ward {
    const KIND: ResourceKind = ResourceKind::Ward;

    fn property(&self, path: &str) -> Option<PropertyValue<'_>> {
        match path {
            p::ID => Some(PropertyValue::Id(self.id.as_uuid())),
            p::DISTRICT => Some(PropertyValue::Text(&self.district)),
            p::CITY => Some(PropertyValue::Text(&self.city)),
            "name" => Some(PropertyValue::Text(&self.name)),
            "state" => Some(PropertyValue::Text(&self.state)),
            _ => None,
        }
    }
}

impl ScopedRecord for Hospital {
    const KIND: ResourceKind = ResourceKind::Hospital;

    fn property(&self, path: &str) -> Option<PropertyValue<'_>> {
        match path {
            p::ID => Some(PropertyValue::Id(self.id.as_uuid())),
            p::WARD_ID => Some(PropertyValue::Id(self.ward_id.as_uuid())),
            p::CITY => Some(PropertyValue::Text(&self.city)),
            "name" => Some(PropertyValue::Text(&self.name)),
            _ => None,
        }
    }
}

impl ScopedRecord for Alert {
    const KIND: ResourceKind = ResourceKind::Alert;

    fn property(&self, path: &str) -> Option<PropertyValue<'_>> {
        match path {
            p::ID => Some(PropertyValue::Id(self.id)),
            "severity" => Some(PropertyValue::Text(self.severity.as_str())),
            "created_at" => Some(PropertyValue::Timestamp(self.created_at)),
            other => self.ward.property(other),
        }
    }
}

impl ScopedRecord for AdmissionReport {
    const KIND: ResourceKind = ResourceKind::AdmissionReport;

    fn property(&self, path: &str) -> Option<PropertyValue<'_>> {
        match path {
            p::ID => Some(PropertyValue::Id(self.id)),
            p::HOSPITAL_ID => Some(PropertyValue::Id(self.hospital_id.as_uuid())),
            "syndrome" => Some(PropertyValue::Text(&self.syndrome)),
            "report_date" => Some(PropertyValue::Timestamp(self.report_date)),
            other => self.ward.property(other),
        }
    }
}

impl ScopedRecord for WaterQualityReport {
    const KIND: ResourceKind = ResourceKind::WaterQualityReport;

    fn property(&self, path: &str) -> Option<PropertyValue<'_>> {
        match path {
            p::ID => Some(PropertyValue::Id(self.id)),
            "report_date" => Some(PropertyValue::Timestamp(self.report_date)),
            other => self.ward.property(other),
        }
    }
}

impl ScopedRecord for WeatherRecord {
    const KIND: ResourceKind = ResourceKind::WeatherRecord;

    fn property(&self, path: &str) -> Option<PropertyValue<'_>> {
        match path {
            p::ID => Some(PropertyValue::Id(self.id)),
            "recorded_at" => Some(PropertyValue::Timestamp(self.recorded_at)),
            other => self.ward.property(other),
        }
    }
}
