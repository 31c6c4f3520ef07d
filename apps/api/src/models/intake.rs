//! Intake form data — the closed option sets and the captured snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Department under analysis. Serialized with the labels the form shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    #[default]
    Operations,
    Finance,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    Marketing,
    #[serde(rename = "IT")]
    It,
    Other,
}

impl Department {
    pub const ALL: [Department; 7] = [
        Department::Operations,
        Department::Finance,
        Department::Hr,
        Department::CustomerSupport,
        Department::Marketing,
        Department::It,
        Department::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Department::Operations => "Operations",
            Department::Finance => "Finance",
            Department::Hr => "HR",
            Department::CustomerSupport => "Customer Support",
            Department::Marketing => "Marketing",
            Department::It => "IT",
            Department::Other => "Other",
        }
    }
}

/// How often the task is performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Volume {
    #[default]
    #[serde(rename = "Multiple times a day")]
    MultipleTimesADay,
    Daily,
    Weekly,
    Monthly,
}

impl Volume {
    pub const ALL: [Volume; 4] = [
        Volume::MultipleTimesADay,
        Volume::Daily,
        Volume::Weekly,
        Volume::Monthly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Volume::MultipleTimesADay => "Multiple times a day",
            Volume::Daily => "Daily",
            Volume::Weekly => "Weekly",
            Volume::Monthly => "Monthly",
        }
    }
}

/// How important the task is to business performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    #[default]
    Low,
    Medium,
    High,
}

impl Impact {
    pub const ALL: [Impact; 3] = [Impact::Low, Impact::Medium, Impact::High];

    pub fn label(self) -> &'static str {
        match self {
            Impact::Low => "Low",
            Impact::Medium => "Medium",
            Impact::High => "High",
        }
    }
}

/// The five form values as submitted. Free-text fields may be absent or
/// empty; they are never trimmed or otherwise rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeForm {
    pub department: Department,
    #[serde(default)]
    pub pain_point: String,
    #[serde(default)]
    pub data_used: String,
    pub volume: Volume,
    pub impact: Impact,
}

/// Immutable capture of one submission. Fields are private so a snapshot can
/// only be produced whole, by `IntakeSnapshot::capture`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeSnapshot {
    #[serde(flatten)]
    form: IntakeForm,
    captured_at: DateTime<Utc>,
}

impl IntakeSnapshot {
    pub fn capture(form: IntakeForm) -> Self {
        Self {
            form,
            captured_at: Utc::now(),
        }
    }

    pub fn department(&self) -> Department {
        self.form.department
    }

    pub fn pain_point(&self) -> &str {
        &self.form.pain_point
    }

    pub fn data_used(&self) -> &str {
        &self.form.data_used
    }

    pub fn volume(&self) -> Volume {
        self.form.volume
    }

    pub fn impact(&self) -> Impact {
        self.form.impact
    }

    pub fn form(&self) -> &IntakeForm {
        &self.form
    }
}
