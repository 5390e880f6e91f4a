use crate::utils::time::parse_decimal;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Cost codes a line item can be booked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobCode {
    Framing,
    Electrical,
    Plumbing,
    Flooring,
    Roofing,
    Drywall,
    Painting,
}

impl JobCode {
    pub const ALL: [JobCode; 7] = [
        JobCode::Framing,
        JobCode::Electrical,
        JobCode::Plumbing,
        JobCode::Flooring,
        JobCode::Roofing,
        JobCode::Drywall,
        JobCode::Painting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobCode::Framing => "Framing",
            JobCode::Electrical => "Electrical",
            JobCode::Plumbing => "Plumbing",
            JobCode::Flooring => "Flooring",
            JobCode::Roofing => "Roofing",
            JobCode::Drywall => "Drywall",
            JobCode::Painting => "Painting",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }
}

/// Whether `total` follows `hours × price` or was typed in by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalMode {
    #[default]
    Derived,
    Overridden,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: u64,
    pub job_name: String,
    pub job_number: String,
    pub job_code: Option<JobCode>,
    pub operation: String,
    pub lot_numbers: String,
    /// Hours as typed; see [`LineItem::hours_value`].
    pub hours: String,
    /// Price per hour as typed; see [`LineItem::price_value`].
    pub price: String,
    pub total: f64,
    #[serde(default)]
    pub total_mode: TotalMode,
}

impl LineItem {
    /// A blank item: every text field empty, total 0.
    pub fn blank(id: u64) -> Self {
        Self {
            id,
            job_name: String::new(),
            job_number: String::new(),
            job_code: None,
            operation: String::new(),
            lot_numbers: String::new(),
            hours: String::new(),
            price: String::new(),
            total: 0.0,
            total_mode: TotalMode::Derived,
        }
    }

    pub fn hours_value(&self) -> f64 {
        parse_decimal(&self.hours)
    }

    pub fn price_value(&self) -> f64 {
        parse_decimal(&self.price)
    }

    pub fn is_overridden(&self) -> bool {
        self.total_mode == TotalMode::Overridden
    }
}

/// Editable line item fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineField {
    JobName,
    JobNumber,
    JobCode,
    Operation,
    LotNumbers,
    Hours,
    Price,
    Total,
}
