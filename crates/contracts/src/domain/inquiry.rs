use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer inquiry submitted from the storefront product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub user_name: String,
    pub user_email: String,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    pub buy_option: BuyOption,
    #[serde(default)]
    pub location: String,
    pub quantity: u32,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_image: String,
    #[serde(default)]
    pub variant: Option<String>,
    pub status: InquiryStatus,
    #[serde(default)]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuyOption {
    Personal,
    Wholesale,
    Other,
}

impl BuyOption {
    pub const ALL: [BuyOption; 3] = [BuyOption::Personal, BuyOption::Wholesale, BuyOption::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuyOption::Personal => "Personal",
            BuyOption::Wholesale => "Wholesale",
            BuyOption::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InquiryStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl InquiryStatus {
    pub const ALL: [InquiryStatus; 4] = [
        InquiryStatus::Pending,
        InquiryStatus::Processing,
        InquiryStatus::Completed,
        InquiryStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "Pending",
            InquiryStatus::Processing => "Processing",
            InquiryStatus::Completed => "Completed",
            InquiryStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// The only mutable part of an inquiry from the admin side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryUpdate {
    pub status: InquiryStatus,
}
