use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    ForSale,
    RealEstate,
    Vehicles,
    Jobs,
    Services,
    Miscellaneous,
    Announcements,
    Personals,
    LostAndFound,
    CommunityEvents,
    Pets,
    Education,
    BusinessOpportunities,
    Rentals,
    Wanted,
}

impl Section {
    pub const ALL: [Section; 15] = [
        Section::ForSale,
        Section::RealEstate,
        Section::Vehicles,
        Section::Jobs,
        Section::Services,
        Section::Miscellaneous,
        Section::Announcements,
        Section::Personals,
        Section::LostAndFound,
        Section::CommunityEvents,
        Section::Pets,
        Section::Education,
        Section::BusinessOpportunities,
        Section::Rentals,
        Section::Wanted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::ForSale => "for-sale",
            Section::RealEstate => "real-estate",
            Section::Vehicles => "vehicles",
            Section::Jobs => "jobs",
            Section::Services => "services",
            Section::Miscellaneous => "miscellaneous",
            Section::Announcements => "announcements",
            Section::Personals => "personals",
            Section::LostAndFound => "lost-and-found",
            Section::CommunityEvents => "community-events",
            Section::Pets => "pets",
            Section::Education => "education",
            Section::BusinessOpportunities => "business-opportunities",
            Section::Rentals => "rentals",
            Section::Wanted => "wanted",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 聯絡管道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Call,
    Sms,
    Whatsapp,
    Signal,
    Messenger,
    Viber,
    Telegram,
    Snapchat,
    Email,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Call => "call",
            Platform::Sms => "sms",
            Platform::Whatsapp => "whatsapp",
            Platform::Signal => "signal",
            Platform::Messenger => "messenger",
            Platform::Viber => "viber",
            Platform::Telegram => "telegram",
            Platform::Snapchat => "snapchat",
            Platform::Email => "email",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified ad. Field order here is the field order in the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub section: Section,
    pub title: String,
    pub description: String,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Listing {
    /// 空白字串視同沒有時間戳
    pub fn has_timestamp(&self) -> bool {
        self.timestamp
            .as_deref()
            .map(|ts| !ts.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Upper bounds, inclusive, for the random age given to a listing without a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackfillWindow {
    pub max_days: i64,
    pub max_hours: i64,
    pub max_minutes: i64,
}

impl Default for BackfillWindow {
    fn default() -> Self {
        Self {
            max_days: 30,
            max_hours: 23,
            max_minutes: 59,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedDataset {
    pub listings: Vec<Listing>,
    pub backfilled: usize,
}
