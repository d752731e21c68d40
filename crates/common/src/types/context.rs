use serde::{Deserialize, Deserializer, Serialize};

/// Supported analysis languages. Unknown codes fall back to English so a
/// stale client can never make a request unanalyzable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    En,
    Hi,
    Es,
    Fr,
    De,
    Pt,
    Zh,
}

impl Language {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "HI" => Self::Hi,
            "ES" => Self::Es,
            "FR" => Self::Fr,
            "DE" => Self::De,
            "PT" => Self::Pt,
            "ZH" => Self::Zh,
            _ => Self::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Hi => "HI",
            Self::Es => "ES",
            Self::Fr => "FR",
            Self::De => "DE",
            Self::Pt => "PT",
            Self::Zh => "ZH",
        }
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// Who the text is addressed to. Unknown tags fall back to General.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Boss,
    Client,
    Peer,
    #[serde(rename = "HR")]
    Hr,
    #[default]
    General,
    Investor,
    Team,
    Vendor,
    Partner,
    Customer,
}

impl Audience {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "boss" => Self::Boss,
            "client" => Self::Client,
            "peer" => Self::Peer,
            "hr" => Self::Hr,
            "investor" => Self::Investor,
            "team" => Self::Team,
            "vendor" => Self::Vendor,
            "partner" => Self::Partner,
            "customer" => Self::Customer,
            _ => Self::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boss => "boss",
            Self::Client => "client",
            Self::Peer => "peer",
            Self::Hr => "HR",
            Self::General => "general",
            Self::Investor => "investor",
            Self::Team => "team",
            Self::Vendor => "vendor",
            Self::Partner => "partner",
            Self::Customer => "customer",
        }
    }
}

impl<'de> Deserialize<'de> for Audience {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// The medium the text will be sent through. Unknown tags fall back to
/// Email, the most common case in practice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMedium {
    #[default]
    Email,
    Tweet,
    FormalDoc,
    Chat,
    Social,
}

impl ContentMedium {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "tweet" => Self::Tweet,
            "formal_doc" => Self::FormalDoc,
            "chat" => Self::Chat,
            "social" => Self::Social,
            _ => Self::Email,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Tweet => "tweet",
            Self::FormalDoc => "formal_doc",
            Self::Chat => "chat",
            Self::Social => "social",
        }
    }
}

impl<'de> Deserialize<'de> for ContentMedium {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
