use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::error::SubmissionError;

/// Default `source` tag attached to every submission
pub const DEFAULT_SOURCE: &str = "S-Proof Website";

pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Business categories offered by the signup form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessType {
    PrintShop,
    DesignAgency,
    MarketingCompany,
    Freelancer,
    Other,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl BusinessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::PrintShop => "print-shop",
            BusinessType::DesignAgency => "design-agency",
            BusinessType::MarketingCompany => "marketing-company",
            BusinessType::Freelancer => "freelancer",
            BusinessType::Other => "other",
            BusinessType::Unspecified => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BusinessType::PrintShop => "🖨️ Print Shop (Our specialty!)",
            BusinessType::DesignAgency => "🎨 Design Agency",
            BusinessType::MarketingCompany => "📈 Marketing Company",
            BusinessType::Freelancer => "👨‍💻 Freelance Designer",
            BusinessType::Other => "🏢 Other",
            BusinessType::Unspecified => "Select your business type",
        }
    }

    /// Label reported to analytics; unspecified types are tracked as "unknown"
    pub fn analytics_label(&self) -> &'static str {
        match self {
            BusinessType::Unspecified => "unknown",
            other => other.as_str(),
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "print-shop" => Some(BusinessType::PrintShop),
            "design-agency" => Some(BusinessType::DesignAgency),
            "marketing-company" => Some(BusinessType::MarketingCompany),
            "freelancer" => Some(BusinessType::Freelancer),
            "other" => Some(BusinessType::Other),
            "" => Some(BusinessType::Unspecified),
            _ => None,
        }
    }

    /// Options in the order the form lists them, placeholder first
    pub fn all() -> Vec<BusinessType> {
        vec![
            BusinessType::Unspecified,
            BusinessType::PrintShop,
            BusinessType::DesignAgency,
            BusinessType::MarketingCompany,
            BusinessType::Freelancer,
            BusinessType::Other,
        ]
    }
}

/// Matches `^[^\s@]+@[^\s@]+\.[^\s@]+$`
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupEmail(String);

impl SignupEmail {
    pub fn parse(candidate: &str) -> Result<Self, SubmissionError> {
        if is_valid_email(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(SubmissionError::Validation(INVALID_EMAIL.to_string()))
        }
    }
}

impl AsRef<str> for SignupEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Raw form input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistRequest {
    pub email: String,
    pub company_name: String,
    pub business_type: String,
}

impl WaitlistRequest {
    pub fn validate(&self) -> Result<NewSignup, SubmissionError> {
        let email = SignupEmail::parse(&self.email)?;
        let business_type = BusinessType::from_str(&self.business_type).ok_or_else(|| {
            SubmissionError::Validation(format!("Unknown business type: {}", self.business_type))
        })?;
        Ok(NewSignup {
            email,
            company_name: self.company_name.trim().to_string(),
            business_type,
        })
    }
}

/// Input that passed validation and may be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSignup {
    pub email: SignupEmail,
    pub company_name: String,
    pub business_type: BusinessType,
}

impl NewSignup {
    /// Subject line shown in the form provider's notification email
    pub fn subject(&self) -> String {
        let who = if self.company_name.is_empty() {
            self.email.as_ref()
        } else {
            self.company_name.as_str()
        };
        format!("New S-Proof waitlist signup from {who}")
    }
}

/// JSON body posted to the form-collection endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistSubmission {
    pub email: String,
    pub company_name: String,
    pub business_type: BusinessType,
    pub source: String,
    pub timestamp: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

impl WaitlistSubmission {
    pub fn new(signup: &NewSignup, source: &str, submitted_at: DateTime<Utc>) -> Self {
        Self {
            email: signup.email.as_ref().to_string(),
            company_name: signup.company_name.clone(),
            business_type: signup.business_type,
            source: source.to_string(),
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            subject: signup.subject(),
        }
    }
}
