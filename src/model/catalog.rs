use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Project category chosen on the first wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Web,
    Mobile,
    Ai,
    Ecommerce,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Web,
        ProjectType::Mobile,
        ProjectType::Ai,
        ProjectType::Ecommerce,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ProjectType::Web => "web",
            ProjectType::Mobile => "mobile",
            ProjectType::Ai => "ai",
            ProjectType::Ecommerce => "ecommerce",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Web => "Web App",
            ProjectType::Mobile => "Mobile App",
            ProjectType::Ai => "AI / ML System",
            ProjectType::Ecommerce => "E-commerce Platform",
        }
    }

    /// Roles every project of this type starts with, in staffing order.
    #[must_use]
    pub fn base_roster(self) -> &'static [&'static str] {
        match self {
            ProjectType::Web => &["Frontend Developer", "Backend Developer", "QA Engineer"],
            ProjectType::Mobile => &["Mobile Developer", "API Developer", "QA Engineer"],
            ProjectType::Ai => &["ML Engineer", "Data Scientist", "Backend Engineer"],
            ProjectType::Ecommerce => &["Frontend Developer", "Backend Developer", "DevOps", "QA"],
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown project type '{s}' (expected web, mobile, ai or ecommerce)"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Low, Complexity::Medium, Complexity::High];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Complexity::Low => "Low (Basic)",
            Complexity::Medium => "Medium (Standard)",
            Complexity::High => "High (Advanced)",
        }
    }

    /// Next value in selector order, wrapping from `High` to `Low`.
    #[must_use]
    pub fn cycle(current: Option<Complexity>) -> Complexity {
        match current {
            None | Some(Complexity::High) => Complexity::Low,
            Some(Complexity::Low) => Complexity::Medium,
            Some(Complexity::Medium) => Complexity::High,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Complexity::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown complexity '{s}' (expected low, medium or high)"))
    }
}

/// Fixed feature catalog offered on the details step.
///
/// Variant order is catalog order, so a `BTreeSet<Feature>` iterates the way
/// the checklist is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "Authentication")]
    Authentication,
    #[serde(rename = "Admin Dashboard")]
    AdminDashboard,
    #[serde(rename = "User Dashboard")]
    UserDashboard,
    #[serde(rename = "Real-time Chat")]
    RealtimeChat,
    #[serde(rename = "Payment Gateway")]
    PaymentGateway,
    #[serde(rename = "Analytics")]
    Analytics,
    #[serde(rename = "Push Notifications")]
    PushNotifications,
    #[serde(rename = "AI Automation")]
    AiAutomation,
    #[serde(rename = "API Integrations")]
    ApiIntegrations,
}

impl Feature {
    pub const ALL: [Feature; 9] = [
        Feature::Authentication,
        Feature::AdminDashboard,
        Feature::UserDashboard,
        Feature::RealtimeChat,
        Feature::PaymentGateway,
        Feature::Analytics,
        Feature::PushNotifications,
        Feature::AiAutomation,
        Feature::ApiIntegrations,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Feature::Authentication => "Authentication",
            Feature::AdminDashboard => "Admin Dashboard",
            Feature::UserDashboard => "User Dashboard",
            Feature::RealtimeChat => "Real-time Chat",
            Feature::PaymentGateway => "Payment Gateway",
            Feature::Analytics => "Analytics",
            Feature::PushNotifications => "Push Notifications",
            Feature::AiAutomation => "AI Automation",
            Feature::ApiIntegrations => "API Integrations",
        }
    }

    /// Case-insensitive lookup by display label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Feature> {
        let label = label.trim();
        Feature::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flat-fee add-on services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addon {
    Cloud,
    Security,
    Analytics,
}

impl Addon {
    pub const ALL: [Addon; 3] = [Addon::Cloud, Addon::Security, Addon::Analytics];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Addon::Cloud => "Cloud Setup",
            Addon::Security => "Security Hardening",
            Addon::Analytics => "Analytics Dashboard",
        }
    }
}

/// Technology stack picked on the third step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TechStack {
    Mern,
    Mean,
    Django,
    SpringBoot,
    Laravel,
    RubyOnRails,
    Serverless,
    Custom(String),
}

impl TechStack {
    pub const PRESETS: [TechStack; 7] = [
        TechStack::Mern,
        TechStack::Mean,
        TechStack::Django,
        TechStack::SpringBoot,
        TechStack::Laravel,
        TechStack::RubyOnRails,
        TechStack::Serverless,
    ];

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            TechStack::Mern => "MERN",
            TechStack::Mean => "MEAN",
            TechStack::Django => "Django",
            TechStack::SpringBoot => "Spring Boot",
            TechStack::Laravel => "Laravel",
            TechStack::RubyOnRails => "Ruby on Rails",
            TechStack::Serverless => "Serverless / Firebase",
            TechStack::Custom(text) => text,
        }
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, TechStack::Custom(_))
    }
}

impl From<String> for TechStack {
    fn from(value: String) -> Self {
        let preset = TechStack::PRESETS
            .into_iter()
            .find(|preset| preset.label().eq_ignore_ascii_case(value.trim()));
        match preset {
            Some(preset) => preset,
            None => TechStack::Custom(value),
        }
    }
}

impl From<TechStack> for String {
    fn from(value: TechStack) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for TechStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
