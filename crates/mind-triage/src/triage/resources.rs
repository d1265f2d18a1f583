//! Crisis contacts and per-tier support resources served alongside reports.

use serde::Serialize;

use super::domain::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hotline {
    pub name: &'static str,
    pub number: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InPersonOption {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub available: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyResources {
    pub hotlines: &'static [Hotline],
    pub in_person: &'static [InPersonOption],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SupportPriority {
    Emergency,
    Urgent,
    High,
    Standard,
    Preventive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Hotline,
    InPerson,
    Online,
    Provider,
    Facility,
    Group,
    SelfCare,
    Community,
    Checkup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportResource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelResources {
    pub priority: SupportPriority,
    pub resources: &'static [SupportResource],
}

const fn contact(kind: ResourceKind, name: &'static str, number: &'static str) -> SupportResource {
    SupportResource {
        kind,
        name,
        number: Some(number),
        description: None,
    }
}

const fn service(
    kind: ResourceKind,
    name: &'static str,
    description: &'static str,
) -> SupportResource {
    SupportResource {
        kind,
        name,
        number: None,
        description: Some(description),
    }
}

const EMERGENCY: EmergencyResources = EmergencyResources {
    hotlines: &[
        Hotline {
            name: "National Suicide Prevention Lifeline",
            number: "988",
            description: "Free, confidential, 24/7",
        },
        Hotline {
            name: "Crisis Text Line",
            number: "Text HOME to 741741",
            description: "24/7 crisis support via text",
        },
        Hotline {
            name: "SAMHSA National Helpline",
            number: "1-800-662-4357",
            description: "Free, confidential, 24/7 substance abuse and mental health support",
        },
        Hotline {
            name: "Veterans Crisis Line",
            number: "988, then press 1",
            description: "For military veterans in crisis",
        },
    ],
    in_person: &[
        InPersonOption {
            kind: "Emergency Room",
            description: "Go to nearest hospital emergency department",
            available: "24/7",
        },
        InPersonOption {
            kind: "Crisis Center",
            description: "Local mental health crisis center or psychiatric urgent care",
            available: "Check your area",
        },
        InPersonOption {
            kind: "Police",
            description: "Call 911 if in immediate danger",
            available: "24/7",
        },
    ],
};

const CRITICAL: LevelResources = LevelResources {
    priority: SupportPriority::Emergency,
    resources: &[
        contact(ResourceKind::Hotline, "National Suicide Prevention Lifeline", "988"),
        service(ResourceKind::InPerson, "Emergency Room", "Seek immediate care"),
        contact(ResourceKind::Online, "Crisis Text Line", "741741"),
    ],
};

const SEVERE: LevelResources = LevelResources {
    priority: SupportPriority::Urgent,
    resources: &[
        service(ResourceKind::Provider, "Psychiatrist", "Urgent psychiatric evaluation"),
        service(ResourceKind::Provider, "Psychologist", "Crisis counseling"),
        service(ResourceKind::Facility, "Psychiatric Hospital", "Inpatient evaluation"),
        contact(ResourceKind::Hotline, "Crisis Hotline", "988"),
    ],
};

const MODERATE: LevelResources = LevelResources {
    priority: SupportPriority::High,
    resources: &[
        service(ResourceKind::Provider, "Therapist", "Regular therapy sessions"),
        service(ResourceKind::Provider, "Psychiatrist", "Medication evaluation"),
        service(ResourceKind::Group, "Support Groups", "Peer support"),
        service(ResourceKind::SelfCare, "Counseling", "Online counseling services"),
    ],
};

const MILD: LevelResources = LevelResources {
    priority: SupportPriority::Standard,
    resources: &[
        service(ResourceKind::Provider, "Counselor", "General counseling"),
        service(
            ResourceKind::SelfCare,
            "Apps",
            "Mental health apps (Headspace, Calm, etc.)",
        ),
        service(ResourceKind::Group, "Support Groups", "Online or in-person groups"),
        service(ResourceKind::SelfCare, "Wellness Programs", "Workplace EAP programs"),
    ],
};

const LOW: LevelResources = LevelResources {
    priority: SupportPriority::Preventive,
    resources: &[
        service(ResourceKind::SelfCare, "Wellness", "Regular exercise and nutrition"),
        service(ResourceKind::SelfCare, "Meditation", "Mindfulness practices"),
        service(ResourceKind::Community, "Social Activities", "Community engagement"),
        service(ResourceKind::Checkup, "Regular Checkups", "Annual mental health screening"),
    ],
};

pub fn emergency_resources() -> &'static EmergencyResources {
    &EMERGENCY
}

pub fn resources_for(level: RiskLevel) -> &'static LevelResources {
    match level {
        RiskLevel::Critical => &CRITICAL,
        RiskLevel::Severe => &SEVERE,
        RiskLevel::Moderate => &MODERATE,
        RiskLevel::Mild => &MILD,
        RiskLevel::Low => &LOW,
    }
}
