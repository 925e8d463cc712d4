use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PsoriasisType {
    Plaque,
    Inverse,
    Guttate,
    Pustular,
    Erythrodermic,
    Nail,
    PsoriaticArthritis,
}

/// Escalation attached to a subtype finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SubtypeAlert {
    /// Life-threatening; immediate medical attention.
    Emergency,
    /// Specialist evaluation and systemic therapy.
    Urgent,
    RheumatologyReferral,
}

impl SubtypeAlert {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Emergency => {
                "Immediate medical attention required: this is a life-threatening emergency"
            }
            Self::Urgent => "Urgent: requires specialist evaluation and systemic therapy",
            Self::RheumatologyReferral => {
                "Rheumatology referral needed: joint damage can be progressive"
            }
        }
    }
}

impl PsoriasisType {
    pub const ALL: [PsoriasisType; 7] = [
        Self::Plaque,
        Self::Inverse,
        Self::Guttate,
        Self::Pustular,
        Self::Erythrodermic,
        Self::Nail,
        Self::PsoriaticArthritis,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Plaque => "Plaque Psoriasis",
            Self::Inverse => "Inverse Psoriasis",
            Self::Guttate => "Guttate Psoriasis",
            Self::Pustular => "Pustular Psoriasis",
            Self::Erythrodermic => "Erythrodermic Psoriasis",
            Self::Nail => "Nail Psoriasis",
            Self::PsoriaticArthritis => "Psoriatic Arthritis",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Plaque => {
                "Most common type (80-90%). Raised, well-demarcated red plaques with silvery-white scales."
            }
            Self::Inverse => {
                "Smooth, shiny red patches in skin folds. Little to no scale due to moisture."
            }
            Self::Guttate => {
                "Small drop-shaped lesions, often after strep throat. Common in children and young adults."
            }
            Self::Pustular => {
                "Sterile pus-filled blisters on red skin. Localized (hands/feet) or generalized."
            }
            Self::Erythrodermic => {
                "Widespread redness covering more than 90% of the body with severe peeling and pain."
            }
            Self::Nail => "Pitting, onycholysis, discoloration and thickening of the nails.",
            Self::PsoriaticArthritis => {
                "Joint inflammation with swelling, pain and stiffness. Sausage digits, nail changes."
            }
        }
    }

    pub fn locations(&self) -> &'static [&'static str] {
        match self {
            Self::Plaque => &["Elbows", "Knees", "Hands/Arms", "Trunk/Back"],
            Self::Inverse => &["Groin/Genitals", "Armpits", "Under Breasts/Skin Folds"],
            Self::Guttate => &["Trunk", "Arms/Legs", "Back"],
            Self::Pustular => &["Palms/Hands", "Soles/Feet", "Generalized (Whole Body)"],
            Self::Erythrodermic => &["Whole Body (>90% coverage)"],
            Self::Nail => &["Fingernails", "Toenails"],
            Self::PsoriaticArthritis => &["Hands/Fingers", "Feet/Toes", "Tendons"],
        }
    }

    pub fn alert(&self) -> Option<SubtypeAlert> {
        match self {
            Self::Erythrodermic => Some(SubtypeAlert::Emergency),
            Self::Pustular => Some(SubtypeAlert::Urgent),
            Self::PsoriaticArthritis => Some(SubtypeAlert::RheumatologyReferral),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubtypeFinding {
    pub subtype: PsoriasisType,
    pub name: String,
    pub description: String,
    pub locations: Vec<String>,
    pub alert: Option<SubtypeAlert>,
}

/// Turn the subtypes a clinician ticked into findings. Several subtypes can
/// coexist; repeats are dropped and the first-seen order is kept.
pub fn identify_subtypes(selected: &[PsoriasisType]) -> Vec<SubtypeFinding> {
    let mut findings: Vec<SubtypeFinding> = Vec::with_capacity(selected.len());
    for subtype in selected {
        if findings.iter().any(|f| f.subtype == *subtype) {
            continue;
        }
        findings.push(SubtypeFinding {
            subtype: *subtype,
            name: subtype.name().to_string(),
            description: subtype.description().to_string(),
            locations: subtype.locations().iter().map(|l| l.to_string()).collect(),
            alert: subtype.alert(),
        });
    }
    findings
}
