//! Static lens catalog: display labels, generation parameters, and the
//! curation steps a client plays while switching lenses.

use serde::Serialize;

use crate::models::{ActiveLens, LensId};

/// A named dial describing how a lens weights the material (0 – 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationParam {
    pub label: &'static str,
    pub value: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct LensDescriptor {
    pub id: LensId,
    pub label: &'static str,
    pub params: &'static [GenerationParam],
    pub curation_steps: &'static [&'static str],
}

const fn param(label: &'static str, value: u8) -> GenerationParam {
    GenerationParam { label, value }
}

const HOME_PARAMS: &[GenerationParam] = &[
    param("SYSTEM_IDLE", 0),
    param("LATENCY_THRESHOLD", 0),
    param("TECHNICAL_DENSITY", 0),
];

const RECRUITER_PARAMS: &[GenerationParam] = &[
    param("STRATEGIC_SCOPE", 95),
    param("MARKET_IMPACT", 100),
    param("TECHNICAL_DENSITY", 15),
];

const ENGINEER_PARAMS: &[GenerationParam] = &[
    param("SYSTEM_ARCHITECTURE", 98),
    param("LOGIC_COMPLEXITY", 90),
    param("TECHNICAL_DENSITY", 95),
];

const DESIGNER_PARAMS: &[GenerationParam] = &[
    param("USER_EMPATHY", 100),
    param("VISUAL_CRAFT", 85),
    param("TECHNICAL_DENSITY", 45),
];

const SOURCE_PARAMS: &[GenerationParam] = &[
    param("RAW_DATA_INTEGRITY", 100),
    param("CONTEXTUAL_BIAS", 0),
    param("FILTERING", 0),
];

const RECRUITER_STEPS: &[&str] = &[
    "AUDIENCE_ANALYSIS: Talent & Leadership",
    "CURATING: Strategic_Highlights & ROI...",
    "CUTTING: Technical_Jargon...",
    "TYPESETTING: Executive_Brief_Layout",
    "STATUS: Ready for Print.",
];

const ENGINEER_STEPS: &[&str] = &[
    "AUDIENCE_ANALYSIS: Systems_Architecture",
    "SOURCING: Schematic_Diagrams & Logs...",
    "EXPANDING: Technical_Appendix...",
    "TYPESETTING: Documentation_Layout",
    "STATUS: Specs Verified.",
];

const DESIGNER_STEPS: &[&str] = &[
    "AUDIENCE_ANALYSIS: Design_Systems",
    "SOURCING: Process_Artifacts & Journeys...",
    "WEAVING: Narrative_Thread...",
    "TYPESETTING: Visual_Essay_Layout",
    "STATUS: Rendering Assets.",
];

const SOURCE_STEPS: &[&str] = &[
    "AUDIENCE_ANALYSIS: Archival_Audit",
    "RECOVERING: Unprocessed_Record...",
    "BYPASSING: Editorial_Filters...",
    "TYPESETTING: Raw_Transcripts",
    "STATUS: Archive_Unlocked.",
];

pub fn describe(id: LensId) -> LensDescriptor {
    let (label, params, curation_steps) = match id {
        LensId::Recruiter => ("RECRUITER_EDIT", RECRUITER_PARAMS, RECRUITER_STEPS),
        LensId::Engineer => ("ENGINEER_EDIT", ENGINEER_PARAMS, ENGINEER_STEPS),
        LensId::Designer => ("DESIGNER_EDIT", DESIGNER_PARAMS, DESIGNER_STEPS),
        LensId::Source => ("RAW_ARCHIVE", SOURCE_PARAMS, SOURCE_STEPS),
    };
    LensDescriptor {
        id,
        label,
        params,
        curation_steps,
    }
}

/// Every lens descriptor, in display order.
pub fn lens_catalog() -> Vec<LensDescriptor> {
    LensId::ALL.into_iter().map(describe).collect()
}

/// Parameters shown for the current selection, including the idle home set.
pub fn params_for(active: ActiveLens) -> &'static [GenerationParam] {
    match active {
        ActiveLens::Home => HOME_PARAMS,
        ActiveLens::Lens(id) => describe(id).params,
    }
}
