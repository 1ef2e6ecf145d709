//! Declarative rule table
//!
//! Each rule binds a path pattern to one check. A pattern is a dotted
//! suffix of the index-free field path (`mix.o2` applies to every
//! `uddf.gasdefinitions.mix[i].o2`) and only matches on segment
//! boundaries. Segments use the tag names of the document, with `@` for
//! attributes and `$text` for character data.

use std::fmt;

/// A closed set of keywords.
#[derive(Debug, PartialEq, Eq)]
pub struct Enumeration {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

impl Enumeration {
    pub fn contains(&self, value: &str) -> bool {
        self.members.contains(&value)
    }
}

impl fmt::Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.members.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Must not be absent, blank or an empty sequence
    Required,
    /// Inclusive bounds; absent values are exempt
    Range { min: f64, max: f64 },
    /// Trimmed value must be a member; absent values are exempt
    OneOf(&'static Enumeration),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub path: &'static str,
    pub rule: Rule,
}

const fn required(path: &'static str) -> FieldRule {
    FieldRule {
        path,
        rule: Rule::Required,
    }
}

const fn range(path: &'static str, min: f64, max: f64) -> FieldRule {
    FieldRule {
        path,
        rule: Rule::Range { min, max },
    }
}

const fn one_of(path: &'static str, enumeration: &'static Enumeration) -> FieldRule {
    FieldRule {
        path,
        rule: Rule::OneOf(enumeration),
    }
}

// ============================================================================
// Enumerations
// ============================================================================

pub static PROBLEMS: Enumeration = Enumeration {
    name: "problems",
    members: &[
        "none",
        "equalisation",
        "vertigo",
        "out-of-air",
        "buoyancy",
        "shared-air",
        "rapid-ascent",
        "sea-sickness",
        "other",
    ],
};

pub static PROGRAM: Enumeration = Enumeration {
    name: "program",
    members: &[
        "recreation",
        "training",
        "scientific",
        "medical",
        "commercial",
        "military",
        "competitive",
        "other",
    ],
};

pub static APPARATUS: Enumeration = Enumeration {
    name: "apparatus",
    members: &[
        "open-scuba",
        "rebreather",
        "surface-supplied",
        "chamber",
        "experimental",
        "other",
    ],
};

pub static PLATFORM: Enumeration = Enumeration {
    name: "platform",
    members: &[
        "beach-shore",
        "pier",
        "small-boat",
        "charter-boat",
        "live-aboard",
        "barge",
        "landside",
        "hyperbaric-facility",
        "other",
    ],
};

pub static PURPOSE: Enumeration = Enumeration {
    name: "purpose",
    members: &[
        "sightseeing",
        "learning",
        "research",
        "photography-videography",
        "spearfishing",
        "proficiency",
        "work",
        "other",
    ],
};

pub static STATE_OF_REST: Enumeration = Enumeration {
    name: "state of rest",
    members: &["not-specified", "rested", "tired", "exhausted"],
};

pub static CURRENT: Enumeration = Enumeration {
    name: "current",
    members: &[
        "no-current",
        "very-mild-current",
        "mild-current",
        "moderate-current",
        "hard-current",
        "very-hard-current",
    ],
};

pub static DIVE_PLAN: Enumeration = Enumeration {
    name: "dive plan",
    members: &["none", "table", "dive-computer", "another-diver"],
};

pub static DIVE_TABLE: Enumeration = Enumeration {
    name: "dive table",
    members: &[
        "PADI", "NAUI", "BSAC", "Buehlmann", "DCIEM", "US-Navy", "CSMD", "COMEX", "other",
    ],
};

pub static EQUIPMENT_MALFUNCTION: Enumeration = Enumeration {
    name: "equipment malfunction",
    members: &[
        "none",
        "face-mask",
        "fins",
        "weight-belt",
        "buoyancy-control-device",
        "thermal-protection",
        "dive-computer",
        "depth-gauge",
        "pressure-gauge",
        "breathing-apparatus",
        "deco-reel",
        "other",
    ],
};

pub static THERMAL_COMFORT: Enumeration = Enumeration {
    name: "thermal comfort",
    members: &["not-indicated", "comfortable", "cold", "very-cold", "hot"],
};

pub static WORKLOAD: Enumeration = Enumeration {
    name: "workload",
    members: &[
        "not-specified",
        "resting",
        "light",
        "moderate",
        "severe",
        "exhausting",
    ],
};

pub static GLOBAL_ALARMS: Enumeration = Enumeration {
    name: "global alarm",
    members: &["ascent-warning-too-long", "sos-mode", "work-too-hard"],
};

pub static TRANSPORTATION: Enumeration = Enumeration {
    name: "transportation",
    members: &[
        "commercial-aircraft",
        "unpressurized-aircraft",
        "medevac-aircraft",
        "ground-transportation",
        "helicopter",
    ],
};

pub static DIVE_MODE: Enumeration = Enumeration {
    name: "dive mode",
    members: &["apnoe", "closedcircuit", "opencircuit", "semiclosedcircuit"],
};

pub static TISSUE_GAS: Enumeration = Enumeration {
    name: "tissue gas",
    members: &["h2", "he", "n2"],
};

pub static METERING_METHOD: Enumeration = Enumeration {
    name: "metering method",
    members: &["spot", "centerweighted", "matrix"],
};

pub static GENERATOR_TYPE: Enumeration = Enumeration {
    name: "generator type",
    members: &["converter", "divecomputer", "logbook"],
};

pub static ENVIRONMENT: Enumeration = Enumeration {
    name: "environment",
    members: &[
        "unknown",
        "ocean-sea",
        "lake-quarry",
        "river-spring",
        "cave-cavern",
        "pool",
        "hyperbaric-chamber",
        "under-ice",
        "other",
    ],
};

pub static LIGHT_INTENSITY: Enumeration = Enumeration {
    name: "global light intensity",
    members: &["undetermined", "sunny", "half-shadow", "shadow", "no-light"],
};

pub static DOMINANCE: Enumeration = Enumeration {
    name: "dominance",
    members: &[
        "undetermined",
        "less-than-1/20",
        "1/20-up-to-1/4",
        "1/4-up-to-1/2",
        "1/2-up-to-3/4",
        "greater-than-3/4",
        "single-individual",
    ],
};

pub static LIFE_STAGE: Enumeration = Enumeration {
    name: "life stage",
    members: &["larva", "juvenile", "adult"],
};

pub static SPECIES_SEX: Enumeration = Enumeration {
    name: "species sex",
    members: &["undetermined", "male", "female", "hermaphrodite"],
};

pub static EXAMINATION_RESULT: Enumeration = Enumeration {
    name: "examination result",
    members: &["passed", "failed"],
};

pub static TANK_MATERIAL: Enumeration = Enumeration {
    name: "tank material",
    members: &["aluminium", "carbon", "steel"],
};

pub static PERIODICALLY_TAKEN: Enumeration = Enumeration {
    name: "periodically taken",
    members: &["yes", "no"],
};

// ============================================================================
// Rule table
// ============================================================================

/// Rules applied by [`Validator::default`](super::Validator).
///
/// Rules matching the same field are checked in table order.
pub static UDDF_RULES: &[FieldRule] = &[
    // Document sections
    required("uddf.diver"),
    required("uddf.profiledata"),
    // Gas definitions
    required("mix.name"),
    range("mix.ar", 0.0, 1.0),
    range("mix.h2", 0.0, 1.0),
    range("mix.he", 0.0, 1.0),
    range("mix.n2", 0.0, 1.0),
    range("mix.o2", 0.0, 1.0),
    // Decompression models
    range("buehlmann.gradientfactorhigh", 0.0, 1.0),
    range("buehlmann.gradientfactorlow", 0.0, 1.0),
    range("vpm.conservatism", 0.0, 1.0),
    required("tissue.@gas"),
    required("tissue.@halflife"),
    required("tissue.@number"),
    one_of("tissue.@gas", &TISSUE_GAS),
    // Dives
    required("informationbeforedive.datetime"),
    one_of("informationbeforedive.apparatus", &APPARATUS),
    one_of("informationbeforedive.platform", &PLATFORM),
    one_of("informationbeforedive.purpose", &PURPOSE),
    one_of("informationbeforedive.stateofrestbeforedive", &STATE_OF_REST),
    one_of("drink.periodicallytaken", &PERIODICALLY_TAKEN),
    one_of("medicine.periodicallytaken", &PERIODICALLY_TAKEN),
    one_of("exposuretoaltitude.transportation", &TRANSPORTATION),
    one_of("informationafterdive.current", &CURRENT),
    one_of("informationafterdive.diveplan", &DIVE_PLAN),
    one_of("informationafterdive.divetable", &DIVE_TABLE),
    one_of("informationafterdive.equipmentmalfunction", &EQUIPMENT_MALFUNCTION),
    one_of("informationafterdive.problems", &PROBLEMS),
    one_of("informationafterdive.program", &PROGRAM),
    one_of("informationafterdive.thermalcomfort", &THERMAL_COMFORT),
    one_of("informationafterdive.workload", &WORKLOAD),
    one_of("globalalarmsgiven.globalalarm", &GLOBAL_ALARMS),
    // Samples
    required("waypoint.depth"),
    required("waypoint.divetime"),
    one_of("divemode.@type", &DIVE_MODE),
    required("switchmix.@ref"),
    // Shared records
    required("link.@ref"),
    required("rating.ratingvalue"),
    range("rating.ratingvalue", 1.0, 10.0),
    one_of("generator.type", &GENERATOR_TYPE),
    // Sites
    one_of("site.environment", &ENVIRONMENT),
    range("sitedata.difficulty", 1.0, 10.0),
    one_of("sitedata.globallightintensity", &LIGHT_INTENSITY),
    one_of("species.dominance", &DOMINANCE),
    one_of("species.lifestage", &LIFE_STAGE),
    one_of("species.sex", &SPECIES_SEX),
    // Diver and equipment
    one_of("examination.examinationresult", &EXAMINATION_RESULT),
    one_of("tank.tankmaterial", &TANK_MATERIAL),
    // Media
    one_of("imagedata.meteringmethod", &METERING_METHOD),
    // Table generation
    range("hargikas.arterialmicrobubblelevel", 0.0, 7.0),
    range("hargikas.estimatedskincoollevel", 0.0, 7.0),
];
