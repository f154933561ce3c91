pub mod types;

pub use types::{
    AnalysisResult, DocumentType, EntityKind, EntityMap, FieldRequirement, FieldValue,
    FoundInformation, Importance, MissingRequirement, RequirementCategory,
};
