use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarbandError {
    #[error("Duplicate priority {priority} in skill group {group} of {unit}")]
    DuplicatePriority {
        unit: String,
        group: usize,
        priority: u32,
    },

    #[error("Negative priority {0} in skill setup")]
    NegativePriority(i64),

    #[error("Priority {priority} of {skill} puts its slot outside screen coordinates")]
    SlotOutOfRange { skill: String, priority: u32 },

    #[error("Invalid skill level {level} for {skill} (levels start at 1)")]
    InvalidLevel { skill: String, level: u32 },

    #[error("Invalid icon size {width}x{height} for {skill}")]
    InvalidIconSize {
        skill: String,
        width: u32,
        height: u32,
    },

    #[error("Skill {0} produces something but has no target")]
    MissingTarget(String),

    #[error("Unknown skill media: {0}")]
    UnknownSkill(String),

    #[error("Unknown launcher: {0}")]
    UnknownLauncher(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WarbandError>;
