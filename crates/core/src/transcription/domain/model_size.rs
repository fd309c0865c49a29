use std::fmt;
use std::str::FromStr;

use crate::shared::constants::MODEL_BASE_URL;

/// Available Whisper model sizes, in ascending accuracy and cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelSize {
    Tiny,
    Base,
    Small,
    Medium,
    Large,
}

impl ModelSize {
    pub const ALL: &[ModelSize] = &[
        ModelSize::Tiny,
        ModelSize::Base,
        ModelSize::Small,
        ModelSize::Medium,
        ModelSize::Large,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::Large => "large-v3",
        }
    }

    /// ggml model file name as published by the whisper.cpp project.
    pub fn file_name(self) -> String {
        format!("ggml-{}.bin", self.name())
    }

    pub fn url(self) -> String {
        format!("{MODEL_BASE_URL}/{}", self.file_name())
    }

    /// Rough download size, for front-end display.
    pub fn approx_size_mb(self) -> u32 {
        match self {
            ModelSize::Tiny => 75,
            ModelSize::Base => 142,
            ModelSize::Small => 466,
            ModelSize::Medium => 1500,
            ModelSize::Large => 2900,
        }
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSize::Tiny => write!(f, "tiny"),
            ModelSize::Base => write!(f, "base"),
            ModelSize::Small => write!(f, "small"),
            ModelSize::Medium => write!(f, "medium"),
            ModelSize::Large => write!(f, "large"),
        }
    }
}

impl FromStr for ModelSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tiny" => Ok(ModelSize::Tiny),
            "base" => Ok(ModelSize::Base),
            "small" => Ok(ModelSize::Small),
            "medium" => Ok(ModelSize::Medium),
            "large" => Ok(ModelSize::Large),
            other => Err(format!(
                "Unknown model size '{other}' (expected tiny, base, small, medium, or large)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_match_whisper_cpp_naming() {
        assert_eq!(ModelSize::Tiny.file_name(), "ggml-tiny.bin");
        assert_eq!(ModelSize::Base.file_name(), "ggml-base.bin");
        assert_eq!(ModelSize::Large.file_name(), "ggml-large-v3.bin");
    }

    #[test]
    fn test_url_points_at_model_repo() {
        let url = ModelSize::Small.url();
        assert!(url.starts_with("https://"));
        assert!(url.ends_with("ggml-small.bin"));
    }

    #[test]
    fn test_from_str_round_trips_display() {
        for &size in ModelSize::ALL {
            let parsed: ModelSize = size.to_string().parse().unwrap();
            assert_eq!(parsed, size);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("MEDIUM".parse::<ModelSize>().unwrap(), ModelSize::Medium);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "huge".parse::<ModelSize>().unwrap_err();
        assert!(err.contains("huge"));
    }

    #[test]
    fn test_sizes_increase_with_accuracy() {
        let sizes: Vec<u32> = ModelSize::ALL.iter().map(|m| m.approx_size_mb()).collect();
        let mut sorted = sizes.clone();
        sorted.sort_unstable();
        assert_eq!(sizes, sorted);
    }
}
