use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Skill level must be between 0 and 100, got {0}")]
pub struct SkillLevelError(pub i64);

/// Proficiency percentage, always within `0..=100`.
///
/// Deserialization rejects out-of-range values; forms use [`SkillLevel::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 100;

    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(Self::MIN, Self::MAX) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for SkillLevel {
    type Error = SkillLevelError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&raw) {
            Ok(Self(raw as u8))
        } else {
            Err(SkillLevelError(raw))
        }
    }
}

impl From<SkillLevel> for i64 {
    fn from(level: SkillLevel) -> Self {
        i64::from(level.0)
    }
}
