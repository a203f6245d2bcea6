use serde::{Deserialize, Deserializer, Serialize};

/// Fixed preamble of every system instruction; a mode clause is appended.
pub const SYSTEM_PREAMBLE: &str = "You are a professional prompt-optimization expert.";

/// A named rewriting style applied to the system instruction sent to the
/// language model.
///
/// `General` is the catch-all: any unrecognized serialized value decodes to it,
/// so the mode-to-clause mapping never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationMode {
    Clarity,
    Creativity,
    Professional,
    Concise,
    Academic,
    General,
}

impl<'de> Deserialize<'de> for OptimizationMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "clarity" => Self::Clarity,
            "creativity" => Self::Creativity,
            "professional" => Self::Professional,
            "concise" => Self::Concise,
            "academic" => Self::Academic,
            _ => Self::General,
        })
    }
}

impl OptimizationMode {
    /// The mode-specific clause appended to [`SYSTEM_PREAMBLE`].
    #[must_use]
    pub fn clause(self) -> &'static str {
        match self {
            Self::Clarity => {
                "Please optimize the following prompt to make it clearer and more detailed, so \
                 that it elicits specific answers."
            }
            Self::Creativity => {
                "Please optimize the following prompt to make it more creative, inspiring the AI \
                 to produce unique and imaginative answers."
            }
            Self::Professional => {
                "Please optimize the following prompt to make it more professional, using domain \
                 terminology and precise phrasing to obtain academic or industry-grade answers."
            }
            Self::Concise => {
                "Please optimize the following prompt to make it more concise and direct, \
                 expressing the core need without redundant wording."
            }
            Self::Academic => {
                "Please optimize the following prompt to match the style of academic writing, \
                 including research questions, methodology, and other scholarly elements."
            }
            Self::General => {
                "Please optimize the following prompt to improve its quality and effectiveness."
            }
        }
    }

    /// The full system instruction for this mode.
    #[must_use]
    pub fn system_instruction(self) -> String {
        format!("{SYSTEM_PREAMBLE} {}", self.clause())
    }
}
