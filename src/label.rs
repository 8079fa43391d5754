use serde::{Serialize, Serializer};
use std::fmt;

/// Text returned in place of a label when no image was supplied.
pub const PROMPT: &str = "please upload/capture an image first";

/// Qualitative mixing grade shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MixingLabel {
    Good,
    Average,
    Poor,
}

impl MixingLabel {
    /// Every label the page may display, best first.
    pub const OPTIONS: [MixingLabel; 3] =
        [MixingLabel::Good, MixingLabel::Average, MixingLabel::Poor];

    pub fn as_str(&self) -> &'static str {
        match self {
            MixingLabel::Good => "mixing degree: good",
            MixingLabel::Average => "mixing degree: average",
            MixingLabel::Poor => "mixing degree: poor",
        }
    }
}

impl fmt::Display for MixingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MixingLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// What an evaluator hands back for one interaction.
///
/// Both variants travel over the same text channel, so the client can only
/// tell them apart by content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assessment {
    /// No image was supplied.
    Prompt,
    Label(MixingLabel),
}

impl Assessment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Assessment::Prompt => PROMPT,
            Assessment::Label(label) => label.as_str(),
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Assessment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
