/// CPU architectures that produce tool version reports.
use std::fmt;

use serde::{Deserialize, Serialize};

/// A CPU target keying one tool version report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Amd64,
    Arm64,
}

impl Arch {
    /// All architectures, in column order.
    pub const ALL: [Self; 2] = [Self::Amd64, Self::Arm64];

    /// Column label used in rendered tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Amd64 => "amd64",
            Self::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
