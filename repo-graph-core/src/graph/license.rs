//! License identifiers and their SPDX mapping

use crate::fetch::RepoLicense;
use std::fmt;

/// Base URL SPDX license pages live under
pub const SPDX_BASE_URL: &str = "https://spdx.org/licenses/";

/// Placeholder GitHub reports for licenses it cannot classify
const NO_ASSERTION: &str = "NOASSERTION";

/// SPDX identifiers recognized for URL mapping
const KNOWN_SPDX_IDS: &[&str] = &[
    "0BSD", "AFL-3.0", "AGPL-3.0", "AGPL-3.0-only", "AGPL-3.0-or-later", "Apache-2.0",
    "Artistic-2.0", "BSD-2-Clause", "BSD-3-Clause", "BSD-3-Clause-Clear", "BSD-4-Clause",
    "BSL-1.0", "CC-BY-4.0", "CC-BY-SA-4.0", "CC0-1.0", "ECL-2.0", "EPL-1.0", "EPL-2.0",
    "EUPL-1.1", "EUPL-1.2", "GPL-2.0", "GPL-2.0-only", "GPL-2.0-or-later", "GPL-3.0",
    "GPL-3.0-only", "GPL-3.0-or-later", "ISC", "LGPL-2.1", "LGPL-2.1-only",
    "LGPL-2.1-or-later", "LGPL-3.0", "LGPL-3.0-only", "LGPL-3.0-or-later", "LPPL-1.3c", "MIT",
    "MIT-0", "MPL-2.0", "MS-PL", "MS-RL", "MulanPSL-2.0", "NCSA", "ODbL-1.0", "OFL-1.1",
    "OSL-3.0", "PostgreSQL", "UPL-1.0", "Unlicense", "Vim", "WTFPL", "Zlib",
];

/// A project license: a recognized SPDX id or whatever text the source gave
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum License {
    Spdx(String),
    Raw(String),
}

impl License {
    /// Map an identifier to its canonical SPDX id when recognized (case-insensitive)
    pub fn resolve(identifier: &str) -> Self {
        let identifier = identifier.trim();
        KNOWN_SPDX_IDS
            .iter()
            .find(|id| id.eq_ignore_ascii_case(identifier))
            .map(|id| Self::Spdx(id.to_string()))
            .unwrap_or_else(|| Self::Raw(identifier.to_string()))
    }

    /// License from the hosting API's license block
    ///
    /// Prefers `spdx_id`, then the human-readable name, then the API key.
    pub fn from_repo(license: &RepoLicense) -> Option<Self> {
        let spdx_id = license
            .spdx_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && *id != NO_ASSERTION);

        if let Some(id) = spdx_id {
            if let resolved @ Self::Spdx(_) = Self::resolve(id) {
                return Some(resolved);
            }
        }

        spdx_id
            .or(license.name.as_deref())
            .or(license.key.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| Self::Raw(text.to_string()))
    }

    /// SPDX page URL for recognized licenses
    pub fn url(&self) -> Option<String> {
        match self {
            Self::Spdx(id) => Some(format!("{}{}.html", SPDX_BASE_URL, id)),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spdx(id) => write!(f, "{}{}.html", SPDX_BASE_URL, id),
            Self::Raw(text) => write!(f, "{}", text),
        }
    }
}
