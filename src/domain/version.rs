use crate::error::{Result, TagitError};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string, defaulting any non-numeric or absent
    /// component to 0. Components past the third are ignored.
    ///
    /// ```
    /// # use tagit::domain::Version;
    /// assert_eq!(Version::parse_lenient("1.2.3"), Version::new(1, 2, 3));
    /// assert_eq!(Version::parse_lenient("4.x"), Version::new(4, 0, 0));
    /// assert_eq!(Version::parse_lenient(""), Version::new(0, 0, 0));
    /// ```
    pub fn parse_lenient(s: &str) -> Self {
        let mut parts = s.split('.').map(|p| p.parse::<u32>().unwrap_or(0));
        let major = parts.next().unwrap_or(0);
        let minor = parts.next().unwrap_or(0);
        let patch = parts.next().unwrap_or(0);
        Version::new(major, minor, patch)
    }

    /// Parse a version string that must be exactly `X.Y.Z` with decimal components.
    pub fn parse_strict(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(TagitError::parse(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                s
            )));
        }

        let component = |name: &str, part: &str| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TagitError::parse(format!(
                    "Invalid {} version: '{}'",
                    name, part
                )));
            }
            part.parse::<u32>().map_err(|_| {
                TagitError::parse(format!("Invalid {} version: '{}'", name, part))
            })
        };

        Ok(Version {
            major: component("major", parts[0])?,
            minor: component("minor", parts[1])?,
            patch: component("patch", parts[2])?,
        })
    }

    /// Whether `s` would parse identically under strict rules.
    pub fn is_well_formed(s: &str) -> bool {
        Self::parse_strict(s).is_ok()
    }

    /// Bump version according to bump kind
    pub fn increment(&self, kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => Version {
                major: self.major.saturating_add(1),
                minor: 0,
                patch: 0,
            },
            BumpKind::Minor => Version {
                major: self.major,
                minor: self.minor.saturating_add(1),
                patch: 0,
            },
            BumpKind::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.saturating_add(1),
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        let clamp = |n: u64| u32::try_from(n).unwrap_or(u32::MAX);
        Version::new(clamp(v.major), clamp(v.minor), clamp(v.patch))
    }
}

/// Which version component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    pub fn name(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BumpKind {
    type Err = TagitError;

    /// Accepts the short tokens `x`/`y`/`z` as well as `major`/`minor`/`patch`.
    fn from_str(token: &str) -> Result<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "x" | "major" => Ok(BumpKind::Major),
            "y" | "minor" => Ok(BumpKind::Minor),
            "z" | "patch" => Ok(BumpKind::Patch),
            _ => Err(TagitError::InvalidBumpKind(format!(
                "'{}' (expected x/y/z or major/minor/patch)",
                token
            ))),
        }
    }
}
