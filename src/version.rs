/// Represents a semantic version with major, minor, and patch components.
///
/// Follows semantic versioning specification (major.minor.patch).
#[derive(Debug, Clone, PartialEq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Represents the type of semantic version bump to apply.
///
/// Selected interactively by the operator at the start of a release run.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Creates a new Version with the specified major, minor, and patch components.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl BumpKind {
    /// Parses a bump kind from user input, case-insensitively.
    ///
    /// # Returns
    /// * `Some(BumpKind)` - If the input is "major", "minor", or "patch"
    /// * `None` - For anything else (including blank input)
    pub fn parse(input: &str) -> Option<BumpKind> {
        match input.trim().to_lowercase().as_str() {
            "major" => Some(BumpKind::Major),
            "minor" => Some(BumpKind::Minor),
            "patch" => Some(BumpKind::Patch),
            _ => None,
        }
    }

    /// Lowercase name as shown in prompts and status output.
    pub fn name(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

/// Parses a version from a metadata field value.
///
/// Expects exactly three dot-separated non-negative integer components
/// (major.minor.patch); no prefixes or pre-release suffixes are accepted.
///
/// # Arguments
/// * `value` - Version string to parse (e.g., "1.2.3")
///
/// # Returns
/// * `Some(Version)` - Successfully parsed version
/// * `None` - If the value has the wrong number of components or non-numeric parts
///
/// # Example
/// ```ignore
/// assert_eq!(parse_version("1.2.3").unwrap(), Version::new(1, 2, 3));
/// assert_eq!(parse_version("1.2"), None); // Too few components
/// ```
pub fn parse_version(value: &str) -> Option<Version> {
    let parts: Vec<&str> = value.trim().split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let major = parts[0].parse::<u32>().ok()?;
    let minor = parts[1].parse::<u32>().ok()?;
    let patch = parts[2].parse::<u32>().ok()?;

    Some(Version::new(major, minor, patch))
}

/// Bumps a version according to the specified bump kind.
///
/// Increments the appropriate version component and resets lower components to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// # Example
/// ```ignore
/// let v = Version::new(1, 2, 3);
/// assert_eq!(bump_version(v, &BumpKind::Minor), Version::new(1, 3, 0));
/// ```
pub fn bump_version(mut version: Version, kind: &BumpKind) -> Version {
    match kind {
        BumpKind::Major => {
            version.major += 1;
            version.minor = 0;
            version.patch = 0;
        }
        BumpKind::Minor => {
            version.minor += 1;
            version.patch = 0;
        }
        BumpKind::Patch => {
            version.patch += 1;
        }
    }
    version
}
