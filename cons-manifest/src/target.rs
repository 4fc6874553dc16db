//! Target languages and structural flavors.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Target {
    Python,
    Go,
    Java,
    Swift,
    Kotlin,
    TypeScript,
    JavaScript,
}

impl Target {
    /// Every supported target, in display order.
    pub const ALL: [Target; 7] = [
        Target::Python,
        Target::Go,
        Target::Java,
        Target::Swift,
        Target::Kotlin,
        Target::TypeScript,
        Target::JavaScript,
    ];

    /// Returns the target identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Python => "python",
            Target::Go => "go",
            Target::Java => "java",
            Target::Swift => "swift",
            Target::Kotlin => "kotlin",
            Target::TypeScript => "typescript",
            Target::JavaScript => "javascript",
        }
    }

    /// File extension of generated sources, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Target::Python => "py",
            Target::Go => "go",
            Target::Java => "java",
            Target::Swift => "swift",
            Target::Kotlin => "kt",
            Target::TypeScript => "ts",
            Target::JavaScript => "js",
        }
    }

    /// Fixed file name of the aggregating entry file, for targets that use one.
    pub fn index_file(&self) -> Option<&'static str> {
        match self {
            Target::Python => Some("__init__.py"),
            Target::TypeScript => Some("index.ts"),
            Target::JavaScript => Some("index.js"),
            _ => None,
        }
    }

    pub fn has_index(&self) -> bool {
        self.index_file().is_some()
    }

    /// Package used when none is configured, for targets with a package concept.
    pub fn default_package(&self) -> Option<&'static str> {
        match self {
            Target::Go => Some("cons"),
            Target::Java | Target::Kotlin => Some("com.example.constants"),
            _ => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Target::Python),
            "go" | "golang" => Ok(Target::Go),
            "java" => Ok(Target::Java),
            "swift" => Ok(Target::Swift),
            "kotlin" | "kt" => Ok(Target::Kotlin),
            "typescript" | "ts" => Ok(Target::TypeScript),
            "javascript" | "js" => Ok(Target::JavaScript),
            _ => Err(format!(
                "unsupported target '{}', expected one of: python, go, java, swift, kotlin, typescript, javascript",
                s
            )),
        }
    }
}

impl TryFrom<String> for Target {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Target> for String {
    fn from(target: Target) -> Self {
        target.as_str().to_string()
    }
}

/// Structural shape of the generated declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Flavor {
    /// Flat `GROUP_CONSTANT` declarations without accessors.
    Constants,
    /// One class-like declaration per group with accessor methods.
    #[default]
    Class,
}

impl Flavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Constants => "const",
            Flavor::Class => "class",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "const" | "constants" | "minimal" => Ok(Flavor::Constants),
            "class" | "rich" => Ok(Flavor::Class),
            _ => Err(format!(
                "unknown flavor '{}', expected 'const' or 'class'",
                s
            )),
        }
    }
}

impl TryFrom<String> for Flavor {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Flavor> for String {
    fn from(flavor: Flavor) -> Self {
        flavor.as_str().to_string()
    }
}
