use serde::{Serialize, Deserialize};

/// Scope keyword for members inferred as private
pub const PRIVATE_SCOPE: &str = "private";

/// Scope keyword for test methods
pub const TEST_METHOD_SCOPE: &str = "testmethod";

/// Ordered list of scope keywords the caller wants documented.
///
/// Order is precedence: when several keywords could match a line, the first one
/// in the list wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeConfig {
    scopes: Vec<String>,
}

impl ScopeConfig {
    /// Create a scope configuration from an ordered list of keywords
    pub fn new<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scopes: scopes.into_iter()
                .map(|s| {
                    let s: String = s.into();
                    s.trim().to_string()
                })
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// The configured keywords in precedence order
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Find the configured keyword equal to `scope`, ignoring case
    pub fn find(&self, scope: &str) -> Option<&str> {
        self.scopes.iter()
            .find(|s| s.eq_ignore_ascii_case(scope))
            .map(String::as_str)
    }

    /// Whether `scope` is configured, ignoring case
    pub fn contains(&self, scope: &str) -> bool {
        self.find(scope).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self::new(["global", "public", "webservice"])
    }
}

/// The enclosing declaration a line is read in.
///
/// Only the simple name and the interface flag are consulted, to recognise
/// constructors without an access modifier and interface method signatures.
pub trait DeclarationContext {
    /// Unqualified name of the declaration (`Inner` for `Outer.Inner`)
    fn simple_name(&self) -> &str;

    /// Whether the declaration is an interface
    fn is_interface(&self) -> bool;
}

/// A class, interface or enum currently open while scanning a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassContext {
    /// Name of the declaration, possibly dotted for inner types
    pub name: String,

    /// Whether the declaration is an interface
    pub is_interface: bool,
}

impl ClassContext {
    pub fn new(name: impl Into<String>, is_interface: bool) -> Self {
        Self {
            name: name.into(),
            is_interface,
        }
    }
}

impl DeclarationContext for ClassContext {
    fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    fn is_interface(&self) -> bool {
        self.is_interface
    }
}
