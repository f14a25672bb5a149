use crate::constants::value::LIST_JOINER;
use crate::util::dedup_trimmed;
use std::collections::HashSet;

/// Methods accepted in `Access-Control-Request-Method`.
///
/// Membership is case-sensitive, as HTTP methods are.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    Any,
    List(Vec<String>),
}

impl AllowedMethods {
    /// Builds a list, trimming entries and dropping blanks and exact duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(dedup_trimmed(values, |value| value.to_owned()))
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub(crate) fn values(&self) -> &[String] {
        match self {
            Self::Any => &[],
            Self::List(values) => values,
        }
    }

    pub(crate) fn compile(&self) -> MethodRules {
        match self {
            Self::Any => MethodRules {
                allow_all: true,
                allowed: HashSet::new(),
                display: String::new(),
            },
            Self::List(values) => MethodRules {
                allow_all: false,
                allowed: values.iter().cloned().collect(),
                display: values.join(LIST_JOINER),
            },
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// Precomputed lookup and display form of [`AllowedMethods`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MethodRules {
    allow_all: bool,
    allowed: HashSet<String>,
    display: String,
}

impl MethodRules {
    pub(crate) fn allows_all_methods(&self) -> bool {
        self.allow_all
    }

    pub(crate) fn allows(&self, method: &str) -> bool {
        self.allow_all || self.allowed.contains(method)
    }

    pub(crate) fn display(&self) -> &str {
        &self.display
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
