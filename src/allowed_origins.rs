use crate::util::{dedup_trimmed, normalize_lower};
use std::collections::HashSet;

/// Origins permitted to read CORS responses.
///
/// Entries are full origins (`scheme://host[:port]`) compared
/// case-insensitively against the `Origin` request header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl AllowedOrigins {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(dedup_trimmed(values, normalize_lower))
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub(crate) fn compile(&self) -> OriginRules {
        match self {
            Self::Any => OriginRules {
                allow_all: true,
                allowed: HashSet::new(),
            },
            Self::List(values) => OriginRules {
                allow_all: false,
                allowed: values.iter().map(|value| normalize_lower(value)).collect(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct OriginRules {
    allow_all: bool,
    allowed: HashSet<String>,
}

impl OriginRules {
    pub(crate) fn allows(&self, origin: &str) -> bool {
        self.allow_all || self.allowed.contains(&normalize_lower(origin))
    }
}

#[cfg(test)]
#[path = "allowed_origins_test.rs"]
mod allowed_origins_test;
