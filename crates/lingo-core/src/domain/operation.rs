use std::fmt;

/// The three upstream operations the relay proxies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Translate,
    Detect,
    Languages,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Translate => "translate",
            Operation::Detect => "detect",
            Operation::Languages => "languages",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deterministic cache key: the operation plus every parameter that affects
/// the upstream result. Free text always goes last.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn translate(source: &str, target: &str, text: &str) -> Self {
        Self(format!("{}:{source}:{target}:{text}", Operation::Translate))
    }

    pub fn detect(text: &str) -> Self {
        Self(format!("{}:{text}", Operation::Detect))
    }

    pub fn languages(target: &str) -> Self {
        Self(format!("{}:{target}", Operation::Languages))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
