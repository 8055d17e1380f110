//! Role catalog entries.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Key in an OS-keyed test mapping used when the host OS has no entry.
pub const DEFAULT_TESTS_KEY: &str = "default";

/// One set of host-profile constraints. Matches when every key matches.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SkipCondition(BTreeMap<String, Value>);

impl SkipCondition {
    pub fn new<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), Value::String(v.into()))).collect())
    }

    /// Constraints in key order. Non-string values yield `None`.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Test commands declared by a role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TestPlan {
    /// The role declares no tests and is always skipped.
    #[default]
    None,
    /// The same commands on every OS.
    Uniform(Vec<String>),
    /// Commands per OS identifier with an optional fallback.
    PerOs { by_os: BTreeMap<String, Vec<String>>, default: Option<Vec<String>> },
}

impl TestPlan {
    /// Commands applicable to `os`, or `None` when the plan has nothing for it.
    pub fn commands_for(&self, os: &str) -> Option<&[String]> {
        match self {
            TestPlan::None => None,
            TestPlan::Uniform(commands) => Some(commands),
            TestPlan::PerOs { by_os, default } => {
                by_os.get(os).or(default.as_ref()).map(Vec::as_slice)
            }
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, TestPlan::None)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TestPlanRecord {
    Uniform(Vec<String>),
    PerOs(BTreeMap<String, Vec<String>>),
}

impl From<Option<TestPlanRecord>> for TestPlan {
    fn from(record: Option<TestPlanRecord>) -> Self {
        match record {
            None => TestPlan::None,
            Some(TestPlanRecord::Uniform(commands)) => TestPlan::Uniform(commands),
            Some(TestPlanRecord::PerOs(mut by_os)) => {
                let default = by_os.remove(DEFAULT_TESTS_KEY);
                TestPlan::PerOs { by_os, default }
            }
        }
    }
}

#[derive(Deserialize)]
struct RoleRecord {
    name: String,
    #[serde(default)]
    tests: Option<TestPlanRecord>,
    #[serde(default)]
    skip: Option<Vec<SkipCondition>>,
}

/// A named unit under test.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RoleRecord")]
pub struct Role {
    pub name: String,
    pub tests: TestPlan,
    /// Skip when any condition matches. Empty means never skipped this way.
    pub skip: Vec<SkipCondition>,
}

impl From<RoleRecord> for Role {
    fn from(record: RoleRecord) -> Self {
        Self {
            name: record.name,
            tests: TestPlan::from(record.tests),
            skip: record.skip.unwrap_or_default(),
        }
    }
}

impl Role {
    pub fn new(name: impl Into<String>, tests: TestPlan) -> Self {
        Self { name: name.into(), tests, skip: Vec::new() }
    }

    pub fn with_skip(mut self, condition: SkipCondition) -> Self {
        self.skip.push(condition);
        self
    }
}
