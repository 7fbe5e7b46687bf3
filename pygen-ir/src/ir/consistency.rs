//! Producer-contract checks for a module.
//!
//! The schema accepts duplicate names, names shared between partitions and
//! kind tags that disagree with their partition. This module finds those
//! cases so a consumer can warn about them; it never rejects a module.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::module::{Module, Partition};
use super::symbol::SymbolKind;

/// A single finding of the consistency check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyIssue {
    /// A name occurs more than once in one partition.
    DuplicateName {
        name: String,
        partition: Partition,
        count: usize,
    },

    /// A name occurs in both the function and the variable partition.
    CrossPartition { name: String },

    /// A symbol's kind tag disagrees with the partition holding it.
    KindMismatch {
        name: String,
        partition: Partition,
        kind: SymbolKind,
    },
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyIssue::DuplicateName {
                name,
                partition,
                count,
            } => write!(
                f,
                "'{}' appears {} times in {}",
                name,
                count,
                partition.as_str()
            ),
            ConsistencyIssue::CrossPartition { name } => {
                write!(f, "'{}' appears in both functions and variables", name)
            }
            ConsistencyIssue::KindMismatch {
                name,
                partition,
                kind,
            } => write!(
                f,
                "'{}' has type '{}' but is listed under {}",
                name,
                kind,
                partition.as_str()
            ),
        }
    }
}

/// Result of [`Module::check_consistency`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    module: String,
    issues: Vec<ConsistencyIssue>,
}

impl ConsistencyReport {
    pub(crate) fn for_module(module: &Module) -> Self {
        let mut issues = Vec::new();

        for partition in [Partition::Functions, Partition::Variables] {
            let expected = match partition {
                Partition::Functions => SymbolKind::Function,
                Partition::Variables => SymbolKind::Variable,
            };

            // Report duplicates once, in first-seen order.
            let mut counts: HashMap<&str, usize> = HashMap::new();
            let mut order = Vec::new();
            for symbol in module.partition(partition) {
                let count = counts.entry(symbol.name()).or_insert(0);
                if *count == 0 {
                    order.push(symbol.name());
                }
                *count += 1;

                if symbol.kind() != &expected {
                    issues.push(ConsistencyIssue::KindMismatch {
                        name: symbol.name().to_string(),
                        partition,
                        kind: symbol.kind().clone(),
                    });
                }
            }
            for name in order {
                let count = counts[name];
                if count > 1 {
                    issues.push(ConsistencyIssue::DuplicateName {
                        name: name.to_string(),
                        partition,
                        count,
                    });
                }
            }
        }

        let function_names: HashSet<&str> = module.functions().iter().map(|s| s.name()).collect();
        let mut reported = HashSet::new();
        for symbol in module.variables() {
            if function_names.contains(symbol.name()) && reported.insert(symbol.name()) {
                issues.push(ConsistencyIssue::CrossPartition {
                    name: symbol.name().to_string(),
                });
            }
        }

        Self {
            module: module.name().to_string(),
            issues,
        }
    }

    /// Name of the checked module.
    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn issues(&self) -> &[ConsistencyIssue] {
        &self.issues
    }

    /// Check if no issues were found.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Emit every issue as a warning.
    pub fn log(&self) {
        for issue in &self.issues {
            tracing::warn!(module = %self.module, issue = %issue, "IR consistency issue");
        }
    }
}
