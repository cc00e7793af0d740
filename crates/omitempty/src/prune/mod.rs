//! Recursive removal of empty entries.
//!
//! Objects and records are pruned bottom-up: each child is pruned first and
//! the pruned result is tested with [`is_empty`]. Sequence elements follow
//! [`SequenceCheck`]. Scalars pass through unchanged.

mod empty;
mod keys;

pub use empty::is_empty;

use tracing::{trace, warn};

use crate::options::{Options, SequenceCheck};
use crate::value::{Entries, Value};
use crate::{Error, Result};

/// Prune `value` into a new tree. Never fails; `max_depth` is ignored.
pub fn prune(value: &Value, options: &Options) -> Value {
    let walker = Walker {
        options,
        limit: None,
    };
    match walker.visit(value, 0) {
        Ok(v) => v,
        Err(e) => unreachable!("unbounded walk failed: {e}"),
    }
}

/// Like [`prune`], but fails with [`Error::DepthExceeded`] once containers
/// nest deeper than `options.max_depth`.
pub fn try_prune(value: &Value, options: &Options) -> Result<Value> {
    trace!(
        omit_false_booleans = options.omit_false_booleans,
        sequence_check = ?options.sequence_check,
        max_depth = ?options.max_depth,
        "pruning value tree"
    );
    let walker = Walker {
        options,
        limit: options.max_depth,
    };
    walker.visit(value, 0)
}

/// Convert a serializable value (structs become records) and prune it.
#[cfg(feature = "serde")]
pub fn prune_serialize<T: serde::Serialize + ?Sized>(value: &T, options: &Options) -> Result<Value> {
    let v = crate::ser::to_value(value)?;
    try_prune(&v, options)
}

struct Walker<'a> {
    options: &'a Options,
    limit: Option<usize>,
}

impl Walker<'_> {
    fn visit(&self, value: &Value, depth: usize) -> Result<Value> {
        match value {
            Value::Object(entries) => {
                self.enter(depth)?;
                Ok(Value::Object(self.prune_entries(entries, depth)?))
            }
            Value::Record(record) => {
                self.enter(depth)?;
                Ok(Value::Object(self.prune_entries(&record.fields, depth)?))
            }
            Value::Array(items) => {
                self.enter(depth)?;
                Ok(Value::Array(self.prune_items(items, depth)?))
            }
            scalar => Ok(scalar.clone()),
        }
    }

    fn enter(&self, depth: usize) -> Result<()> {
        match self.limit {
            Some(max_depth) if depth > max_depth => {
                warn!(depth, max_depth, "value nests deeper than allowed");
                Err(Error::DepthExceeded { max_depth })
            }
            _ => Ok(()),
        }
    }

    fn prune_entries(&self, entries: &[(String, Value)], depth: usize) -> Result<Vec<(String, Value)>> {
        let mut out = Entries::with_capacity(entries.len());
        for (key, child) in entries {
            let pruned = self.visit(child, depth + 1)?;
            if !is_empty(&pruned, self.options) {
                keys::insert_lowercased(&mut out, key, pruned);
            }
        }
        Ok(out.into_vec())
    }

    fn prune_items(&self, items: &[Value], depth: usize) -> Result<Vec<Value>> {
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match self.options.sequence_check {
                SequenceCheck::BeforePrune => {
                    if !is_empty(item, self.options) {
                        out.push(self.visit(item, depth + 1)?);
                    }
                }
                SequenceCheck::AfterPrune => {
                    let pruned = self.visit(item, depth + 1)?;
                    if !is_empty(&pruned, self.options) {
                        out.push(pruned);
                    }
                }
            }
        }
        Ok(out)
    }
}
