//! Partial-update merge policy.
//!
//! A patch carries only the fields a caller wants to change. Every `Some`
//! field overwrites the target; every `None` field leaves it untouched.
//! Collections are replaced wholesale, so `Some(vec![])` clears a list.
//!
//! Each record shape implements [`Patch`] field by field. The merge never
//! validates and never persists; callers validate the patch first and save
//! the merged record afterwards.

/// A sparse update for one record shape.
pub trait Patch {
    type Target;

    /// Folds every supplied field into `target`.
    fn merge_into(self, target: &mut Self::Target);
}

/// Returns `original` with every non-null field of `patch` applied.
pub fn apply_patch<P: Patch>(mut original: P::Target, patch: P) -> P::Target {
    patch.merge_into(&mut original);
    original
}

/// Overwrites `slot` when `value` is present.
pub fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// Like [`overwrite`], trimming the new value the same way record
/// constructors trim on create.
pub fn overwrite_trimmed(slot: &mut String, value: Option<String>) {
    if let Some(v) = value {
        *slot = v.trim().to_string();
    }
}

/// Like [`overwrite`] for nullable columns: a present value sets the column,
/// an absent one leaves it as is. A patch cannot clear a nullable column.
pub fn overwrite_opt<T>(slot: &mut Option<T>, value: Option<T>) {
    if let Some(v) = value {
        *slot = Some(v);
    }
}
