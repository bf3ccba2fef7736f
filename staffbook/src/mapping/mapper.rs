use super::convert::convert;
use super::plan::{MappingPlan, PlanCache};
use super::traits::Mappable;
use super::value::{FieldValue, names_match};
use std::any::type_name;
use std::sync::Arc;

/// Copies field values between [`Mappable`] types by case-insensitive name.
///
/// Names compare with Unicode lowercase folding, so `Ñombre` matches `ñombre`.
///
/// Construct one at startup and share it (it is `Send + Sync`); every type
/// pair's plan is built on first use and reused for the mapper's lifetime.
///
/// Mapping is best effort: a value that cannot be converted to the
/// destination field's type is skipped and logged at `debug`, never returned
/// as an error.
#[derive(Debug, Default)]
pub struct Mapper {
    plans: PlanCache,
}

impl Mapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared plan for `(S, D)`, built on first request.
    pub fn plan<S: Mappable, D: Mappable>(&self) -> Arc<MappingPlan<S, D>> {
        self.plans.get_or_build::<S, D>()
    }

    /// Number of type pairs mapped so far.
    #[must_use]
    pub fn cached_plans(&self) -> usize {
        self.plans.len()
    }

    /// Builds a `D::default()` and copies `source` into it, letting source nulls
    /// overwrite destination defaults.
    ///
    /// Destination fields named in `exclude` (any case) are left at their default.
    /// An absent source yields the default destination.
    ///
    /// ```rust,ignore
    /// let employee: employee::Model = mapper.create_and_map(&create, &["id"]);
    /// ```
    #[must_use]
    pub fn create_and_map<'a, S, D>(
        &self,
        source: impl Into<Option<&'a S>>,
        exclude: &[&str],
    ) -> D
    where
        S: Mappable,
        D: Mappable + Default,
    {
        let mut destination = D::default();
        self.copy_into(source, &mut destination, false, exclude);
        destination
    }

    /// Copies every matched field of `source` into `destination`.
    ///
    /// - Fields named in `exclude` (any case) are never written.
    /// - A null source value is skipped when `ignore_nulls` is set (PATCH), and
    ///   otherwise written only into `Option` fields (PUT).
    /// - Values of the same underlying kind are assigned directly; anything else
    ///   goes through [`convert`](super::convert) and is skipped if that fails.
    ///
    /// Does nothing when either side is `None`.
    pub fn copy_into<'a, 'b, S, D>(
        &self,
        source: impl Into<Option<&'a S>>,
        destination: impl Into<Option<&'b mut D>>,
        ignore_nulls: bool,
        exclude: &[&str],
    ) where
        S: Mappable,
        D: Mappable,
    {
        let (Some(source), Some(destination)) = (source.into(), destination.into()) else {
            return;
        };

        let plan = self.plan::<S, D>();
        for pair in plan.pairs() {
            let target = &pair.destination;
            if exclude.iter().any(|name| names_match(name, target.name)) {
                continue;
            }
            let (Some(read), Some(write)) = (pair.source.getter, target.setter) else {
                continue;
            };

            let value = read(source);
            if value.is_null() {
                if !ignore_nulls && target.ty.nullable {
                    write(destination, FieldValue::Null);
                }
                continue;
            }

            let value = if pair.source.ty.kind == target.ty.kind {
                value
            } else {
                match convert(value, target.ty.kind) {
                    Ok(converted) => converted,
                    Err(err) => {
                        tracing::debug!(
                            source = type_name::<S>(),
                            destination = type_name::<D>(),
                            field = target.name,
                            error = %err,
                            "Skipping field that could not be converted"
                        );
                        continue;
                    }
                }
            };

            if !write(destination, value) {
                tracing::debug!(
                    destination = type_name::<D>(),
                    field = target.name,
                    "Destination rejected converted value"
                );
            }
        }
    }
}
