use super::traits::{Field, Mappable};
use super::value::names_match;
use dashmap::DashMap;
use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

/// A readable source field matched to a writable destination field.
pub struct FieldPair<S, D> {
    pub source: Field<S>,
    pub destination: Field<D>,
}

impl<S, D> fmt::Debug for FieldPair<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source.name, self.destination.name)
    }
}

/// Matched field pairs for one `(source, destination)` type pair.
///
/// Built once from [`Mappable::fields`] and never modified afterwards.
pub struct MappingPlan<S, D> {
    pairs: Vec<FieldPair<S, D>>,
}

impl<S: Mappable, D: Mappable> MappingPlan<S, D> {
    /// Pairs every writable destination field with the first readable source
    /// field of the same name, compared ignoring case. Plan order follows
    /// the destination's declaration order.
    #[must_use]
    pub fn build() -> Self {
        let sources: Vec<Field<S>> = S::fields().into_iter().filter(Field::is_readable).collect();

        let pairs = D::fields()
            .into_iter()
            .filter(Field::is_writable)
            .filter_map(|destination| {
                sources
                    .iter()
                    .find(|source| names_match(source.name, destination.name))
                    .map(|&source| FieldPair {
                        source,
                        destination,
                    })
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            source = type_name::<S>(),
            destination = type_name::<D>(),
            pairs = pairs.len(),
            "Built mapping plan"
        );

        Self { pairs }
    }
}

impl<S, D> MappingPlan<S, D> {
    #[must_use]
    pub fn pairs(&self) -> &[FieldPair<S, D>] {
        &self.pairs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Destination field names in plan order.
    pub fn destination_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|pair| pair.destination.name)
    }
}

impl<S, D> fmt::Debug for MappingPlan<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.pairs).finish()
    }
}

type PlanKey = (TypeId, TypeId);

/// Process-lifetime store of mapping plans, keyed by type pair.
///
/// Lookups after the first are a shard read lock and an `Arc` clone. The first
/// lookup for a pair builds the plan under the shard's write lock, so each
/// pair is built and published exactly once.
#[derive(Default)]
pub struct PlanCache {
    plans: DashMap<PlanKey, Arc<dyn Any + Send + Sync>>,
}

impl PlanCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached plan for `(S, D)`, building it on first use.
    pub fn get_or_build<S: Mappable, D: Mappable>(&self) -> Arc<MappingPlan<S, D>> {
        let key = (TypeId::of::<S>(), TypeId::of::<D>());

        if let Some(cached) = self.plans.get(&key)
            && let Ok(plan) = Arc::clone(cached.value()).downcast::<MappingPlan<S, D>>()
        {
            return plan;
        }

        let entry = self.plans.entry(key).or_insert_with(|| {
            let plan: Arc<dyn Any + Send + Sync> = Arc::new(MappingPlan::<S, D>::build());
            plan
        });
        let erased = Arc::clone(entry.value());
        drop(entry);

        // Keys are derived from the plan's own type parameters, so the
        // downcast only fails if the map was corrupted; rebuild in that case.
        erased.downcast::<MappingPlan<S, D>>().unwrap_or_else(|_| {
            tracing::warn!(
                source = type_name::<S>(),
                destination = type_name::<D>(),
                "Cached mapping plan had an unexpected type, rebuilding"
            );
            Arc::new(MappingPlan::build())
        })
    }

    /// Number of type pairs with a cached plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl fmt::Debug for PlanCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanCache")
            .field("plans", &self.plans.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{FieldType, FieldValue, MapValue, ValueKind};

    #[derive(Default)]
    struct Source {
        email: String,
        secret: String,
    }

    #[derive(Default)]
    struct Destination {
        email: String,
        computed: String,
        secret: String,
    }

    impl Mappable for Source {
        fn fields() -> Vec<Field<Self>> {
            vec![
                Field::<Self>::new(
                    "email",
                    FieldType::required(ValueKind::Text),
                    Some(|s: &Self| s.email.to_value()),
                    None,
                ),
                Field::<Self>::new(
                    "Secret",
                    FieldType::required(ValueKind::Text),
                    None,
                    Some(|s: &mut Self, v: FieldValue| {
                        String::from_value(v).map(|v| s.secret = v).is_some()
                    }),
                ),
            ]
        }
    }

    impl Mappable for Destination {
        fn fields() -> Vec<Field<Self>> {
            vec![
                Field::<Self>::new(
                    "Email",
                    FieldType::required(ValueKind::Text),
                    None,
                    Some(|d: &mut Self, v: FieldValue| {
                        String::from_value(v).map(|v| d.email = v).is_some()
                    }),
                ),
                Field::<Self>::new(
                    "Computed",
                    FieldType::required(ValueKind::Text),
                    Some(|d: &Self| d.computed.to_value()),
                    None,
                ),
                Field::<Self>::new(
                    "secret",
                    FieldType::required(ValueKind::Text),
                    Some(|d: &Self| d.secret.to_value()),
                    Some(|d: &mut Self, v: FieldValue| {
                        String::from_value(v).map(|v| d.secret = v).is_some()
                    }),
                ),
            ]
        }
    }

    #[test]
    fn test_plan_matches_case_insensitively() {
        let plan = MappingPlan::<Source, Destination>::build();
        let names: Vec<_> = plan.destination_names().collect();
        // `Computed` is not writable and `secret` has no readable source.
        assert_eq!(names, vec!["Email"]);
        assert_eq!(plan.pairs()[0].source.name, "email");
    }

    #[test]
    fn test_cache_returns_same_plan() {
        let cache = PlanCache::new();
        assert!(cache.is_empty());

        let first = cache.get_or_build::<Source, Destination>();
        let second = cache.get_or_build::<Source, Destination>();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        let reverse = cache.get_or_build::<Destination, Source>();
        assert_eq!(cache.len(), 2);
        // Destination.secret is readable, Source.Secret is writable.
        assert_eq!(
            reverse.destination_names().collect::<Vec<_>>(),
            vec!["Secret"]
        );
    }

    #[test]
    fn test_concurrent_first_use_publishes_one_plan() {
        let cache = PlanCache::new();
        let plans: Vec<Arc<MappingPlan<Source, Destination>>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| cache.get_or_build::<Source, Destination>()))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(cache.len(), 1);
        assert!(plans.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    }
}
