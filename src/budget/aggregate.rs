//! Parallel budget roll-up over the part tree.
//!
//! For every budget discovered in the tree rooted at the queried model,
//! the aggregation sums each node's contribution — the value of the
//! property the budget is `given_by` — over the whole subtree. Missing
//! contributions count as zero in the budget's unit. Budgets fork in
//! parallel, and within one budget every part subtree forks in parallel,
//! a divide-and-conquer whose leaves are models without parts.

use rayon::prelude::*;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::sync::Arc;

use crate::base::ModelId;
use crate::model::{Budget, ModelGraph, PropertyValue, Quantity};

/// How an aggregated actual compares against its budget's bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BudgetStatus {
    /// Within the declared bounds.
    Within,
    /// Above the declared maximum.
    Over,
    /// Below the declared minimum.
    Under,
    /// The budget declares no bounds.
    Unbounded,
}

/// A budget together with its aggregated actual quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct BudgetResult {
    budget: Budget,
    actual: Quantity,
}

impl BudgetResult {
    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// The aggregated sum, in the budget's declared unit.
    pub fn actual(&self) -> Quantity {
        self.actual
    }

    pub fn status(&self) -> BudgetStatus {
        let over = self
            .budget
            .maximum()
            .and_then(|max| max.convert_to(self.actual.unit()))
            .is_some_and(|max| self.actual.magnitude() > max.magnitude());
        if over {
            return BudgetStatus::Over;
        }
        let under = self
            .budget
            .minimum()
            .and_then(|min| min.convert_to(self.actual.unit()))
            .is_some_and(|min| self.actual.magnitude() < min.magnitude());
        if under {
            return BudgetStatus::Under;
        }
        if self.budget.minimum().is_none() && self.budget.maximum().is_none() {
            return BudgetStatus::Unbounded;
        }
        BudgetStatus::Within
    }
}

/// Options for one aggregation call.
///
/// With a thread cap the call builds its own rayon pool, scoped to the
/// call; otherwise the ambient pool is used.
#[derive(Clone, Copy, Debug, Default)]
pub struct AggregationConfig {
    pub max_threads: Option<usize>,
}

/// Aggregate every budget reachable from `model` over its part tree.
///
/// Results are ordered by budget discovery order and contain one entry per
/// budget identity (name), even when the same budget is declared at more
/// than one node. Aggregation never fails: unset contributions count as
/// zero, and a contribution whose unit cannot convert into the budget's
/// unit is skipped with a warning.
pub fn aggregate(
    graph: &ModelGraph,
    model: ModelId,
    config: &AggregationConfig,
) -> Vec<BudgetResult> {
    match config.max_threads {
        Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(|| aggregate_inner(graph, model)),
            Err(error) => {
                tracing::warn!(%error, "could not build scoped pool, using ambient pool");
                aggregate_inner(graph, model)
            }
        },
        None => aggregate_inner(graph, model),
    }
}

fn aggregate_inner(graph: &ModelGraph, model: ModelId) -> Vec<BudgetResult> {
    let budgets = discover_budgets(graph, model);
    budgets
        .into_par_iter()
        .map(|budget| {
            let actual = sum_subtree(graph, model, &budget);
            BudgetResult { budget, actual }
        })
        .collect()
}

/// Collect every budget declared on the model or any of its descendants,
/// de-duplicated by name, in breadth-first discovery order.
fn discover_budgets(graph: &ModelGraph, root: ModelId) -> Vec<Budget> {
    let mut found: IndexMap<Arc<str>, Budget> = IndexMap::new();
    let mut visited = FxHashSet::default();
    let mut queue = vec![root];
    let mut next = 0;

    while next < queue.len() {
        let id = queue[next];
        next += 1;
        if !visited.insert(id) {
            continue;
        }
        let model = graph.model(id);
        for value in model.properties().values() {
            if let PropertyValue::Budget(budget) = value {
                found
                    .entry(Arc::from(budget.name()))
                    .or_insert_with(|| budget.clone());
            }
        }
        queue.extend(model.parts().iter().map(|p| p.model()));
    }

    found.into_values().collect()
}

/// Sum one budget over the subtree rooted at `model`: the model's own
/// contribution plus the contributions of every part, recursively. Part
/// subtrees are forked in parallel and joined by unit-aware addition.
fn sum_subtree(graph: &ModelGraph, model: ModelId, budget: &Budget) -> Quantity {
    let zero = Quantity::zero(budget.unit());
    let own = contribution(graph, model, budget).unwrap_or(zero);

    let parts_total = graph
        .model(model)
        .parts()
        .par_iter()
        .map(|part| sum_subtree(graph, part.model(), budget))
        .reduce(|| zero, |a, b| a.checked_add(&b).unwrap_or(a));

    own.checked_add(&parts_total).unwrap_or(own)
}

/// A model's own contribution to a budget, converted into the budget's
/// unit. `None` when unset or unusable.
fn contribution(graph: &ModelGraph, model: ModelId, budget: &Budget) -> Option<Quantity> {
    let decl = graph.model(model);
    match decl.properties().get(budget.given_by())? {
        PropertyValue::Quantity(quantity) => {
            let converted = quantity.convert_to(budget.unit());
            if converted.is_none() {
                tracing::warn!(
                    model = decl.name(),
                    budget = budget.name(),
                    value = %quantity,
                    unit = %budget.unit(),
                    "budget contribution has an incompatible dimension, counting as zero"
                );
            }
            converted
        }
        other => {
            tracing::warn!(
                model = decl.name(),
                budget = budget.name(),
                ?other,
                "budget contribution is not a quantity, counting as zero"
            );
            None
        }
    }
}
