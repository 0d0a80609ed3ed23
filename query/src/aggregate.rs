//! Order aggregation.
//!
//! A pure fold from the identity accumulator `{sum: 0, count: 0}` via
//! [`OrderTotals::combine`]. `combine` is associative and commutative, so
//! the result does not depend on the order of the input sequence; the
//! reference path folds sequentially but a parallel reduction would produce
//! the same totals.
//!
//! Any I/O (store scans, reporting) lives outside this module.

use store::model::Order;

/// Aggregation accumulator: running sum of amounts and order count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderTotals {
    pub sum: i64,
    pub count: u32,
}

impl OrderTotals {
    pub const IDENTITY: Self = Self { sum: 0, count: 0 };

    /// The totals contributed by a single order.
    pub fn of(order: &Order) -> Self {
        Self {
            sum: order.amount,
            count: 1,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            count: self.count + other.count,
        }
    }
}

/// Reduce an order sequence to its totals.
pub fn aggregate(orders: &[Order]) -> OrderTotals {
    orders
        .iter()
        .map(OrderTotals::of)
        .fold(OrderTotals::IDENTITY, OrderTotals::combine)
}

/// Average order amount. Defined as 0.0 for an empty order set, so a user
/// with no history gets a well-formed all-zero statistics line rather than
/// a NaN.
pub fn average(totals: OrderTotals) -> f64 {
    if totals.count == 0 {
        0.0
    } else {
        totals.sum as f64 / f64::from(totals.count)
    }
}
