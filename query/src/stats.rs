//! Statistics step: orders scan composed with the aggregator.

use exec::promise::Promise;
use store::backend::ShopStore;

use crate::aggregate::{aggregate, average};
use crate::dao::DataAccess;
use crate::error::QueryError;
use crate::types::OrderStatistics;

pub struct StatisticsFlow<S> {
    dao: DataAccess<S>,
}

impl<S> Clone for StatisticsFlow<S> {
    fn clone(&self) -> Self {
        Self {
            dao: self.dao.clone(),
        }
    }
}

impl<S: ShopStore + 'static> StatisticsFlow<S> {
    pub fn new(dao: DataAccess<S>) -> Self {
        Self { dao }
    }

    /// Fetch and reduce `username`'s order history. Store failures propagate
    /// unchanged; an empty history is a valid all-zero result.
    pub fn process_orders_of(&self, username: &str) -> Promise<OrderStatistics, QueryError> {
        let username = username.to_owned();

        self.dao
            .find_orders_by_username(&username)
            .map(move |orders| {
                let totals = aggregate(&orders);
                OrderStatistics {
                    username,
                    order_count: totals.count,
                    total_amount: totals.sum,
                    average_amount: average(totals),
                }
            })
    }
}
