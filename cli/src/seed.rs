//! Demo-data seeding for the driver.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use store::backend::sqlite_store::SqliteShopStore;
use store::model::{Order, OrderId, User};

#[derive(Debug, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl SeedData {
    /// The canonical demo fixture: lisa/password with two orders, and tom
    /// with an empty order history.
    pub fn demo() -> Self {
        Self {
            users: vec![
                User {
                    name: "lisa".into(),
                    password: "password".into(),
                    email: Some("lisa@example.com".into()),
                },
                User {
                    name: "tom".into(),
                    password: "secret".into(),
                    email: None,
                },
            ],
            orders: vec![
                Order {
                    id: OrderId::new_v4(),
                    username: "lisa".into(),
                    amount: 10,
                },
                Order {
                    id: OrderId::new_v4(),
                    username: "lisa".into(),
                    amount: 30,
                },
            ],
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub async fn apply(&self, store: &SqliteShopStore) -> anyhow::Result<()> {
        for user in &self.users {
            store.insert_user(user).await?;
        }
        for order in &self.orders {
            store.insert_order(order).await?;
        }
        Ok(())
    }
}
