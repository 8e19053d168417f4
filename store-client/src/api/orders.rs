//! Order endpoints

use shared::Paginated;
use shared::models::{Order, OrderCreate, OrderProduct, OrderProductCreate};

use crate::{ClientResult, HttpClient};

/// Order and order-line endpoints
#[derive(Debug, Clone, Copy)]
pub struct OrdersApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl OrdersApi<'_> {
    /// Create an order header; lines are added with [`Self::add_product`]
    pub async fn create(&self, payload: &OrderCreate) -> ClientResult<Order> {
        self.http.post("/orders", payload).await
    }

    /// Attach a sized product to an order
    pub async fn add_product(&self, payload: &OrderProductCreate) -> ClientResult<OrderProduct> {
        self.http.post("/order-products", payload).await
    }

    /// Fetch one page of a user's orders
    pub async fn for_user(
        &self,
        user_id: i64,
        page: u32,
        limit: u32,
    ) -> ClientResult<Paginated<Order>> {
        self.http
            .get_query(
                &format!("/orders/user/{user_id}"),
                &[("page", page), ("limit", limit)],
            )
            .await
    }

    /// Fetch one page of all orders (manager view)
    pub async fn list(&self, page: u32, limit: u32) -> ClientResult<Paginated<Order>> {
        self.http
            .get_query("/orders", &[("page", page), ("limit", limit)])
            .await
    }

    /// Fetch the line items of an order
    pub async fn products(&self, order_id: i64) -> ClientResult<Vec<OrderProduct>> {
        self.http
            .get(&format!("/order-products/order/{order_id}"))
            .await
    }
}
