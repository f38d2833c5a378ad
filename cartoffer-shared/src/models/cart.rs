use serde::{Deserialize, Serialize};

/// Checkout request: apply the best offer for this user to the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplyOfferRequest {
    pub cart_value: i64,
    pub restaurant_id: i64,
    pub user_id: i64,
}

impl ApplyOfferRequest {
    pub fn new(cart_value: i64, restaurant_id: i64, user_id: i64) -> Self {
        Self { cart_value, restaurant_id, user_id }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplyOfferResponse {
    pub cart_value: i64,
}

/// Plain acknowledgment body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse {
    pub response_msg: String,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self { response_msg: "Success".to_string() }
    }
}
