use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Lifecycle status of an order.
///
/// Creation stores whatever status the client sends, of any JSON type, so
/// unknown values are kept in [`OrderStatus::Other`] and written back out
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
    #[serde(untagged)]
    Other(Value),
}

impl OrderStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "pending" => OrderStatus::Pending,
            "preparing" => OrderStatus::Preparing,
            "out-for-delivery" => OrderStatus::OutForDelivery,
            "delivered" => OrderStatus::Delivered,
            other => OrderStatus::Other(Value::String(other.to_string())),
        }
    }

    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::parse(s),
            other => OrderStatus::Other(other.clone()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, OrderStatus::Other(_))
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => f.write_str("pending"),
            OrderStatus::Preparing => f.write_str("preparing"),
            OrderStatus::OutForDelivery => f.write_str("out-for-delivery"),
            OrderStatus::Delivered => f.write_str("delivered"),
            OrderStatus::Other(Value::String(s)) => f.write_str(s),
            OrderStatus::Other(other) => write!(f, "{other}"),
        }
    }
}

/// One line of an order: a dish reference and how many of it.
///
/// The dish reference is stored as sent, whatever its JSON type. Any other
/// fields sent with the line (a copy of the dish name or price, say) are kept
/// in `details` and serialized back next to `dishId` and `quantity`. The
/// quantity is normalized to an integer, so `2.0` comes back as `2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "dishId", default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<Value>,
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl OrderLine {
    pub fn new(dish_id: impl Into<String>, quantity: u64) -> Self {
        Self {
            dish_id: Some(Value::String(dish_id.into())),
            quantity,
            details: Map::new(),
        }
    }
}

/// Represents a customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
/// See [`crate::order_actor`] for its pipelines and the delete rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderLine>,
}

impl Order {
    pub fn is_pending(&self) -> bool {
        self.status == Some(OrderStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_names() {
        let order = Order {
            id: "4".into(),
            deliver_to: "1 Main St".into(),
            mobile_number: "555-0100".into(),
            status: Some(OrderStatus::OutForDelivery),
            dishes: vec![OrderLine::new("1", 2)],
        };
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "id": "4",
                "deliverTo": "1 Main St",
                "mobileNumber": "555-0100",
                "status": "out-for-delivery",
                "dishes": [{ "dishId": "1", "quantity": 2 }]
            })
        );
    }

    #[test]
    fn unknown_status_round_trips() {
        let status: OrderStatus = serde_json::from_value(json!("on-hold")).unwrap();
        assert_eq!(status, OrderStatus::Other("on-hold".into()));
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("on-hold"));
        assert!(!status.is_known());
        assert_eq!(OrderStatus::parse("delivered"), OrderStatus::Delivered);

        let status: OrderStatus = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(status, OrderStatus::from_value(&json!(3)));
        assert_eq!(serde_json::to_value(&status).unwrap(), json!(3));
        assert_eq!(status.to_string(), "3");
        assert_eq!(OrderStatus::from_value(&json!("pending")), OrderStatus::Pending);
    }

    #[test]
    fn numeric_dish_id_round_trips() {
        let line: OrderLine =
            serde_json::from_value(json!({ "dishId": 1, "quantity": 2 })).unwrap();
        assert_eq!(line.dish_id, Some(json!(1)));
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            json!({ "dishId": 1, "quantity": 2 })
        );
    }

    #[test]
    fn line_details_are_preserved() {
        let line: OrderLine = serde_json::from_value(json!({
            "dishId": "2",
            "quantity": 1,
            "name": "Falafel"
        }))
        .unwrap();
        assert_eq!(line.details.get("name"), Some(&json!("Falafel")));
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            json!({ "dishId": "2", "quantity": 1, "name": "Falafel" })
        );
    }
}
