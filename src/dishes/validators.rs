//! Dish validators and pipelines

use super::Dish;
use crate::core::validation::validators::{
    as_positive_integer, body_data_has, body_data_is_text, id_matches_route,
};
use crate::core::{ApiError, Pipeline, RequestContext};

/// Validator: `price` is an integer greater than zero
pub fn price_is_valid(ctx: &RequestContext<Dish>) -> Result<(), ApiError> {
    match as_positive_integer(ctx.field("price")) {
        Some(_) => Ok(()),
        None => Err(ApiError::validation(
            "Dish must have a price that is an integer greater than 0",
        )),
    }
}

/// The ordered pipelines guarding each dish route
#[derive(Clone)]
pub struct DishPipelines {
    pub create: Pipeline<Dish>,
    pub read: Pipeline<Dish>,
    pub update: Pipeline<Dish>,
}

impl DishPipelines {
    pub fn new() -> Self {
        Self {
            create: Self::payload(),
            read: Pipeline::new().exists(),
            update: Self::payload().exists().validate(id_matches_route()),
        }
    }

    /// Required text fields, then price
    fn payload() -> Pipeline<Dish> {
        Pipeline::new()
            .validate(body_data_has("name"))
            .validate(body_data_is_text("name"))
            .validate(body_data_has("description"))
            .validate(body_data_is_text("description"))
            .validate(body_data_has("image_url"))
            .validate(body_data_is_text("image_url"))
            .validate(price_is_valid)
    }
}

impl Default for DishPipelines {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Store;
    use crate::storage::InMemoryStore;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    fn body(data: Value) -> Value {
        json!({ "data": data })
    }

    fn valid() -> Value {
        json!({
            "name": "Falafel",
            "description": "Chickpea fritters",
            "price": 8,
            "image_url": "https://example.com/falafel.jpg"
        })
    }

    async fn run_create(data: Value) -> Result<(), ApiError> {
        let store: InMemoryStore<Dish> = InMemoryStore::new();
        let mut ctx = RequestContext::for_body(body(data));
        DishPipelines::new().create.run(&mut ctx, &store).await
    }

    #[tokio::test]
    async fn test_create_accepts_valid_payload() {
        assert!(run_create(valid()).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_bad_prices() {
        for price in [json!(0), json!(-1), json!(2.5), json!("8"), json!(null)] {
            let mut data = valid();
            data["price"] = price;
            let err = run_create(data).await.unwrap_err();
            assert_eq!(
                err.to_string(),
                "Dish must have a price that is an integer greater than 0"
            );
        }
    }

    #[tokio::test]
    async fn test_create_checks_fields_in_order() {
        let err = run_create(json!({ "price": 0 })).await.unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a name");

        let err = run_create(json!({ "name": "Falafel", "image_url": "x" }))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a description");

        let err = run_create(json!({ "name": "Falafel", "description": "x" }))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a image_url");
    }

    #[tokio::test]
    async fn test_create_rejects_non_string_fields() {
        for field in ["name", "description", "image_url"] {
            let mut data = valid();
            data[field] = json!(42);
            let err = run_create(data).await.unwrap_err();
            assert_eq!(err.to_string(), format!("Dish {} must be a string", field));
        }
    }

    #[tokio::test]
    async fn test_update_validates_payload_before_existence() {
        let store: InMemoryStore<Dish> = InMemoryStore::new();
        let mut ctx = RequestContext::for_route_and_body("missing", body(json!({})));

        let err = DishPipelines::new()
            .update
            .run(&mut ctx, &store)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_unknown_dish_is_not_found() {
        let store: InMemoryStore<Dish> = InMemoryStore::new();
        let mut ctx = RequestContext::for_route_and_body("missing", body(valid()));

        let err = DishPipelines::new()
            .update
            .run(&mut ctx, &store)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Dish not found: missing");
    }

    #[tokio::test]
    async fn test_update_rejects_mismatched_id() {
        let store = InMemoryStore::new();
        store
            .insert(Dish::from_data("d1".to_string(), &valid()))
            .await
            .unwrap();
        let mut data = valid();
        data["id"] = json!("d2");
        let mut ctx = RequestContext::for_route_and_body("d1", body(data));

        let err = DishPipelines::new()
            .update
            .run(&mut ctx, &store)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Dish id does not match route id. Dish: d2, Route: d1"
        );
    }
}
