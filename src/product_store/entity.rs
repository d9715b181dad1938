use crate::domain::{Product, ProductCreate, ProductPatch};
use super::error::ProductError;

fn missing_fields(
    title: &str,
    description: &str,
    price: f64,
    thumbnail: &str,
    code: &str,
    stock: u32,
) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if title.is_empty() {
        missing.push("title");
    }
    if description.is_empty() {
        missing.push("description");
    }
    if !(price.is_finite() && price > 0.0) {
        missing.push("price");
    }
    if thumbnail.is_empty() {
        missing.push("thumbnail");
    }
    if code.is_empty() {
        missing.push("code");
    }
    if stock == 0 {
        missing.push("stock");
    }
    missing
}

fn check(missing: Vec<&'static str>) -> Result<(), ProductError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ProductError::Validation(format!(
            "all fields are required, missing or empty: {}",
            missing.join(", ")
        )))
    }
}

impl ProductCreate {
    /// Rejects the payload if any business field is empty, zero or not positive.
    pub fn validate(&self) -> Result<(), ProductError> {
        check(missing_fields(
            &self.title,
            &self.description,
            self.price,
            &self.thumbnail,
            &self.code,
            self.stock,
        ))
    }
}

impl Product {
    /// Builds a product from a creation payload the caller has already validated.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the store
    /// * `params` - Business fields for the new product
    pub fn from_create(id: u64, params: ProductCreate) -> Self {
        Self {
            id,
            title: params.title,
            description: params.description,
            price: params.price,
            thumbnail: params.thumbnail,
            code: params.code,
            stock: params.stock,
        }
    }

    /// Same rules as creation, applied to a stored record.
    pub fn validate(&self) -> Result<(), ProductError> {
        check(missing_fields(
            &self.title,
            &self.description,
            self.price,
            &self.thumbnail,
            &self.code,
            self.stock,
        ))
    }

    /// The file format has no representation for NaN or infinity, so no
    /// policy may persist one.
    pub fn check_storable(&self) -> Result<(), ProductError> {
        if self.price.is_finite() {
            Ok(())
        } else {
            Err(ProductError::Validation(format!("price must be a finite number, got {}", self.price)))
        }
    }

    /// Merges the patch field by field. The id is never touched.
    pub fn on_update(&mut self, patch: ProductPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(thumbnail) = patch.thumbnail {
            self.thumbnail = thumbnail;
        }
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProductCreate {
        ProductCreate::new("Producto prueba", "Este es un producto de prueba", 200.0, "Sin imagen", "abc123", 25)
    }

    #[test]
    fn test_valid_payload_builds_product() {
        let product = Product::from_create(7, sample());
        assert_eq!(product.id, 7);
        assert_eq!(product.code, "abc123");
        assert_eq!(product.stock, 25);
    }

    #[test]
    fn test_each_falsy_field_is_rejected() {
        let cases: Vec<(&str, Box<dyn Fn(&mut ProductCreate)>)> = vec![
            ("title", Box::new(|p: &mut ProductCreate| p.title.clear())),
            ("description", Box::new(|p: &mut ProductCreate| p.description.clear())),
            ("price", Box::new(|p: &mut ProductCreate| p.price = 0.0)),
            ("thumbnail", Box::new(|p: &mut ProductCreate| p.thumbnail.clear())),
            ("code", Box::new(|p: &mut ProductCreate| p.code.clear())),
            ("stock", Box::new(|p: &mut ProductCreate| p.stock = 0)),
        ];

        for (field, mutate) in cases {
            let mut payload = sample();
            mutate(&mut payload);
            match payload.validate() {
                Err(ProductError::Validation(msg)) => assert!(msg.contains(field), "{msg}"),
                other => panic!("expected validation error for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_positive_or_non_finite_price_rejected() {
        let mut payload = sample();
        payload.price = -1.0;
        assert!(payload.validate().is_err());
        payload.price = f64::NAN;
        assert!(payload.validate().is_err());
        payload.price = f64::INFINITY;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_non_finite_price_is_not_storable() {
        let mut product = Product::from_create(1, sample());
        assert_eq!(product.check_storable(), Ok(()));

        product.on_update(ProductPatch::default().price(f64::NEG_INFINITY));
        assert!(matches!(product.check_storable(), Err(ProductError::Validation(_))));
        product.on_update(ProductPatch::default().price(f64::NAN));
        assert!(matches!(product.check_storable(), Err(ProductError::Validation(_))));
    }

    #[test]
    fn test_missing_json_keys_fail_validation() {
        let payload: ProductCreate = serde_json::from_str(r#"{"title": "A", "price": 10}"#).unwrap();
        let err = payload.validate().unwrap_err();
        assert_eq!(
            err,
            ProductError::Validation(
                "all fields are required, missing or empty: description, thumbnail, code, stock".to_string()
            )
        );
    }

    #[test]
    fn test_update_merges_only_supplied_fields() {
        let mut product = Product::from_create(1, sample());
        product.on_update(ProductPatch::default().price(300.0));

        assert_eq!(product.price, 300.0);
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Producto prueba");
        assert_eq!(product.code, "abc123");
        assert_eq!(product.stock, 25);
    }

    #[test]
    fn test_patch_ignores_id_key() {
        let patch: ProductPatch = serde_json::from_str(r#"{"id": 99, "stock": 3}"#).unwrap();
        let mut product = Product::from_create(1, sample());
        product.on_update(patch);

        assert_eq!(product.id, 1);
        assert_eq!(product.stock, 3);
    }
}
