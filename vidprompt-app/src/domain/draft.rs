use super::product::{ProductDescription, ProductType, TargetModel, VisualEmphasis};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Form values kept between visits. The target model is deliberately not part
/// of the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub product_name: String,
    pub features: String,
    pub price: String,
    pub has_price: bool,
    pub product_type: ProductType,
    pub environment: String,
    pub visual_emphasis: VisualEmphasis,
}

impl ProductDraft {
    /// Reads a stored record field by field. Anything absent or of the wrong
    /// type takes its default instead of failing the whole record.
    pub fn from_stored(value: &Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_default()
        };

        Self {
            product_name: text("productName"),
            features: text("features"),
            price: text("price"),
            has_price: value
                .get("hasPrice")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            product_type: value
                .get("productType")
                .and_then(Value::as_str)
                .map(ProductType::from_label)
                .unwrap_or_default(),
            environment: text("environment"),
            visual_emphasis: value
                .get("visualEmphasis")
                .and_then(Value::as_str)
                .map(VisualEmphasis::from_label)
                .unwrap_or_default(),
        }
    }

    pub fn to_description(&self, target_model: TargetModel) -> ProductDescription {
        ProductDescription {
            product_name: self.product_name.clone(),
            features: self.features.clone(),
            price: self.price.clone(),
            has_price: self.has_price,
            product_type: self.product_type,
            environment: self.environment.clone(),
            visual_emphasis: self.visual_emphasis,
            target_model,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&ProductDescription> for ProductDraft {
    fn from(product: &ProductDescription) -> Self {
        Self {
            product_name: product.product_name.clone(),
            features: product.features.clone(),
            price: product.price.clone(),
            has_price: product.has_price,
            product_type: product.product_type,
            environment: product.environment.clone(),
            visual_emphasis: product.visual_emphasis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_complete_record() {
        let stored = json!({
            "productName": "Legging Suplex",
            "features": "Não transparente",
            "price": "R$ 59,90",
            "hasPrice": true,
            "productType": "Fashion/Clothing",
            "environment": "Academia Moderna",
            "visualEmphasis": "Prova de Qualidade (Agachamento/Transparência)"
        });

        let draft = ProductDraft::from_stored(&stored);
        assert_eq!(draft.product_name, "Legging Suplex");
        assert!(draft.has_price);
        assert_eq!(draft.product_type, ProductType::Fashion);
        assert_eq!(draft.visual_emphasis, VisualEmphasis::QualityTest);
    }

    #[test]
    fn test_malformed_fields_take_defaults() {
        let stored = json!({
            "productName": 42,
            "features": "Tecido premium",
            "hasPrice": "yes",
            "productType": ["Fashion/Clothing"],
            "visualEmphasis": "Slow Zoom"
        });

        let draft = ProductDraft::from_stored(&stored);
        assert_eq!(draft.product_name, "");
        assert_eq!(draft.features, "Tecido premium");
        assert!(!draft.has_price);
        assert_eq!(draft.product_type, ProductType::Physical);
        assert_eq!(draft.environment, "");
        assert_eq!(draft.visual_emphasis, VisualEmphasis::Default);
    }

    #[test]
    fn test_non_object_record_is_default() {
        assert!(ProductDraft::from_stored(&json!("oops")).is_empty());
        assert!(ProductDraft::from_stored(&Value::Null).is_empty());
    }

    #[test]
    fn test_serialized_record_omits_target_model() {
        let product = ProductDescription::new("Copo", "Térmico", "Cozinha")
            .with_target_model(TargetModel::Sora2);
        let value = serde_json::to_value(ProductDraft::from(&product)).unwrap();

        assert!(value.get("targetModel").is_none());
        assert_eq!(ProductDraft::from_stored(&value), ProductDraft::from(&product));
    }

    #[test]
    fn test_to_description_carries_target_model() {
        let draft = ProductDraft {
            product_name: "Copo".to_string(),
            ..ProductDraft::default()
        };
        let product = draft.to_description(TargetModel::Sora2);
        assert_eq!(product.target_model, TargetModel::Sora2);
        assert_eq!(product.product_name, "Copo");
    }
}
