use serde::{Deserialize, Serialize};

pub const ENVIRONMENT_PRESETS: &[&str] = &[
    "Praia Paradisíaca",
    "Quarto Minimalista",
    "Academia Moderna",
    "Rua Urbana Chic",
    "Estúdio Fotográfico",
    "Natureza/Parque",
];

/// Video model the prompts are written for. Carried with the request but not
/// used to vary the generated instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetModel {
    #[default]
    Veo3,
    Sora2,
}

impl TargetModel {
    pub const ALL: [TargetModel; 2] = [TargetModel::Veo3, TargetModel::Sora2];

    pub fn label(self) -> &'static str {
        match self {
            Self::Veo3 => "Veo3",
            Self::Sora2 => "Sora2",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Veo3 => "VEO3",
            Self::Sora2 => "SORA2",
        }
    }

    pub fn from_label(value: &str) -> Self {
        parse_label(&Self::ALL, value, Self::label, Self::code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductType {
    /// Handheld items, gadgets, cosmetics.
    #[default]
    Physical,
    /// Items worn by the model.
    Fashion,
}

impl ProductType {
    pub const ALL: [ProductType; 2] = [ProductType::Physical, ProductType::Fashion];

    pub fn label(self) -> &'static str {
        match self {
            Self::Physical => "Physical Object",
            Self::Fashion => "Fashion/Clothing",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Physical => "PHYSICAL",
            Self::Fashion => "FASHION",
        }
    }

    /// Short name for the form toggle.
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Physical => "Físico",
            Self::Fashion => "Moda",
        }
    }

    pub fn from_label(value: &str) -> Self {
        parse_label(&Self::ALL, value, Self::label, Self::code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisualEmphasis {
    #[default]
    Default,
    QualityTest,
    TextureZoom,
    Movement,
    Lifestyle,
}

impl VisualEmphasis {
    pub const ALL: [VisualEmphasis; 5] = [
        VisualEmphasis::Default,
        VisualEmphasis::QualityTest,
        VisualEmphasis::TextureZoom,
        VisualEmphasis::Movement,
        VisualEmphasis::Lifestyle,
    ];

    /// Label interpolated into the instruction text and stored in drafts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Equilibrado (Padrão)",
            Self::QualityTest => "Prova de Qualidade (Agachamento/Transparência)",
            Self::TextureZoom => "Macro/Textura (Zoom em Detalhes)",
            Self::Movement => "Caimento & Movimento (Giros/Desfile)",
            Self::Lifestyle => "Lifestyle (Uso no Dia a Dia)",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::QualityTest => "QUALITY_TEST",
            Self::TextureZoom => "TEXTURE_ZOOM",
            Self::Movement => "MOVEMENT",
            Self::Lifestyle => "LIFESTYLE",
        }
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Default => "🎥 Equilibrado (Padrão)",
            Self::QualityTest => "💪 Prova de Qualidade (Agachamento/Teste)",
            Self::TextureZoom => "🔍 Macro/Textura (Zoom Detalhado)",
            Self::Movement => "💃 Caimento & Movimento (Giros)",
            Self::Lifestyle => "☕ Lifestyle (Uso Real)",
        }
    }

    pub fn from_label(value: &str) -> Self {
        parse_label(&Self::ALL, value, Self::label, Self::code)
    }
}

/// Unknown text maps to the enum's default so template lookup stays total.
fn parse_label<T: Copy + Default>(
    all: &[T],
    value: &str,
    label: fn(T) -> &'static str,
    code: fn(T) -> &'static str,
) -> T {
    let value = value.trim();
    all.iter()
        .copied()
        .find(|v| label(*v) == value || code(*v).eq_ignore_ascii_case(value))
        .unwrap_or_default()
}

macro_rules! string_conversions {
    ($($ty:ty),*) => {
        $(
            impl From<String> for $ty {
                fn from(value: String) -> Self {
                    Self::from_label(&value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.label().to_string()
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

string_conversions!(TargetModel, ProductType, VisualEmphasis);

/// Everything the assembler needs for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescription {
    pub product_name: String,
    pub features: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub has_price: bool,
    #[serde(default)]
    pub product_type: ProductType,
    pub environment: String,
    #[serde(default)]
    pub visual_emphasis: VisualEmphasis,
    #[serde(default)]
    pub target_model: TargetModel,
}

impl ProductDescription {
    pub fn new(
        product_name: impl Into<String>,
        features: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            features: features.into(),
            price: String::new(),
            has_price: false,
            product_type: ProductType::default(),
            environment: environment.into(),
            visual_emphasis: VisualEmphasis::default(),
            target_model: TargetModel::default(),
        }
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self.has_price = true;
        self
    }

    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = product_type;
        self
    }

    pub fn with_visual_emphasis(mut self, visual_emphasis: VisualEmphasis) -> Self {
        self.visual_emphasis = visual_emphasis;
        self
    }

    pub fn with_target_model(mut self, target_model: TargetModel) -> Self {
        self.target_model = target_model;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for emphasis in VisualEmphasis::ALL {
            assert_eq!(VisualEmphasis::from_label(emphasis.label()), emphasis);
            assert_eq!(VisualEmphasis::from_label(emphasis.code()), emphasis);
        }
        for product_type in ProductType::ALL {
            assert_eq!(ProductType::from_label(product_type.label()), product_type);
        }
        for model in TargetModel::ALL {
            assert_eq!(TargetModel::from_label(model.label()), model);
        }
    }

    #[test]
    fn test_unknown_labels_fall_back_to_default() {
        assert_eq!(VisualEmphasis::from_label("Drone Shot"), VisualEmphasis::Default);
        assert_eq!(ProductType::from_label("Digital Download"), ProductType::Physical);
        assert_eq!(TargetModel::from_label(""), TargetModel::Veo3);
    }

    #[test]
    fn test_code_names_are_case_insensitive() {
        assert_eq!(VisualEmphasis::from_label("texture_zoom"), VisualEmphasis::TextureZoom);
        assert_eq!(ProductType::from_label(" fashion "), ProductType::Fashion);
    }

    #[test]
    fn test_description_serializes_with_labels() {
        let product = ProductDescription::new("Legging", "Suplex", "Academia")
            .with_product_type(ProductType::Fashion)
            .with_visual_emphasis(VisualEmphasis::Movement);

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["productName"], "Legging");
        assert_eq!(json["productType"], "Fashion/Clothing");
        assert_eq!(json["visualEmphasis"], "Caimento & Movimento (Giros/Desfile)");
        assert_eq!(json["targetModel"], "Veo3");
    }

    #[test]
    fn test_description_accepts_codes_and_missing_optionals() {
        let product: ProductDescription = serde_json::from_str(
            r#"{"productName":"Copo","features":"Térmico","environment":"Cozinha","visualEmphasis":"LIFESTYLE","targetModel":"SORA2"}"#,
        )
        .unwrap();

        assert_eq!(product.visual_emphasis, VisualEmphasis::Lifestyle);
        assert_eq!(product.target_model, TargetModel::Sora2);
        assert_eq!(product.product_type, ProductType::Physical);
        assert!(!product.has_price);
        assert!(product.price.is_empty());
    }
}
