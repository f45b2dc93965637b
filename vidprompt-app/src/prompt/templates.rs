use crate::domain::{ProductDescription, ProductType, VisualEmphasis};

/// Camera and talent direction for one visual emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisTemplate {
    pub camera: &'static str,
    pub action: &'static str,
}

const DEFAULT: EmphasisTemplate = EmphasisTemplate {
    camera: "Mix of medium shots (waist up) and close-ups on hands.",
    action: "Standard influencer presentation: holding product, pointing, smiling, and the 'Link' gesture.",
};

const QUALITY_TEST: EmphasisTemplate = EmphasisTemplate {
    camera: "Camera Position: Low angle looking up or side profile to capture depth. Start steady, then zoom in slightly during the movement.",
    action: "CRITICAL ACTION: If this is legwear/activewear, she MUST perform a deep squat (squat test) or bend over slightly to prove the fabric is non-transparent (squat-proof) and stretchy. She should pull the fabric at the waist to show elasticity.",
};

const TEXTURE_ZOOM: EmphasisTemplate = EmphasisTemplate {
    camera: "Camera Lens: Macro 100mm style. Use 'Rack Focus' shifting from her face to the product texture. Extreme close-ups on the material/fabric/surface.",
    action: "She brings the product/fabric extremely close to the lens. She runs her manicured nails slowly over the surface to show texture (ribbed, silk, matte). She pinches the fabric to show thickness.",
};

const MOVEMENT: EmphasisTemplate = EmphasisTemplate {
    camera: "Camera Movement: 'Orbital Shot' (circling the model) or 'Dolly Out' as she walks. Slow-motion segments (60fps style) when she turns.",
    action: "She performs a full 360-degree spin (twirl) to show the back of the outfit. She walks forward, then turns her back to the camera and looks over her shoulder. She grabs the skirt/dress/fabric and lets it flow/drop to show how lightweight it is.",
};

const LIFESTYLE: EmphasisTemplate = EmphasisTemplate {
    camera: "Camera Style: Handheld aesthetic (stabilized) for a vlog/POV feel. Dynamic and following her movement.",
    action: "She is using the product in a real scenario (e.g., drinking from the cup, typing on the device, fixing her hair). It should feel candid and unposed, like a 'Get Ready With Me' snippet.",
};

impl VisualEmphasis {
    /// No wildcard arm: a new variant does not compile until it has a template.
    pub fn template(self) -> &'static EmphasisTemplate {
        match self {
            Self::Default => &DEFAULT,
            Self::QualityTest => &QUALITY_TEST,
            Self::TextureZoom => &TEXTURE_ZOOM,
            Self::Movement => &MOVEMENT,
            Self::Lifestyle => &LIFESTYLE,
        }
    }
}

pub fn look_instruction(product: &ProductDescription) -> String {
    match product.product_type {
        ProductType::Fashion => format!(
            "The \"LOOK\" section must describe the '{}' being WORN. Specify fit (high-waisted, compressive, loose), fabric finish (matte, glossy, ribbed), and color vibrancy.",
            product.product_name
        ),
        ProductType::Physical => format!(
            "The \"LOOK\" describes a stylish outfit fitting '{}', but the focus is on the '{}' she is holding/using.",
            product.environment, product.product_name
        ),
    }
}

pub fn price_instruction(product: &ProductDescription) -> String {
    if product.has_price {
        format!(
            "Include the price ({}) naturally in the Portuguese dialogue.",
            product.price
        )
    } else {
        "Do not mention a specific number. Use terms like \"preço de fábrica\", \"super oferta\", \"queima de estoque\".".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_emphasis_has_distinct_template() {
        let cameras: HashSet<_> = VisualEmphasis::ALL
            .iter()
            .map(|e| e.template().camera)
            .collect();
        let actions: HashSet<_> = VisualEmphasis::ALL
            .iter()
            .map(|e| e.template().action)
            .collect();

        assert_eq!(cameras.len(), VisualEmphasis::ALL.len());
        assert_eq!(actions.len(), VisualEmphasis::ALL.len());
    }

    #[test]
    fn test_templates_match_fixed_text() {
        assert_eq!(VisualEmphasis::QualityTest.template(), &QUALITY_TEST);
        assert_eq!(VisualEmphasis::TextureZoom.template(), &TEXTURE_ZOOM);
        assert_eq!(VisualEmphasis::Movement.template(), &MOVEMENT);
        assert_eq!(VisualEmphasis::Lifestyle.template(), &LIFESTYLE);
        assert_eq!(VisualEmphasis::Default.template(), &DEFAULT);

        assert!(QUALITY_TEST.action.contains("deep squat"));
        assert!(QUALITY_TEST.action.contains("elasticity"));
        assert!(TEXTURE_ZOOM.camera.contains("Macro 100mm"));
        assert!(MOVEMENT.action.contains("360-degree spin"));
        assert!(LIFESTYLE.camera.contains("Handheld"));
    }

    #[test]
    fn test_unknown_emphasis_uses_default_pair() {
        assert_eq!(VisualEmphasis::from_label("Drone Flyover").template(), &DEFAULT);
    }

    #[test]
    fn test_look_instruction_by_product_type() {
        let physical = ProductDescription::new("Garrafa Térmica", "Inox", "Praia Paradisíaca");
        let fashion = physical.clone().with_product_type(ProductType::Fashion);

        assert_eq!(
            look_instruction(&physical),
            "The \"LOOK\" describes a stylish outfit fitting 'Praia Paradisíaca', but the focus is on the 'Garrafa Térmica' she is holding/using."
        );
        assert_eq!(
            look_instruction(&fashion),
            "The \"LOOK\" section must describe the 'Garrafa Térmica' being WORN. Specify fit (high-waisted, compressive, loose), fabric finish (matte, glossy, ribbed), and color vibrancy."
        );
    }

    #[test]
    fn test_price_instruction() {
        let with_price = ProductDescription::new("Legging", "Suplex", "Academia").with_price("R$ 49,90");
        assert_eq!(
            price_instruction(&with_price),
            "Include the price (R$ 49,90) naturally in the Portuguese dialogue."
        );

        let mut hidden = with_price.clone();
        hidden.has_price = false;
        let text = price_instruction(&hidden);
        assert!(!text.contains("49,90"));
        assert!(text.contains("preço de fábrica"));
    }
}
