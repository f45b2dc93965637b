use super::templates::{look_instruction, price_instruction};
use crate::domain::ProductDescription;

pub const VARIATION_COUNT: usize = 4;

/// The two texts sent to the generation model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    pub system_instruction: String,
    pub task_instruction: String,
}

impl AssembledPrompt {
    /// Pure: the same product always yields byte-identical text.
    pub fn build(product: &ProductDescription) -> Self {
        Self {
            system_instruction: build_system_instruction(product),
            task_instruction: build_task_instruction(product),
        }
    }
}

pub fn build_system_instruction(product: &ProductDescription) -> String {
    let emphasis = product.visual_emphasis.template();
    let look = look_instruction(product);
    let price = price_instruction(product);

    format!(
        r#"You are a World-Class Director of Photography and Prompt Engineer for Veo3/Sora2.

YOUR GOAL: Create hyper-realistic, high-converting video prompts for TikTok Shop.

INPUT CONTEXT:
- Product: {name}
- Type: {product_type}
- Features: {features}
- Environment: {environment}
- Visual Strategy: {strategy}

INSTRUCTIONS FOR REALISM:
1. **Lighting:** Always specify how light hits the material (e.g., "Subsurface scattering on skin", "Specular highlights on the fabric", "Soft diffused daylight").
2. **Camera:** Use cinematic terms: Depth of Field (Bokeh), Rack Focus, Dolly Zoom, Gimbal Smooth.
3. **Fabric/Physics:** If fashion, describe how the cloth moves (heavy drape, lightweight flow, stretch tension).

OUTPUT FORMAT (Strict Block Structure):

CHARACTER:
[Stunning influencer description. Skin texture, hair physics, expression.]

LOOK:
[{look}]

SCENE SETUP:
Location: {environment}.
Background: [Depth and detail].
Lighting: [Cinematic lighting description].
Aspect ratio: 9:16 vertical, photorealistic 4K.

CAMERA MOVEMENTS:
[{camera}]

ACTIONS:
[{action}
 IN ADDITION: She gestures the specific sales pitch. She MUST point down or to the side repeatedly for the "Carrinho Laranja".]

DIALOGUE (Portuguese): INFLUENCIADORA: "[Natural, fast-paced PT-BR script. Mention features + 'Carrinho Laranja'. {price}]"

ENDING:
She smiles broadly. After the main shot fades, a short animated outro appears featuring the TikTok logo in the lower right corner, followed by the glowing white text “@achadinhos_da_ellenr”.
The animation lasts around 1.5 seconds, with a smooth fade-in and subtle pulse effect.

--------------------------------------------------

GENERATE {count} VARIATIONS."#,
        name = product.product_name,
        product_type = product.product_type.label(),
        features = product.features,
        environment = product.environment,
        strategy = product.visual_emphasis.label(),
        look = look,
        camera = emphasis.camera,
        action = emphasis.action,
        price = price,
        count = VARIATION_COUNT,
    )
}

pub fn build_task_instruction(product: &ProductDescription) -> String {
    format!(
        "Generate {} professional, cinematic prompts for {}. Focus on: {}. Follow the format.",
        VARIATION_COUNT,
        product.product_name,
        product.visual_emphasis.label()
    )
}
