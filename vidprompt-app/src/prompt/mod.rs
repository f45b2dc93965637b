mod assembler;
mod templates;

pub use assembler::{
    build_system_instruction, build_task_instruction, AssembledPrompt, VARIATION_COUNT,
};
pub use templates::{look_instruction, price_instruction, EmphasisTemplate};
