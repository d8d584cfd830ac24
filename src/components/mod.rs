// Reusable UI components

pub mod code_block;
pub mod icons;
pub mod theme_toggle;

pub use code_block::CodeBlock;
pub use theme_toggle::ThemeToggle;
