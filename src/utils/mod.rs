// Utility functions
// Helpers shared across components

pub mod clipboard;
pub mod copy_feedback;
