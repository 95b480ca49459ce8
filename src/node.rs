/// Registration metadata, execute entry point, change token.
pub mod adapter;
/// Host tensor boundary types.
pub mod tensor;
