pub mod assembler;
pub mod decoder;
pub mod matcher;
pub mod mint;
pub mod pairer;
pub mod programs;
pub mod registry;
pub mod transfer;

pub use decoder::SwapDecoder;
pub use registry::SwapDecoderRegistry;
