pub mod resource_key;

pub use resource_key::ResourceKey;
