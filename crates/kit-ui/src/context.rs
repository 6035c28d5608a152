use dioxus::prelude::*;
use kit_types::{IdAllocator, KitConfig};

/// Provide kit configuration and the group id allocator to every component
/// below the caller.
///
/// Call once near the top of the app, the same way other shared state is
/// seeded with `use_context_provider`.
pub fn use_kit_provider(config: KitConfig, ids: IdAllocator) {
    use_context_provider(|| config);
    use_context_provider(|| ids);
}

/// Configuration from context, or the defaults when none was provided.
pub fn use_kit_config() -> KitConfig {
    try_use_context::<KitConfig>().unwrap_or_default()
}

/// Id allocator from context, or a random-token allocator when none was provided.
pub fn use_id_allocator() -> IdAllocator {
    try_use_context::<IdAllocator>().unwrap_or_default()
}
