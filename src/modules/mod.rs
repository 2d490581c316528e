pub mod feedback;
pub mod library;
pub mod shelf;

use bookshelf_kernel::ModuleRegistry;

/// Register every book module with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(library::create_module());
    registry.register(shelf::create_module());
}
