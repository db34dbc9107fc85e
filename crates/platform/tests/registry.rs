use std::sync::Barrier;
use std::thread;

use mdg_platform::{FABRIC, FORGE, Platform, PlatformRegistry, QUILT, SPIGOT, UNKNOWN};
use proptest::prelude::*;

#[test]
fn well_known_lookups_are_case_insensitive() {
    let registry = PlatformRegistry::new();
    assert!(registry.of("forge").ptr_eq(&FORGE));
    assert!(registry.of("FABRIC").ptr_eq(&FABRIC));
    assert!(registry.of("Quilt").ptr_eq(&QUILT));
    assert!(registry.of("SPIGOT").ptr_eq(&SPIGOT));
    assert_eq!(registry.of("forge").to_string(), "Forge");
}

#[test]
fn creating_path_is_visible_to_non_creating_path() {
    let registry = PlatformRegistry::new();
    assert!(registry.from_registry("nonexistent").ptr_eq(&UNKNOWN));
    assert!(registry.from_registry("nonexistent").ptr_eq(&UNKNOWN));

    let created = registry.of("nonexistent");
    assert!(registry.from_registry("NONEXISTENT").ptr_eq(&created));
}

#[test]
fn registries_are_independent() {
    let a = PlatformRegistry::new();
    let b = PlatformRegistry::new();
    a.of("paper");

    assert!(b.from_registry("paper").is_unknown());
    // Well-known platforms are shared by every registry
    assert!(a.of("forge").ptr_eq(&b.of("forge")));
}

#[test]
fn concurrent_first_lookups_share_one_instance() {
    const THREADS: usize = 16;

    let registry = PlatformRegistry::new();
    let barrier = Barrier::new(THREADS);

    let results: Vec<Platform> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let registry = &registry;
                let barrier = &barrier;
                s.spawn(move || {
                    barrier.wait();
                    if i % 2 == 0 {
                        registry.of("newname")
                    } else {
                        registry.of("NewName")
                    }
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = &results[0];
    assert!(results.iter().all(|p| p.ptr_eq(first)));
    assert_eq!(registry.len(), 6);
}

proptest! {
    #[test]
    fn of_ignores_ascii_case(name in "[a-zA-Z0-9_-]{0,16}") {
        let registry = PlatformRegistry::new();
        let platform = registry.of(&name);
        prop_assert!(registry.of(name.to_ascii_uppercase()).ptr_eq(&platform));
        prop_assert!(registry.of(name.to_ascii_lowercase()).ptr_eq(&platform));
        prop_assert_eq!(platform.name(), name.to_ascii_lowercase());
    }

    #[test]
    fn from_registry_never_grows_the_table(name in "\\PC{0,16}") {
        let registry = PlatformRegistry::new();
        let before = registry.len();
        let found = registry.from_registry(&name);
        prop_assert_eq!(registry.len(), before);
        prop_assert!(found.is_unknown() || found.is_well_known());
    }
}
