//! Items used by code generated from `ds_describe_derive`.
//!
//! Not public API, names may change without notice.

// -----------------------------------------------------------------------------
// auto_register

crate::cfg::auto_register! {
    pub mod auto_register {
        pub use inventory;

        use crate::info::Typed;
        use crate::registry::TypeRegistry;

        /// A registration function submitted by `#[describe(auto_register)]`.
        pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

        inventory::collect!(__AutoRegisterFunc);

        /// Registers the implementing type into a registry.
        pub trait __RegisterType {
            fn __register(registry: &mut TypeRegistry);
        }

        impl<T: Typed> __RegisterType for T {
            #[inline]
            fn __register(registry: &mut TypeRegistry) {
                registry.register::<T>();
            }
        }

        // Always submitted, so it only runs where `inventory` works.
        fn mark_available(registry: &mut TypeRegistry) {
            registry.auto_registered = true;
        }

        inventory::submit! {
            __AutoRegisterFunc(mark_available)
        }

        /// Runs every submitted registration function.
        pub fn __register_types(registry: &mut TypeRegistry) {
            for func in inventory::iter::<__AutoRegisterFunc> {
                (func.0)(registry);
            }
        }
    }
}
