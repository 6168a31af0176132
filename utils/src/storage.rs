// Instance storage accessors. Callers must have `paste::paste`, `bump_instance`,
// `StorageError` and `panic_with_error` in scope.

#[macro_export]
macro_rules! generate_instance_storage_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            pub(crate) fn [<set_ $attr_name>](e: &Env, $attr_name: &$data_type) {
                e.storage().instance().set(&$key, $attr_name);
                bump_instance(e);
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            pub(crate) fn [<get_ $attr_name>](e: &Env) -> $data_type {
                match e.storage().instance().get(&$key) {
                    Some(value) => {
                        bump_instance(e);
                        value
                    }
                    None => panic_with_error!(e, StorageError::ValueNotInitialized),
                }
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        generate_instance_storage_getter!($attr_name, $key, $data_type);
        generate_instance_storage_setter!($attr_name, $key, $data_type);
    };
}
