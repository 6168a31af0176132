use crate::types::DataProviderConfig;
use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Env};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Config,
}

generate_instance_storage_getter_and_setter!(config, DataKey::Config, DataProviderConfig);
