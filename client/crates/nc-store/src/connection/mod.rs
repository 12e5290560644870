pub mod sqlite_key_value_store;
