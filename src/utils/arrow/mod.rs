//! Arrow utilities for column lookup and conversion

pub mod array_utils;

pub use self::array_utils::{find_column_index, normalize_header, string_column, value_at};
