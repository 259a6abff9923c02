mod data;

pub(crate) use data::{float_column, float_values, string_column};
