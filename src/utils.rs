pub mod affixes;
pub mod is_binary;
pub mod naive_search;
pub mod side;
