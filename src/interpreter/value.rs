/// Runtime values and their kinds.
///
/// Defines [`Value`](core::Value), the result of every expression, and
/// [`Kind`](core::Kind), the category a variable is pinned to at its
/// definition.
pub mod core;
