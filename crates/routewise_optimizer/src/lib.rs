pub mod json;
pub mod problem;
pub mod solver;

#[cfg(test)]
pub(crate) mod test_utils;
