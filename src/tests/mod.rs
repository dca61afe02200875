#[cfg(test)]
pub mod common;

#[cfg(test)]
mod operations;
