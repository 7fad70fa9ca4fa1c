pub mod cli;
pub mod collect;
pub mod config;
pub mod logging;

#[cfg(test)]
mod test_utils;
