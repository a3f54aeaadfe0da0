
#[cfg(test)]
mod projection_tests;
