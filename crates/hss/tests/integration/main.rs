
mod build_tests;
