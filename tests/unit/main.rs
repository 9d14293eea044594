//! Unit test modules.

mod cache_test;
mod contrast_ratio_test;
