
mod plan_tests;
mod snippet_tests;
