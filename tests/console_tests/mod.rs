//! Console front end tests

mod console_tests;
