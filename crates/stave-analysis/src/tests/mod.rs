mod barrel_tests;
mod edge_cases;
mod property_tests;
