mod cli_tests;
mod package_manager_tests;
