//! Common constants used throughout cxxinit.

/// Build description file name, used for every project and for `tests/`.
pub const CMAKE_LISTS: &str = "CMakeLists.txt";

/// Bootstrap of the external CMake helper macros, written into `cmake/`.
pub const CMAKE_HELPERS: &str = "cmake_helpers.cmake";

/// Repository providing `add_lib`, `add_app` and `add_catch2_test`.
pub const CMAKE_HELPERS_REPOSITORY: &str = "https://github.com/tomvercaut/cmake_helpers.git";

pub const CLANG_FORMAT: &str = ".clang-format";

pub const CLANG_TIDY: &str = ".clang-tidy";

/// Header template configured by CMake with the application name.
pub const APP_NAME_HEADER: &str = "app_name.h.in";

pub const MAIN_SOURCE: &str = "main.cpp";

/// Version written into every generated `project()` call.
pub const PROJECT_VERSION: &str = "0.0.1";
