//! Built-in templates for every file cxxinit writes.
//!
//! The templates are rendered with the context assembled by
//! [`crate::generator`]. Keys available to them:
//! `name`, `version`, `cxx_standard`, `has_parent`, `test_option`,
//! `helpers_repository`, `cmake_namespace`, `cpp_namespace`, `alias`,
//! `output_name`, `children` and `naming_rules`.

use std::fmt;

/// One kind of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    PackageConfig,
    CmakeHelpers,
    ClangFormat,
    ClangTidy,
    AppNameHeader,
    AppMain,
    AppCMakeLists,
    LibCMakeLists,
    TestCMakeLists,
    TestMain,
    SuperCMakeLists,
}

impl Artifact {
    pub fn template(self) -> &'static str {
        match self {
            Artifact::PackageConfig => PACKAGE_CONFIG,
            Artifact::CmakeHelpers => CMAKE_HELPERS,
            Artifact::ClangFormat => CLANG_FORMAT,
            Artifact::ClangTidy => CLANG_TIDY,
            Artifact::AppNameHeader => APP_NAME_HEADER,
            Artifact::AppMain => APP_MAIN,
            Artifact::AppCMakeLists => APP_CMAKE_LISTS,
            Artifact::LibCMakeLists => LIB_CMAKE_LISTS,
            Artifact::TestCMakeLists => TEST_CMAKE_LISTS,
            Artifact::TestMain => TEST_MAIN,
            Artifact::SuperCMakeLists => SUPER_CMAKE_LISTS,
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Artifact::PackageConfig => "package config",
            Artifact::CmakeHelpers => "cmake helpers",
            Artifact::ClangFormat => "clang-format config",
            Artifact::ClangTidy => "clang-tidy config",
            Artifact::AppNameHeader => "application name header",
            Artifact::AppMain => "application main",
            Artifact::AppCMakeLists => "application build description",
            Artifact::LibCMakeLists => "library build description",
            Artifact::TestCMakeLists => "test build description",
            Artifact::TestMain => "test main",
            Artifact::SuperCMakeLists => "super project build description",
        };
        f.write_str(label)
    }
}

const PACKAGE_CONFIG: &str = r#"@PACKAGE_INIT@

if (NOT TARGET {{ name }})
    include(${CMAKE_CURRENT_LIST_DIR}/{{ name }}-targets.cmake)
endif()
"#;

const CMAKE_HELPERS: &str = r#"include(FetchContent)

FetchContent_Declare(
        ext_cmake_helpers
        GIT_REPOSITORY {{ helpers_repository }}
        GIT_TAG main
)
FetchContent_MakeAvailable(ext_cmake_helpers)
"#;

const CLANG_FORMAT: &str = r#"# Use the Google style in this project.
BasedOnStyle: Google

# Google style only asks for consistent pointer alignment; this project uses "int& foo".
DerivePointerAlignment: false
PointerAlignment: Left

# cv-qualifiers are written "const west".
QualifierAlignment: Left
"#;

const CLANG_TIDY: &str = r#"{% if has_parent %}
InheritParentConfig: true
{% else %}
Checks: >
  -*,
  abseil-*,
  bugprone-*,
  google-*,
  misc-*,
  modernize-*,
  performance-*,
  portability-*,
  readability-*
# Turn all the warnings from the checks above into errors.
WarningsAsErrors: "*"

CheckOptions:
{% for key, value in naming_rules %}
  - key:             readability-identifier-naming.{{ key }}
    value:           {{ value }}
{% endfor %}
{% endif %}
"#;

/// `readability-identifier-naming` options of the full clang-tidy rule table.
pub const NAMING_RULES: [(&str, &str); 24] = [
    ("ClassCase", "CamelCase"),
    ("ClassMemberCase", "lower_case"),
    ("ConstexprVariableCase", "CamelCase"),
    ("ConstexprVariablePrefix", "k"),
    ("EnumCase", "CamelCase"),
    ("EnumConstantCase", "CamelCase"),
    ("EnumConstantPrefix", "k"),
    ("FunctionCase", "CamelCase"),
    ("GlobalConstantCase", "CamelCase"),
    ("GlobalConstantPrefix", "k"),
    ("StaticConstantCase", "CamelCase"),
    ("StaticConstantPrefix", "k"),
    ("StaticVariableCase", "lower_case"),
    ("MacroDefinitionCase", "UPPER_CASE"),
    ("MacroDefinitionIgnoredRegexp", "'^[A-Z]+(_[A-Z]+)*_$'"),
    ("MemberCase", "lower_case"),
    ("PrivateMemberSuffix", "_"),
    ("PublicMemberSuffix", "''"),
    ("NamespaceCase", "lower_case"),
    ("ParameterCase", "lower_case"),
    ("TypeAliasCase", "CamelCase"),
    ("TypedefCase", "CamelCase"),
    ("VariableCase", "lower_case"),
    ("IgnoreMainLikeFunctions", "1"),
];

const APP_NAME_HEADER: &str = r#"namespace {{ cpp_namespace }} {
    const char* APP_NAME{"@F_APP_NAME@"};
}
"#;

const APP_MAIN: &str = r#"#include <cstdlib>
#include <iostream>

int main(int argc, char** argv) {
  return EXIT_SUCCESS;
}
"#;

const APP_CMAKE_LISTS: &str = r#"{% if not has_parent %}
cmake_minimum_required(VERSION ${CMAKE_VERSION})

{% endif %}
project({{ name }}
        LANGUAGES CXX
        VERSION {{ version }}
        )

{% if not has_parent %}
include(cmake/cmake_helpers.cmake)

option({{ test_option }} "Build project tests" ON)

{% endif %}
add_app(
        APP_NAME {{ name }}
        APP_CMAKE_NAMESPACE {{ cmake_namespace }}
        CXX_STANDARD {{ cxx_standard }}
        APP_OUTPUT_NAME {{ output_name }}
        APP_VERSION ${PROJECT_VERSION}
        APP_PRIVATE_INCLUDE_DIR
            {{ name }}
        APP_PRIVATE_SOURCES
            src/main.cpp
        # APP_PUBLIC_SOURCES
        # APP_PUBLIC_LIBRARIES
        # APP_PRIVATE_LIBRARIES
        # APP_PRIVATE_HEADERS
        # APP_DEPENDENCIES
)
"#;

const LIB_CMAKE_LISTS: &str = r#"{% if not has_parent %}
cmake_minimum_required(VERSION ${CMAKE_VERSION})

{% endif %}
project({{ name }}
        LANGUAGES CXX
        VERSION {{ version }}
        )

{% if not has_parent %}
include(cmake/cmake_helpers.cmake)

option({{ test_option }} "Build project tests" ON)

{% endif %}
add_lib(
        LIB_NAME {{ name }}
        LIB_CMAKE_NAMESPACE {{ cmake_namespace }}
        CXX_STANDARD {{ cxx_standard }}
        LIB_ALIAS_NAME {{ alias }}
        LIB_VERSION ${PROJECT_VERSION}
        # LIB_PUBLIC_HEADERS
        # LIB_PRIVATE_SOURCES
        # LIB_PUBLIC_LIBRARIES
        # LIB_PRIVATE_LIBRARIES
        # LIB_PRIVATE_HEADERS
)
if (${{ '{' ~ test_option ~ '}' }})
    add_subdirectory(tests)
endif ()
"#;

const TEST_CMAKE_LISTS: &str = r#"option({{ test_option }} "Build project tests" ON)

find_package(Catch2 3 REQUIRED)

add_catch2_test(
        APP_NAME {{ name }}_tests
        CXX_STANDARD {{ cxx_standard }}
        APP_DEPENDENCIES
            {{ cmake_namespace }}::{{ alias }}
        APP_PRIVATE_SOURCES
            src/main.cpp
        APP_PRIVATE_LIBRARIES
            {{ cmake_namespace }}::{{ alias }}
            Catch2::Catch2
)
"#;

const TEST_MAIN: &str = r#"#include <catch2/catch_session.hpp>

auto main(int argc, char* argv[]) -> int {
  Catch::Session session;  // There must be exactly one instance

  // Writing to session.configData() here sets defaults.

  int return_code = session.applyCommandLine(argc, argv);
  if (return_code != 0) {  // Indicates a command line error
    return return_code;
  }

  // Writing to session.configData() here overrides command line arguments.

  // The number of failures is clamped to 255 by Catch2.
  return session.run();
}
"#;

const SUPER_CMAKE_LISTS: &str = r#"cmake_minimum_required(VERSION ${CMAKE_VERSION})

project({{ name }}
        LANGUAGES CXX
        VERSION {{ version }}
        )

include(cmake/cmake_helpers.cmake)

option({{ test_option }} "Build project tests" ON)

{% for child in children %}
add_subdirectory({{ child }})
{% endfor %}
"#;
