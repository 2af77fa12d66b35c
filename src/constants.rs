//! Common constants used throughout theme-builder.

/// Supported builder manifest names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["builder.json", "builder.yml", "builder.yaml"];

/// File extensions scanned by substitutions unless the manifest overrides them
pub const DEFAULT_EXTENSIONS: [&str; 6] = ["php", "css", "txt", "scss", "js", "json"];

/// Path fragments never scanned by substitutions unless the manifest overrides them
pub const DEFAULT_EXCLUDES: [&str; 1] = ["node_modules"];

pub const DEFAULT_README: &str = "README.md";
pub const DEFAULT_STYLESHEET: &str = "css/styles.css";
pub const DEFAULT_PROTOTYPE: &str = "extensions/custom-post-types/custom-post-type.php";
pub const DEFAULT_INSTANCE_SUFFIX: &str = "-post-type-class.php";
pub const DEFAULT_INCLUDE_MARKER: &str = "{%= post_type_include %}";
pub const DEFAULT_INCLUDE_TEMPLATE: &str = "require get_template_directory() . '/{{ path }}';";

/// Placeholder tokens filled from operator answers
pub mod tokens {
    pub const TITLE: &str = "{%= title %}";
    pub const TITLE_CAPITALIZE: &str = "{%= title_capitalize %}";
    pub const THEME_URI: &str = "{%= theme_uri %}";
    pub const AUTHOR: &str = "{%= author %}";
    pub const AUTHOR_URI: &str = "{%= author_uri %}";
    pub const PREFIX: &str = "{%= prefix %}";
    pub const PREFIX_CAPITALIZE: &str = "{%= prefix_capitalize %}";
    pub const DESCRIPTION: &str = "{%= description %}";
    pub const POST_TYPE_NAME: &str = "{%= post_type_name %}";
    pub const POST_TYPE_NAME_CAPITALIZE: &str = "{%= post_type_name_capitalize %}";
}

/// Conditional block tags found in the theme template
pub mod tags {
    pub const VIP: &str = "VIP";
    pub const LANG: &str = "LANG";
    pub const CUSTOM_POSTS: &str = "CUSTOM-POSTS";
    pub const SASSGULP: &str = "SASSGULP";
    pub const COMPASS: &str = "COMPASS";
    pub const GULPCOMPASS: &str = "GULPCOMPASS";
    pub const GULPNONCOMPASS: &str = "GULPNONCOMPASS";
    pub const GULP: &str = "GULP";
    pub const NONGULP: &str = "NONGULP";
}

/// Optional parts of the theme template removed when declined
pub mod paths {
    pub const LANGUAGES: &str = "languages";
    pub const SASS: &str = "sass";
    pub const COMPASS_CONFIG: &str = "config.rb";
    pub const GULPFILE: &str = "gulpfile.js";
    pub const PACKAGE_JSON: &str = "package.json";
}
