//! Type helper functions for Config derive macro.

use quote::quote;
use syn::Type;

/// Convert syn::Type to string representation
pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Infer section name from struct name
pub fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .unwrap_or(name);
    to_snake_case(name)
}

/// Convert PascalCase to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Format default value based on field type.
/// Strings and paths get quoted, numbers, bools and arrays are used as-is.
pub fn format_default_for_type(value: &str, ty: &str) -> String {
    match ty {
        "String" | "PathBuf" => format!("\"{}\"", value),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_section() {
        assert_eq!(infer_section("ContentConfig"), "content");
        assert_eq!(infer_section("SiteSectionConfig"), "site");
        assert_eq!(infer_section("BuildConfig"), "build");
    }

    #[test]
    fn test_format_default() {
        assert_eq!(format_default_for_type("blog", "String"), "\"blog\"");
        assert_eq!(format_default_for_type("100", "f64"), "100");
        assert_eq!(format_default_for_type("[\"mdx\"]", "Vec<String>"), "[\"mdx\"]");
    }
}
