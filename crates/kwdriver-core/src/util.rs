/// Returns the value unless it is empty or whitespace-only.
pub(crate) fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Strips the module path and generic arguments from a fully-qualified type
/// path, leaving the bare type name.
pub(crate) fn simple_type_name(full: &str) -> &str {
    let base = match full.find('<') {
        Some(index) => &full[..index],
        None => full,
    };
    match base.rfind("::") {
        Some(index) => &base[index + 2..],
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_rejects_empty() {
        assert_eq!(non_blank(""), None);
    }

    #[test]
    fn non_blank_rejects_whitespace_only() {
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank("\t\n"), None);
    }

    #[test]
    fn non_blank_keeps_value_verbatim() {
        assert_eq!(non_blank("Click Button"), Some("Click Button"));
        assert_eq!(non_blank("  padded  "), Some("  padded  "));
    }

    #[test]
    fn simple_type_name_strips_module_path() {
        assert_eq!(simple_type_name("kwdriver_core::builder::LoginKeyword"), "LoginKeyword");
        assert_eq!(simple_type_name("LoginKeyword"), "LoginKeyword");
    }

    #[test]
    fn simple_type_name_strips_generic_arguments() {
        assert_eq!(simple_type_name("app::keywords::Retry<app::keywords::Click>"), "Retry");
    }
}
