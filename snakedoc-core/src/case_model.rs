use regex::Regex;
use std::sync::OnceLock;

static UPPERCASE_LETTER: OnceLock<Regex> = OnceLock::new();

fn uppercase_letter() -> &'static Regex {
    UPPERCASE_LETTER.get_or_init(|| Regex::new("[A-Z]").expect("static regex is valid"))
}

/// Convert a camelCase or PascalCase file name to snake_case.
///
/// Every ASCII uppercase letter gets an underscore in front of it, then the
/// whole name is lowercased. The leading underscore produced for a name that
/// starts with an uppercase letter is dropped; one that was already there is
/// kept. Runs of capitals are split letter by letter (`ABTest` -> `a_b_test`).
///
/// ```
/// use snakedoc_core::to_snake_name;
///
/// assert_eq!(to_snake_name("MyPage.adoc"), "my_page.adoc");
/// assert_eq!(to_snake_name("simplePage.adoc"), "simple_page.adoc");
/// assert_eq!(to_snake_name("already_snake.adoc"), "already_snake.adoc");
/// ```
pub fn to_snake_name(name: &str) -> String {
    let starts_upper = name.bytes().next().is_some_and(|b| b.is_ascii_uppercase());
    let separated = uppercase_letter().replace_all(name, "_$0");
    let lowered = separated.to_lowercase();

    if starts_upper {
        lowered
            .strip_prefix('_')
            .map_or_else(|| lowered.clone(), str::to_string)
    } else {
        lowered
    }
}

/// Literal, case-sensitive suffix check (`notes.ADOC` does not match `.adoc`).
pub fn has_extension(name: &str, extension: &str) -> bool {
    name.ends_with(extension)
}
