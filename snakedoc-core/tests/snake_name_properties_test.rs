use proptest::prelude::*;
use snakedoc_core::{has_extension, to_snake_name};

proptest! {
    #[test]
    fn converted_names_have_no_ascii_uppercase(stem in "[A-Za-z0-9_-]{0,24}") {
        let name = format!("{stem}.adoc");
        let converted = to_snake_name(&name);
        prop_assert!(!converted.bytes().any(|b| b.is_ascii_uppercase()));
        prop_assert!(has_extension(&converted, ".adoc"));
    }

    #[test]
    fn conversion_is_idempotent(stem in "[A-Za-z0-9_-]{0,24}") {
        let once = to_snake_name(&format!("{stem}.adoc"));
        prop_assert_eq!(to_snake_name(&once), once.clone());
    }

    #[test]
    fn lowercase_names_pass_through(stem in "[a-z0-9_-]{0,24}") {
        let name = format!("{stem}.adoc");
        prop_assert_eq!(to_snake_name(&name), name);
    }

    #[test]
    fn each_capital_adds_one_underscore(stem in "[a-z][A-Za-z]{0,24}") {
        let capitals = stem.bytes().filter(u8::is_ascii_uppercase).count();
        let converted = to_snake_name(&stem);
        prop_assert_eq!(converted.len(), stem.len() + capitals);
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(to_snake_name("MyPage.adoc"), "my_page.adoc");
    assert_eq!(to_snake_name("simplePage.adoc"), "simple_page.adoc");
    assert_eq!(to_snake_name("already_snake.adoc"), "already_snake.adoc");
    assert_eq!(to_snake_name("ABTest.adoc"), "a_b_test.adoc");
}
