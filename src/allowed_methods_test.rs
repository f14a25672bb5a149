use super::AllowedMethods;
use crate::constants::method;

mod list {
    use super::*;

    #[test]
    fn should_collect_into_list_variant_given_values_provided() {
        let result = AllowedMethods::list([method::GET, method::POST]);

        assert_eq!(
            result,
            AllowedMethods::List(vec!["GET".to_string(), "POST".to_string()])
        );
    }

    #[test]
    fn should_drop_blank_entries_given_values_include_empty_strings() {
        let result = AllowedMethods::list(["", " GET "]);

        assert_eq!(result, AllowedMethods::List(vec!["GET".to_string()]));
    }

    #[test]
    fn should_keep_case_variants_given_methods_are_case_sensitive() {
        let result = AllowedMethods::list(["GET", "get", "GET"]);

        assert_eq!(
            result,
            AllowedMethods::List(vec!["GET".to_string(), "get".to_string()])
        );
    }
}

mod compile {
    use super::*;

    #[test]
    fn should_match_case_sensitively_given_list() {
        // Arrange
        let rules = AllowedMethods::list([method::GET, method::POST, method::DELETE]).compile();

        // Act & Assert
        assert!(rules.allows("POST"));
        assert!(!rules.allows("post"));
        assert!(!rules.allows(method::PATCH));
        assert!(!rules.allows("X-DELETE"));
    }

    #[test]
    fn should_join_display_list_with_comma_space() {
        let rules = AllowedMethods::list([method::GET, method::POST, method::DELETE]).compile();

        assert_eq!(rules.display(), "GET, POST, DELETE");
    }

    #[test]
    fn should_allow_everything_given_any() {
        let rules = AllowedMethods::any().compile();

        assert!(rules.allows("BREW"));
        assert_eq!(rules.display(), "");
    }

    #[test]
    fn should_allow_nothing_given_default() {
        let rules = AllowedMethods::default().compile();

        assert!(!rules.allows(method::GET));
    }
}
