use super::*;
use crate::constants::header;

mod new {
    use super::*;

    #[test]
    fn should_start_with_empty_headers_when_called() {
        // Arrange & Act
        let collection = HeaderCollection::new();

        // Assert
        assert!(collection.into_headers().is_empty());
    }
}

mod push {
    use super::*;

    #[test]
    fn should_store_once_given_header_is_regular() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-Trace");
        collection.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-Other");

        // Assert
        let headers = collection.into_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_EXPOSE_HEADERS),
            Some(&"X-Other".to_string())
        );
    }

    #[test]
    fn should_keep_insertion_order() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "http://a.test");
        collection.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        collection.push(header::VARY, "Origin");

        // Assert
        let names: Vec<_> = collection.into_headers().into_keys().collect();
        assert_eq!(
            names,
            vec![
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                header::VARY,
            ]
        );
    }

    #[test]
    fn should_use_deduplicated_value_given_header_is_vary() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(header::VARY, "Origin");
        collection.push("vary", "origin");

        // Assert
        let headers = collection.into_headers();
        assert_eq!(headers.get(header::VARY), Some(&"Origin".to_string()));
    }
}

mod add_vary {
    use super::*;

    #[test]
    fn should_store_unique_entries_given_values_have_mixed_case() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.add_vary("Origin");
        collection.add_vary("Access-Control-Request-Headers");
        collection.add_vary("origin");

        // Assert
        let headers = collection.into_headers();
        assert_eq!(
            headers.get(header::VARY),
            Some(&"Origin, Access-Control-Request-Headers".to_string())
        );
    }

    #[test]
    fn should_ignore_whitespace_value() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.add_vary("   ");

        // Assert
        assert!(collection.into_headers().get(header::VARY).is_none());
    }
}
