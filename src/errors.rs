use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidNumericValue, "Invalid numeric value: '{value}'.", { value: &str });
define_client_error!(InvalidReceptionDate, "Invalid reception date: {date}.", { date: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(InvalidConfig, "Invalid configuration: {details}.", { details: &str });

// Presentation-related.
define_internal_error!(JsonExportFailed, "Failed to export hierarchy as JSON.");
